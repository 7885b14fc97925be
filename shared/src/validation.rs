//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - ESC/POS 80mm printer line width: 48 chars
//! - Print code syntax: tokens are separated by spaces and grouped by parentheses

use crate::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: step type names
pub const MAX_NAME_LEN: usize = 200;

/// Step type print token (`mk`, `sg`, `blender`)
pub const MAX_STEP_CODE_LEN: usize = 16;

/// Step instruction suffix (quantity, operation code)
pub const MAX_INSTRUCTION_LEN: usize = 64;

/// Characters with a meaning inside a print code
const RESERVED_CODE_CHARS: [char; 2] = ['(', ')'];

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a step type print token.
///
/// An empty token is allowed (the step prints only its instruction).
/// The token is printed verbatim, so it must not contain whitespace
/// (segment separator) or parentheses (containment group).
pub fn validate_step_code(code: &str) -> AppResult<()> {
    if code.chars().count() > MAX_STEP_CODE_LEN {
        return Err(AppError::validation(format!(
            "code is too long ({} chars, max {MAX_STEP_CODE_LEN})",
            code.chars().count()
        ))
        .with_detail("field", "code"));
    }
    if let Some(c) = code
        .chars()
        .find(|c| c.is_whitespace() || RESERVED_CODE_CHARS.contains(c))
    {
        return Err(AppError::with_message(
            ErrorCode::StepTypeCodeInvalid,
            format!("code must not contain {c:?}"),
        )
        .with_detail("code", code));
    }
    Ok(())
}

/// Validate a step instruction suffix.
pub fn validate_instruction(instruction: Option<&str>) -> AppResult<()> {
    if let Some(text) = instruction
        && text.chars().count() > MAX_INSTRUCTION_LEN
    {
        return Err(AppError::with_message(
            ErrorCode::InstructionTooLong,
            format!(
                "instruction is too long ({} chars, max {MAX_INSTRUCTION_LEN})",
                text.chars().count()
            ),
        ));
    }
    Ok(())
}
