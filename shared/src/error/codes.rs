//! Unified error codes for recipe print codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Recipe errors (step types, recipe steps, containment)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the dashboard can
/// match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,

    // ==================== 6xxx: Recipe ====================
    /// Step type not found in catalog
    StepTypeNotFound = 6101,
    /// Step type code is not printable as a token
    StepTypeCodeInvalid = 6102,
    /// Step type id already present in catalog
    StepTypeDuplicate = 6103,
    /// Containment graph has a cycle
    CyclicContainment = 6202,
    /// Instruction text too long
    InstructionTooLong = 6203,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9002,
    /// File could not be read
    FileReadFailed = 9101,
    /// File content could not be parsed
    FileParseFailed = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field is missing",

            // Recipe
            ErrorCode::StepTypeNotFound => "Step type not found",
            ErrorCode::StepTypeCodeInvalid => "Step type code is invalid",
            ErrorCode::StepTypeDuplicate => "Step type already exists",
            ErrorCode::CyclicContainment => "Recipe steps contain each other in a cycle",
            ErrorCode::InstructionTooLong => "Step instruction is too long",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::FileReadFailed => "Failed to read file",
            ErrorCode::FileParseFailed => "Failed to parse file",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),

            // Recipe
            6101 => Ok(ErrorCode::StepTypeNotFound),
            6102 => Ok(ErrorCode::StepTypeCodeInvalid),
            6103 => Ok(ErrorCode::StepTypeDuplicate),
            6202 => Ok(ErrorCode::CyclicContainment),
            6203 => Ok(ErrorCode::InstructionTooLong),

            // System
            9002 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::FileReadFailed),
            9102 => Ok(ErrorCode::FileParseFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
