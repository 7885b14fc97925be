//! Error types for the print code engine

use std::path::PathBuf;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Print code error types
#[derive(Debug, Error)]
pub enum PrintCodeError {
    /// Steps contain each other, directly or transitively
    #[error("Cyclic containment: {}", .path.join(" -> "))]
    CyclicContainment { path: Vec<String> },

    /// File could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for the expected shape
    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog or step validation failed
    #[error("Validation failed: {0}")]
    Validation(#[from] AppError),

    /// Invalid runtime configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl PrintCodeError {
    /// Map onto the shared error code table
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::CyclicContainment { .. } => ErrorCode::CyclicContainment,
            Self::Io { .. } => ErrorCode::FileReadFailed,
            Self::Json { .. } => ErrorCode::FileParseFailed,
            Self::Validation(err) => err.code,
            Self::InvalidConfig(_) => ErrorCode::ConfigError,
        }
    }
}

/// Result type for print code operations
pub type PrintCodeResult<T> = Result<T, PrintCodeError>;
