//! Unified error handling
//!
//! - [`ErrorCode`]: numeric codes shared with the dashboard
//! - [`ErrorCategory`]: classification by code range
//! - [`AppError`]: error value carrying a code, message and details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::StepTypeCodeInvalid, "code contains '('")
//!     .with_detail("code", "mk(");
//! assert_eq!(err.code.category(), ErrorCategory::Recipe);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
