//! Shared types for recipe print codes
//!
//! Common types used by the print code engine and its callers:
//! data models, validation helpers and the unified error types.

pub mod error;
pub mod models;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{
    PreviewStepInput, RecipeDocument, RecipeStep, StepCategory, StepPreview, StepType,
    StepTypeCreate, StepTypeUpdate,
};
pub use serde::{Deserialize, Serialize};
