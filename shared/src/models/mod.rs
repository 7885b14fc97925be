//! Data models
//!
//! Shared between the print code engine and the dashboard (JSON, camelCase
//! where the dashboard sends camelCase). All IDs are `String`.

pub mod recipe_step;
pub mod step_type;

// Re-exports
pub use recipe_step::*;
pub use step_type::*;
