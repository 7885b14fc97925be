//! Step Type Model

use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{MAX_NAME_LEN, validate_required_text, validate_step_code};

/// Step type category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    Ingredient,
    Equipment,
    Manual,
    Timing,
    /// Only used by the placeholder for unresolved step types
    Action,
}

/// Step type entity (catalog entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepType {
    pub id: String,
    /// Print token, e.g. "mk", "sg"
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub category: StepCategory,
}

impl StepType {
    /// Placeholder shown in previews when a step's type cannot be resolved
    pub fn unknown() -> Self {
        Self {
            id: String::new(),
            code: "?".to_string(),
            name: "Unknown".to_string(),
            category: StepCategory::Action,
        }
    }

    /// Validate code and name for catalog use (an empty code is allowed)
    pub fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.id, "id", MAX_NAME_LEN)?;
        validate_step_code(&self.code)?;
        validate_required_text(&self.name, "name", MAX_NAME_LEN)
    }
}

/// Create step type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTypeCreate {
    pub code: String,
    pub name: String,
    pub category: StepCategory,
}

impl StepTypeCreate {
    pub fn validate(&self) -> AppResult<()> {
        validate_step_code(&self.code)?;
        validate_required_text(&self.name, "name", MAX_NAME_LEN)
    }

    /// Build the entity under the given id
    pub fn into_step_type(self, id: impl Into<String>) -> StepType {
        StepType {
            id: id.into(),
            code: self.code,
            name: self.name,
            category: self.category,
        }
    }
}

/// Update step type payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepTypeUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<StepCategory>,
}

impl StepTypeUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(code) = &self.code {
            validate_step_code(code)?;
        }
        if let Some(name) = &self.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        Ok(())
    }

    /// Apply the present fields onto an existing step type
    pub fn apply_to(self, step_type: &mut StepType) {
        if let Some(code) = self.code {
            step_type.code = code;
        }
        if let Some(name) = self.name {
            step_type.name = name;
        }
        if let Some(category) = self.category {
            step_type.category = category;
        }
    }
}
