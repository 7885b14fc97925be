//! Recipe Step Model

use serde::{Deserialize, Serialize};

use super::step_type::StepType;
use crate::error::AppResult;
use crate::validation::validate_instruction;

/// Recipe step entity
///
/// Containment is expressed by step id. A step listed in another step's
/// `contained_steps` is printed inside that step's parentheses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    /// Present once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub step_type_id: String,
    /// Free-text suffix (quantity, operation code)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    /// Ids of the steps this step subsumes, in print order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained_steps: Vec<String>,
}

impl RecipeStep {
    pub fn new(id: impl Into<String>, step_type_id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            step_type_id: step_type_id.into(),
            ..Default::default()
        }
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn containing<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contained_steps = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_container(&self) -> bool {
        !self.contained_steps.is_empty()
    }

    /// An unresolvable `step_type_id` (empty included) is not an error here:
    /// the encoder drops such steps.
    pub fn validate(&self) -> AppResult<()> {
        validate_instruction(self.instruction.as_deref())
    }
}

/// Recipe document as exported by the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDocument {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<RecipeStep>,
}

/// Unsaved step from the recipe editor (containment by row index)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStepInput {
    pub step_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
    /// Row indices into the same step list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contained_steps: Vec<usize>,
}

/// Preview row for the recipe editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepPreview {
    pub step_type: StepType,
    pub generated_code: String,
    pub is_contained: bool,
}
