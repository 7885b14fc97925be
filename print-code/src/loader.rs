//! JSON file loaders for catalogs and recipes exported by the dashboard

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::models::{PreviewStepInput, RecipeDocument, RecipeStep, StepType};
use tracing::{info, instrument};

use crate::error::{PrintCodeError, PrintCodeResult};
use crate::lookup::StepTypeCatalog;

/// A recipe file is either a bare step array or a named document
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeFile {
    Steps(Vec<RecipeStep>),
    Document(RecipeDocument),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> PrintCodeResult<T> {
    let content = fs::read_to_string(path).map_err(|source| PrintCodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PrintCodeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a step type catalog (JSON array of step types)
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_step_types(path: impl AsRef<Path>) -> PrintCodeResult<StepTypeCatalog> {
    let types: Vec<StepType> = read_json(path.as_ref())?;
    let catalog = StepTypeCatalog::from_types(types)?;
    info!(count = catalog.len(), "Step type catalog loaded");
    Ok(catalog)
}

/// Load a recipe (step array or `{ "name": ..., "steps": [...] }`)
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_recipe(path: impl AsRef<Path>) -> PrintCodeResult<RecipeDocument> {
    let document = match read_json(path.as_ref())? {
        RecipeFile::Steps(steps) => RecipeDocument { name: None, steps },
        RecipeFile::Document(document) => document,
    };
    for step in &document.steps {
        step.validate()?;
    }
    info!(steps = document.steps.len(), "Recipe loaded");
    Ok(document)
}

/// Load unsaved editor rows (JSON array, containment by row index)
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_preview_steps(path: impl AsRef<Path>) -> PrintCodeResult<Vec<PreviewStepInput>> {
    read_json(path.as_ref())
}
