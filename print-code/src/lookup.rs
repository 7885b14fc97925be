//! Step type lookup
//!
//! The encoder only needs `id -> StepType` resolution. Plain maps work, and
//! [`StepTypeCatalog`] adds validated, insertion-ordered storage for callers
//! that load the catalog themselves.

use std::collections::{BTreeMap, HashMap};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{StepType, StepTypeCreate, StepTypeUpdate};

/// Resolve a step type by id
pub trait StepTypeLookup {
    fn step_type(&self, id: &str) -> Option<&StepType>;
}

impl StepTypeLookup for HashMap<String, StepType> {
    fn step_type(&self, id: &str) -> Option<&StepType> {
        self.get(id)
    }
}

impl StepTypeLookup for BTreeMap<String, StepType> {
    fn step_type(&self, id: &str) -> Option<&StepType> {
        self.get(id)
    }
}

impl<T: StepTypeLookup + ?Sized> StepTypeLookup for &T {
    fn step_type(&self, id: &str) -> Option<&StepType> {
        (**self).step_type(id)
    }
}

/// In-memory step type catalog
#[derive(Debug, Clone, Default)]
pub struct StepTypeCatalog {
    types: Vec<StepType>,
    index: HashMap<String, usize>,
}

impl StepTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, validating every entry and rejecting duplicate ids
    pub fn from_types(types: impl IntoIterator<Item = StepType>) -> AppResult<Self> {
        let mut catalog = Self::new();
        for step_type in types {
            catalog.insert(step_type)?;
        }
        Ok(catalog)
    }

    /// 添加步骤类型
    pub fn insert(&mut self, step_type: StepType) -> AppResult<()> {
        step_type.validate()?;
        if self.index.contains_key(&step_type.id) {
            return Err(AppError::with_message(
                ErrorCode::StepTypeDuplicate,
                format!("Step type {} already exists", step_type.id),
            )
            .with_detail("id", step_type.id));
        }
        self.index.insert(step_type.id.clone(), self.types.len());
        self.types.push(step_type);
        Ok(())
    }

    /// Create a step type from a dashboard payload
    pub fn create(&mut self, id: impl Into<String>, payload: StepTypeCreate) -> AppResult<&StepType> {
        payload.validate()?;
        let step_type = payload.into_step_type(id);
        let id = step_type.id.clone();
        self.insert(step_type)?;
        self.get_required(&id)
    }

    /// 更新步骤类型
    pub fn update(&mut self, id: &str, payload: StepTypeUpdate) -> AppResult<&StepType> {
        payload.validate()?;
        let Some(&pos) = self.index.get(id) else {
            return Err(not_found(id));
        };
        payload.apply_to(&mut self.types[pos]);
        Ok(&self.types[pos])
    }

    /// 删除步骤类型
    pub fn remove(&mut self, id: &str) -> Option<StepType> {
        let pos = self.index.remove(id)?;
        let removed = self.types.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&StepType> {
        self.index.get(id).map(|&pos| &self.types[pos])
    }

    /// Like [`get`](Self::get) but reports a missing id as an error
    pub fn get_required(&self, id: &str) -> AppResult<&StepType> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StepType> {
        self.types.iter()
    }
}

impl StepTypeLookup for StepTypeCatalog {
    fn step_type(&self, id: &str) -> Option<&StepType> {
        self.get(id)
    }
}

fn not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::StepTypeNotFound,
        format!("Step type {id} not found"),
    )
    .with_detail("id", id)
}
