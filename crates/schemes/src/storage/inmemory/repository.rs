//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use schemes_core::scheme::{
    project_steps, NewScheme, NewStep, Scheme, SchemeChanges, SchemeId, SchemeStep, Step, StepId,
};
use schemes_core::storage::{RepositoryError, Result, SchemeRepository, StepRepository};

/// Rows of both tables plus their ID sequences.
///
/// Both tables share one lock: readers never see a removed scheme's steps.
#[derive(Debug, Default)]
struct Tables {
    schemes: BTreeMap<SchemeId, Scheme>,
    steps: BTreeMap<StepId, Step>,
    last_scheme_id: SchemeId,
    last_step_id: StepId,
}

impl Tables {
    fn name_taken(&self, scheme_name: &str, except: Option<SchemeId>) -> bool {
        self.schemes
            .values()
            .any(|s| s.scheme_name == scheme_name && Some(s.id) != except)
    }
}

/// In-memory storage backend.
///
/// Behaves like the SQLite backend: generated IDs start at 1, scheme names
/// are unique, and removing a scheme removes its steps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SchemeRepository for InMemoryRepository {
    async fn find(&self) -> Result<Vec<Scheme>> {
        let tables = self.tables.read().await;
        Ok(tables.schemes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SchemeId) -> Result<Option<Scheme>> {
        let tables = self.tables.read().await;
        Ok(tables.schemes.get(&id).cloned())
    }

    async fn find_steps(&self, id: SchemeId) -> Result<Vec<SchemeStep>> {
        let tables = self.tables.read().await;
        let Some(scheme) = tables.schemes.get(&id) else {
            return Ok(Vec::new());
        };

        Ok(project_steps(scheme, tables.steps.values().cloned()))
    }

    async fn add(&self, scheme: &NewScheme) -> Result<Scheme> {
        let mut tables = self.tables.write().await;
        if tables.name_taken(&scheme.scheme_name, None) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Scheme",
                id: scheme.scheme_name.clone(),
            });
        }

        tables.last_scheme_id += 1;
        let scheme = scheme.clone().into_scheme(tables.last_scheme_id);
        tables.schemes.insert(scheme.id, scheme.clone());
        Ok(scheme)
    }

    async fn update(&self, changes: &SchemeChanges, id: SchemeId) -> Result<Option<Scheme>> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.schemes.get(&id) else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(current.clone()));
        }

        if let Some(scheme_name) = &changes.scheme_name {
            if tables.name_taken(scheme_name, Some(id)) {
                return Err(RepositoryError::AlreadyExists {
                    entity_type: "Scheme",
                    id: id.to_string(),
                });
            }
        }

        let Some(scheme) = tables.schemes.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(scheme);
        Ok(Some(scheme.clone()))
    }

    async fn remove(&self, id: SchemeId) -> Result<Option<Scheme>> {
        let mut tables = self.tables.write().await;
        let removed = tables.schemes.remove(&id);
        if removed.is_some() {
            tables.steps.retain(|_, step| step.scheme_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl StepRepository for InMemoryRepository {
    async fn add_step(&self, scheme_id: SchemeId, step: &NewStep) -> Result<Step> {
        let mut tables = self.tables.write().await;
        if !tables.schemes.contains_key(&scheme_id) {
            return Err(RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for Step {scheme_id}"
            )));
        }

        tables.last_step_id += 1;
        let step = step.clone().into_step(tables.last_step_id, scheme_id);
        tables.steps.insert(step.id, step.clone());
        Ok(step)
    }
}
