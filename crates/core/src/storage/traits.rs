use async_trait::async_trait;

use crate::scheme::{NewScheme, NewStep, Scheme, SchemeChanges, SchemeId, SchemeStep, Step};

use super::Result;

/// Repository for scheme operations.
///
/// Every method is a single request to the store; writes return the row
/// they wrote in the same request.
#[async_trait]
pub trait SchemeRepository: Send + Sync {
    /// Gets every scheme, without steps.
    async fn find(&self) -> Result<Vec<Scheme>>;

    /// Gets a scheme by its ID.
    async fn find_by_id(&self, id: SchemeId) -> Result<Option<Scheme>>;

    /// Gets the steps of a scheme ordered by step number.
    ///
    /// Empty when the scheme has no steps or does not exist.
    async fn find_steps(&self, id: SchemeId) -> Result<Vec<SchemeStep>>;

    /// Inserts a scheme and returns it with its generated ID.
    async fn add(&self, scheme: &NewScheme) -> Result<Scheme>;

    /// Applies a partial update. Returns `None` if no scheme has `id`.
    async fn update(&self, changes: &SchemeChanges, id: SchemeId) -> Result<Option<Scheme>>;

    /// Deletes a scheme and its steps. Returns the removed scheme, or `None`
    /// if no scheme has `id`.
    async fn remove(&self, id: SchemeId) -> Result<Option<Scheme>>;
}

/// Repository for loading steps into existing schemes.
///
/// Only used for seeding; steps are otherwise read through
/// [`SchemeRepository::find_steps`].
#[async_trait]
pub trait StepRepository: Send + Sync {
    /// Inserts a step for `scheme_id` and returns it.
    async fn add_step(&self, scheme_id: SchemeId, step: &NewStep) -> Result<Step>;
}
