//! Status codes for repository failures.
//!
//! Kept as plain `u16` so this crate stays free of any HTTP framework.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to the HTTP status the API answers with.
///
/// A duplicate scheme name is a conflict, a step pointing at a missing
/// scheme is a bad request, and a store that cannot be reached is
/// unavailable rather than broken.
///
/// ```
/// use schemes_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let duplicate = RepositoryError::AlreadyExists {
///     entity_type: "Scheme",
///     id: "World Domination".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&duplicate), 409);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::ConnectionFailed(_) => 503,
    }
}
