//! SQLite repository implementation.
//!
//! Implements the repository traits from `schemes_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use schemes_core::scheme::{NewScheme, NewStep, Scheme, SchemeChanges, SchemeId, SchemeStep, Step};
use schemes_core::storage::{RepositoryError, Result, SchemeRepository, StepRepository};

use super::conversions::{row_to_scheme, row_to_scheme_step, row_to_step};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Owns a single `tokio_rusqlite::Connection`; calls are serialized on its
/// background thread.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        tracing::debug!(path = %path.display(), "Opened SQLite database");

        Self::from_connection(conn).await
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::from_connection(conn).await
    }

    /// Wraps an already configured connection.
    ///
    /// Enables foreign keys on it and creates missing tables.
    pub async fn from_connection(conn: Connection) -> Result<Self> {
        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Schema", "*"))
    }

    /// Counts stored steps of a scheme, bypassing the join with `schemes`.
    #[cfg(test)]
    async fn count_steps(&self, scheme_id: SchemeId) -> i64 {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::COUNT_STEPS_FOR_SCHEME, [scheme_id], |row| {
                    row.get::<_, i64>(0)
                })
                .map_err(wrap_err)
            })
            .await
            .unwrap()
    }
}

// ============================================================================
// SchemeRepository implementation
// ============================================================================

#[async_trait]
impl SchemeRepository for SqliteRepository {
    async fn find(&self) -> Result<Vec<Scheme>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_SCHEMES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_scheme).map_err(wrap_err)?;

                let mut schemes = Vec::new();
                for row_result in rows {
                    schemes.push(row_result.map_err(wrap_err)?);
                }
                Ok(schemes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", "*"))
    }

    async fn find_by_id(&self, id: SchemeId) -> Result<Option<Scheme>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SCHEME_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_scheme) {
                    Ok(scheme) => Ok(Some(scheme)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", id.to_string()))
    }

    async fn find_steps(&self, id: SchemeId) -> Result<Vec<SchemeStep>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_STEPS_FOR_SCHEME)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([id], row_to_scheme_step).map_err(wrap_err)?;

                let mut steps = Vec::new();
                for row_result in rows {
                    steps.push(row_result.map_err(wrap_err)?);
                }
                Ok(steps)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", id.to_string()))
    }

    async fn add(&self, scheme: &NewScheme) -> Result<Scheme> {
        let scheme_name = scheme.scheme_name.clone();
        let error_id = scheme.scheme_name.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::INSERT_SCHEME).map_err(wrap_err)?;
                stmt.query_row([scheme_name], row_to_scheme)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", error_id))
    }

    async fn update(&self, changes: &SchemeChanges, id: SchemeId) -> Result<Option<Scheme>> {
        let scheme_name = changes.scheme_name.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::UPDATE_SCHEME).map_err(wrap_err)?;
                match stmt.query_row(rusqlite::params![id, scheme_name], row_to_scheme) {
                    Ok(scheme) => Ok(Some(scheme)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", id.to_string()))
    }

    async fn remove(&self, id: SchemeId) -> Result<Option<Scheme>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::DELETE_SCHEME).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_scheme) {
                    Ok(scheme) => Ok(Some(scheme)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Scheme", id.to_string()))
    }
}

// ============================================================================
// StepRepository implementation
// ============================================================================

#[async_trait]
impl StepRepository for SqliteRepository {
    async fn add_step(&self, scheme_id: SchemeId, step: &NewStep) -> Result<Step> {
        let step_number = step.step_number;
        let instructions = step.instructions.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::INSERT_STEP).map_err(wrap_err)?;
                stmt.query_row(
                    rusqlite::params![scheme_id, step_number, instructions],
                    row_to_step,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Step", scheme_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    // ==================== Scheme CRUD Tests ====================

    #[tokio::test]
    async fn test_add_returns_generated_id() {
        let repo = repo().await;

        let scheme = repo
            .add(&NewScheme::new("Find the Holy Grail"))
            .await
            .unwrap();

        assert_eq!(scheme, Scheme::new(1, "Find the Holy Grail"));
        assert!(repo.find_steps(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_find_by_id() {
        let repo = repo().await;

        let added = repo.add(&NewScheme::new("Get Rich Quick")).await.unwrap();
        let found = repo.find_by_id(added.id).await.unwrap();

        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn test_add_duplicate_name_is_already_exists() {
        let repo = repo().await;
        repo.add(&NewScheme::new("Revenge!")).await.unwrap();

        let result = repo.add(&NewScheme::new("Revenge!")).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Scheme",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_find_by_id_nonexistent() {
        let repo = repo().await;
        assert_eq!(repo.find_by_id(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_returns_all_schemes() {
        let repo = repo().await;
        assert!(repo.find().await.unwrap().is_empty());

        repo.add(&NewScheme::new("World Domination")).await.unwrap();
        repo.add(&NewScheme::new("Get Rich Quick")).await.unwrap();

        let names: Vec<String> = repo
            .find()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.scheme_name)
            .collect();
        assert_eq!(names, vec!["World Domination", "Get Rich Quick"]);
    }

    #[tokio::test]
    async fn test_update_changes_name() {
        let repo = repo().await;
        let scheme = repo.add(&NewScheme::new("World Domination")).await.unwrap();

        let changes = SchemeChanges::default().with_scheme_name("Galaxy Domination");
        let updated = repo.update(&changes, scheme.id).await.unwrap();

        assert_eq!(updated, Some(Scheme::new(scheme.id, "Galaxy Domination")));
        assert_eq!(repo.find_by_id(scheme.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_with_no_changes_returns_current_record() {
        let repo = repo().await;
        let scheme = repo.add(&NewScheme::new("World Domination")).await.unwrap();

        let updated = repo
            .update(&SchemeChanges::default(), scheme.id)
            .await
            .unwrap();

        assert_eq!(updated, Some(scheme));
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = repo().await;
        let changes = SchemeChanges::default().with_scheme_name("Nothing");

        assert_eq!(repo.update(&changes, 99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_nonexistent_to_taken_name() {
        let repo = repo().await;
        repo.add(&NewScheme::new("Revenge!")).await.unwrap();

        let changes = SchemeChanges::default().with_scheme_name("Revenge!");
        assert_eq!(repo.update(&changes, 99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_to_taken_name_is_already_exists() {
        let repo = repo().await;
        repo.add(&NewScheme::new("Revenge!")).await.unwrap();
        let other = repo.add(&NewScheme::new("Get Rich Quick")).await.unwrap();

        let changes = SchemeChanges::default().with_scheme_name("Revenge!");
        let result = repo.update(&changes, other.id).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Scheme",
                ..
            })
        ));
        assert_eq!(
            repo.find_by_id(other.id).await.unwrap(),
            Some(Scheme::new(other.id, "Get Rich Quick"))
        );
    }

    #[tokio::test]
    async fn test_closed_connection_is_connection_failed() {
        let conn = Connection::open_in_memory().await.unwrap();
        let repo = SqliteRepository::from_connection(conn.clone()).await.unwrap();
        conn.close().await.unwrap();

        assert!(matches!(
            repo.find().await,
            Err(RepositoryError::ConnectionFailed(_))
        ));
        assert!(matches!(
            repo.find_by_id(1).await,
            Err(RepositoryError::ConnectionFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_returns_removed_scheme() {
        let repo = repo().await;
        let scheme = repo.add(&NewScheme::new("Revenge!")).await.unwrap();

        let removed = repo.remove(scheme.id).await.unwrap();

        assert_eq!(removed, Some(scheme.clone()));
        assert_eq!(repo.find_by_id(scheme.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_nonexistent() {
        let repo = repo().await;
        assert_eq!(repo.remove(12).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_cascades_to_steps() {
        let repo = repo().await;
        let scheme = repo.add(&NewScheme::new("Revenge!")).await.unwrap();
        repo.add_step(scheme.id, &NewStep::new(1, "learn to fence"))
            .await
            .unwrap();
        repo.add_step(scheme.id, &NewStep::new(2, "prepare to die"))
            .await
            .unwrap();
        assert_eq!(repo.count_steps(scheme.id).await, 2);

        repo.remove(scheme.id).await.unwrap();

        assert_eq!(repo.count_steps(scheme.id).await, 0);
    }

    // ==================== Step Tests ====================

    #[tokio::test]
    async fn test_find_steps_ordered_with_scheme_name() {
        let repo = repo().await;
        let grail = repo
            .add(&NewScheme::new("Find the Holy Grail"))
            .await
            .unwrap();
        let other = repo.add(&NewScheme::new("Get Rich Quick")).await.unwrap();

        repo.add_step(grail.id, &NewStep::new(3, "find a shrubbery"))
            .await
            .unwrap();
        repo.add_step(grail.id, &NewStep::new(1, "quest"))
            .await
            .unwrap();
        repo.add_step(other.id, &NewStep::new(1, "profit"))
            .await
            .unwrap();
        repo.add_step(grail.id, &NewStep::new(2, "...and quest"))
            .await
            .unwrap();

        let steps = repo.find_steps(grail.id).await.unwrap();

        let numbers: Vec<i64> = steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(steps.iter().all(|s| s.scheme_name == "Find the Holy Grail"));
        assert_eq!(steps[0].instructions, "quest");
    }

    #[tokio::test]
    async fn test_find_steps_nonexistent_scheme() {
        let repo = repo().await;
        assert!(repo.find_steps(77).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_step_returns_stored_step() {
        let repo = repo().await;
        let scheme = repo.add(&NewScheme::new("Get Rich Quick")).await.unwrap();

        let step = repo
            .add_step(scheme.id, &NewStep::new(1, "collect all the sheep in Scotland"))
            .await
            .unwrap();

        assert_eq!(step.scheme_id, scheme.id);
        assert_eq!(step.step_number, 1);
        assert_eq!(step.instructions, "collect all the sheep in Scotland");
    }

    #[tokio::test]
    async fn test_add_step_unknown_scheme_is_invalid_data() {
        let repo = repo().await;

        let result = repo.add_step(5, &NewStep::new(1, "orphan")).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_file_database_persists_across_connections() {
        let path = std::env::temp_dir().join(format!("schemes-test-{}.db", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let repo = SqliteRepository::new(&path).await.unwrap();
            repo.add(&NewScheme::new("World Domination")).await.unwrap();
        }

        let repo = SqliteRepository::new(&path).await.unwrap();
        let schemes = repo.find().await.unwrap();
        assert_eq!(schemes, vec![Scheme::new(1, "World Domination")]);

        drop(repo);
        let _ = std::fs::remove_file(&path);
    }
}
