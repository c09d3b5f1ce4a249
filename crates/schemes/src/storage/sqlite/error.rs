//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from `schemes_core::storage`.
//! Constraint violations are mapped to semantic variants (e.g., UNIQUE constraint to AlreadyExists).

use schemes_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `SQLITE_CONSTRAINT_PRIMARYKEY` → `RepositoryError::AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `RepositoryError::InvalidData`
/// - Cannot open → `RepositoryError::ConnectionFailed`
/// - No rows → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str, id: &str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepositoryError::AlreadyExists {
                entity_type,
                id: id.to_string(),
            }
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type} {id}"
            ))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// `id` identifies the row the call was about (a scheme ID, or the scheme
/// name for inserts); it only ends up in error messages.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn constraint_error(extended_code: std::os::raw::c_int) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_unique_constraint_maps_to_already_exists() {
        let err = constraint_error(ffi::SQLITE_CONSTRAINT_UNIQUE);

        let result = map_tokio_rusqlite_error(err, "Scheme", "Get Rich Quick");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Scheme",
                id: "Get Rich Quick".to_string(),
            }
        );
    }

    #[test]
    fn test_foreign_key_maps_to_invalid_data() {
        let err = constraint_error(ffi::SQLITE_CONSTRAINT_FOREIGNKEY);

        let result = map_tokio_rusqlite_error(err, "Step", "99");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_no_rows_maps_to_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "Scheme", "5");

        match result {
            RepositoryError::NotFound { entity_type, id } => {
                assert_eq!(entity_type, "Scheme");
                assert_eq!(id, "5");
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result =
            map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Scheme", "1");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Scheme", "1");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
