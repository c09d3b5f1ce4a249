use super::error::SchemeError;
use super::types::{NewScheme, SchemeChanges};

/// Longest scheme name accepted from clients.
pub const MAX_SCHEME_NAME_LEN: usize = 255;

fn validate_scheme_name(name: &str) -> Result<(), SchemeError> {
    if name.trim().is_empty() {
        return Err(SchemeError::EmptyName);
    }
    if name.chars().count() > MAX_SCHEME_NAME_LEN {
        return Err(SchemeError::NameTooLong {
            max: MAX_SCHEME_NAME_LEN,
        });
    }
    Ok(())
}

/// Validates a scheme before insertion.
pub fn validate_new_scheme(scheme: &NewScheme) -> Result<(), SchemeError> {
    validate_scheme_name(&scheme.scheme_name)
}

/// Validates the fields present in a partial update.
pub fn validate_changes(changes: &SchemeChanges) -> Result<(), SchemeError> {
    match &changes.scheme_name {
        Some(name) => validate_scheme_name(name),
        None => Ok(()),
    }
}
