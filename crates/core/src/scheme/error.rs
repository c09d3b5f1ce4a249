use thiserror::Error;

/// Errors that can occur when validating scheme input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("Scheme name cannot be empty")]
    EmptyName,
    #[error("Scheme name too long (max {max} characters)")]
    NameTooLong { max: usize },
}
