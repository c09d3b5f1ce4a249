use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemes_core::scheme::{SchemeError, SchemeId};
use schemes_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error wrapping `anyhow::Error`.
///
/// Repository and validation errors keep their meaning on the wire; anything
/// else is a 500.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// A 404 for the scheme with `id`.
    pub fn scheme_not_found(id: SchemeId) -> Self {
        Self(
            RepositoryError::NotFound {
                entity_type: "Scheme",
                id: id.to_string(),
            }
            .into(),
        )
    }

    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<SchemeError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.0.to_string();

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status_code, message = %message, "API error");
        }

        (status_code, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
