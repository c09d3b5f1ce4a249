//! Scheme CRUD handlers.
//!
//! Thin adapters from HTTP to [`SchemeRepository`]: a `None` from the
//! repository becomes a 404 here.
//!
//! [`SchemeRepository`]: schemes_core::storage::SchemeRepository

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use schemes_core::scheme::{
    validate_changes, validate_new_scheme, NewScheme, Scheme, SchemeChanges, SchemeId, SchemeStep,
};

use crate::{handlers::AppError, state::AppState};

/// List all schemes (GET /api/schemes).
pub async fn list_schemes(State(state): State<AppState>) -> Result<Json<Vec<Scheme>>, AppError> {
    let schemes = state.scheme_repo.find().await?;
    Ok(Json(schemes))
}

/// Get a single scheme by ID (GET /api/schemes/{id}).
pub async fn get_scheme(
    State(state): State<AppState>,
    Path(id): Path<SchemeId>,
) -> Result<Json<Scheme>, AppError> {
    state
        .scheme_repo
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::scheme_not_found(id))
}

/// List the ordered steps of a scheme (GET /api/schemes/{id}/steps).
///
/// A scheme without steps yields an empty list; an unknown scheme is a 404.
pub async fn get_scheme_steps(
    State(state): State<AppState>,
    Path(id): Path<SchemeId>,
) -> Result<Json<Vec<SchemeStep>>, AppError> {
    let steps = state.scheme_repo.find_steps(id).await?;

    if steps.is_empty() && state.scheme_repo.find_by_id(id).await?.is_none() {
        return Err(AppError::scheme_not_found(id));
    }

    Ok(Json(steps))
}

/// Create a new scheme (POST /api/schemes).
pub async fn create_scheme(
    State(state): State<AppState>,
    Json(payload): Json<NewScheme>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(payload = ?payload, "Received create scheme request");

    validate_new_scheme(&payload)?;

    let scheme = state.scheme_repo.add(&payload).await?;

    tracing::info!(scheme_id = scheme.id, name = %scheme.scheme_name, "Created new scheme");

    Ok((StatusCode::CREATED, Json(scheme)))
}

/// Update a scheme by ID (PUT /api/schemes/{id}).
pub async fn update_scheme(
    State(state): State<AppState>,
    Path(id): Path<SchemeId>,
    Json(changes): Json<SchemeChanges>,
) -> Result<Json<Scheme>, AppError> {
    validate_changes(&changes)?;

    let scheme = state
        .scheme_repo
        .update(&changes, id)
        .await?
        .ok_or_else(|| AppError::scheme_not_found(id))?;

    tracing::info!(scheme_id = id, "Updated scheme");

    Ok(Json(scheme))
}

/// Delete a scheme by ID (DELETE /api/schemes/{id}).
///
/// Responds with the removed scheme. Its steps are removed by the store.
pub async fn delete_scheme(
    State(state): State<AppState>,
    Path(id): Path<SchemeId>,
) -> Result<Json<Scheme>, AppError> {
    let removed = state
        .scheme_repo
        .remove(id)
        .await?
        .ok_or_else(|| AppError::scheme_not_found(id))?;

    tracing::info!(scheme_id = id, "Deleted scheme and its steps");

    Ok(Json(removed))
}
