use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::admin::report;
use crate::auth::extractors::AdminUser;
use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::state::AppState;

/// Every record's public projection, newest first.
#[instrument(skip(state, _admin))]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users))
}

/// Deleting an id that does not exist is reported as not-found, nothing more.
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = User::delete(&state.db, id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("User not found".into()));
    }
    info!(admin = %claims.sub, deleted = %id, "registrant deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Registrant report ordered by name, served as a downloadable document.
/// Read-and-format only; the store is not mutated.
#[instrument(skip(state, _admin))]
pub async fn export_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Response, ApiError> {
    let users = User::list_by_name(&state.db).await?;
    let body = report::render(&users);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=users_export.txt",
        )
        .body(Body::from(body))
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("response build failed: {e}")))?;

    Ok(response)
}
