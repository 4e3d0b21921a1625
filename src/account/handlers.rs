use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Redirect},
    Json,
};
use tracing::instrument;

use crate::account::dto::{MeResponse, UploadResponse};
use crate::account::services::{self, IdeaUpload};
use crate::auth::extractors::AuthUser;
use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(MeResponse::from(&user)))
}

/// Multipart upload of the single idea document, field name `ideaPdf`.
/// The record to link is always the caller's own, taken from the claims.
#[instrument(skip(state, multipart))]
pub async fn upload_idea(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<IdeaUpload> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("ideaPdf") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".into());
        let body = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some(IdeaUpload { content_type, body });
        break;
    }

    let upload = upload.ok_or_else(|| {
        ApiError::Validation("No file uploaded or invalid file type".into())
    })?;

    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    if user.idea_pdf_key.is_some() {
        return Err(ApiError::Conflict("Idea already uploaded".into()));
    }

    let key = services::store_idea_pdf(&state, user.id, upload).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".into(),
        idea_pdf_key: key,
    }))
}

/// 302 to a short-lived presigned URL for the caller's stored document.
#[instrument(skip(state))]
pub async fn get_idea_pdf(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    let key = user
        .idea_pdf_key
        .ok_or_else(|| ApiError::NotFound("No idea uploaded".into()))?;

    let url = state.storage.download_url(&key, 600).await?;
    Ok(Redirect::temporary(&url))
}
