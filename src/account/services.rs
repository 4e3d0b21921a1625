use bytes::Bytes;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::repo_types::User;
use crate::error::ApiError;
use crate::state::AppState;

pub const MAX_IDEA_PDF_BYTES: usize = 5 * 1024 * 1024;
pub const IDEA_PDF_CONTENT_TYPE: &str = "application/pdf";

pub struct IdeaUpload {
    pub content_type: String,
    pub body: Bytes,
}

/// Validation never touches storage or the database.
pub fn validate_upload(upload: &IdeaUpload) -> Result<(), ApiError> {
    if upload.body.is_empty() {
        return Err(ApiError::Validation(
            "No file uploaded or invalid file type".into(),
        ));
    }
    if upload.content_type != IDEA_PDF_CONTENT_TYPE {
        return Err(ApiError::Validation("Only .pdf format allowed!".into()));
    }
    if upload.body.len() > MAX_IDEA_PDF_BYTES {
        return Err(ApiError::Validation("File exceeds the 5 MB limit".into()));
    }
    Ok(())
}

/// Persist-then-link upload step.
///
/// The database reference is written only after the bytes are durably stored;
/// if the link fails, the stored object is deleted again so the reference and
/// the bytes never disagree. A crash between the two steps can still orphan
/// an object, which is the accepted trade-off of not having a cross-system
/// transaction.
pub async fn store_idea_pdf(
    state: &AppState,
    user_id: Uuid,
    upload: IdeaUpload,
) -> Result<String, ApiError> {
    validate_upload(&upload)?;

    let key = format!("ideas/{}/{}.pdf", user_id, Uuid::new_v4());
    state
        .storage
        .store(&key, upload.body, IDEA_PDF_CONTENT_TYPE)
        .await?;

    if let Err(link_err) = User::set_idea_pdf_key(&state.db, user_id, &key).await {
        if let Err(cleanup_err) = state.storage.remove(&key).await {
            error!(error = ?cleanup_err, key, "compensating delete failed, object orphaned");
        }
        return Err(ApiError::Internal(link_err));
    }

    info!(user_id = %user_id, key, "idea pdf stored and linked");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::storage::ArtifactStore;
    use axum::async_trait;
    use std::sync::{Arc, Mutex};

    fn pdf_upload(len: usize) -> IdeaUpload {
        IdeaUpload {
            content_type: IDEA_PDF_CONTENT_TYPE.into(),
            body: Bytes::from(vec![0u8; len]),
        }
    }

    #[test]
    fn validate_accepts_a_small_pdf() {
        assert!(validate_upload(&pdf_upload(1024)).is_ok());
    }

    #[test]
    fn validate_rejects_empty_payload() {
        let err = validate_upload(&pdf_upload(0)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn validate_rejects_non_pdf() {
        let upload = IdeaUpload {
            content_type: "image/png".into(),
            body: Bytes::from_static(b"\x89PNG"),
        };
        let err = validate_upload(&upload).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn validate_rejects_oversized_pdf() {
        let err = validate_upload(&pdf_upload(MAX_IDEA_PDF_BYTES + 1)).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn validate_accepts_exactly_the_ceiling() {
        assert!(validate_upload(&pdf_upload(MAX_IDEA_PDF_BYTES)).is_ok());
    }

    #[derive(Default)]
    struct RecordingStorage {
        puts: Mutex<Vec<String>>,
        deletes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ArtifactStore for RecordingStorage {
        async fn store(&self, key: &str, _body: Bytes, _ct: &str) -> anyhow::Result<()> {
            self.puts.lock().unwrap().push(key.to_string());
            Ok(())
        }
        async fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.deletes.lock().unwrap().push(key.to_string());
            Ok(())
        }
        async fn download_url(&self, key: &str, _expires_secs: u64) -> anyhow::Result<String> {
            Ok(format!("https://fake.local/{}", key))
        }
    }

    fn recording_state() -> (AppState, Arc<RecordingStorage>) {
        let storage = Arc::new(RecordingStorage::default());
        let fake = AppState::fake();
        let state = AppState::from_parts(
            fake.db.clone(),
            fake.config.clone(),
            storage.clone() as Arc<dyn ArtifactStore>,
        );
        (state, storage)
    }

    #[tokio::test]
    async fn link_failure_removes_the_stored_object() {
        // The fake pool points at a closed port, so the link step fails
        // after the bytes were "stored".
        let (state, storage) = recording_state();
        let result = store_idea_pdf(&state, uuid::Uuid::new_v4(), pdf_upload(1024)).await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
        let puts = storage.puts.lock().unwrap().clone();
        let deletes = storage.deletes.lock().unwrap().clone();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts, deletes);
    }

    #[tokio::test]
    async fn validation_failure_never_touches_storage() {
        let (state, storage) = recording_state();
        let result = store_idea_pdf(
            &state,
            uuid::Uuid::new_v4(),
            IdeaUpload {
                content_type: "text/plain".into(),
                body: Bytes::from_static(b"hello"),
            },
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(storage.puts.lock().unwrap().is_empty());
        assert!(storage.deletes.lock().unwrap().is_empty());
    }
}
