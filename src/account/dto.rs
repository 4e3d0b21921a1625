use serde::Serialize;
use uuid::Uuid;

use crate::auth::repo_types::{Role, User};

/// The caller's own public projection, artifact reference included.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub idea_pdf_key: Option<String>,
}

impl From<&User> for MeResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            employee_id: user.employee_id.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
            idea_pdf_key: user.idea_pdf_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub idea_pdf_key: String,
}
