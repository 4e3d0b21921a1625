use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::repo_types::{Role, User};

/// Registration payload from the multi-step form. Everything past the
/// account fields is opaque profile data, stored as submitted.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub employee_id: String,

    // Employee details
    pub full_name: String,
    pub designation: Option<String>,
    pub primary_technology: Option<String>,
    pub experience_years: Option<f64>,
    pub skill_level: Option<String>,

    // Customer details
    pub customer_name: Option<String>,
    pub customer_country: Option<String>,
    pub customer_pic_name: Option<String>,
    pub customer_pic_department: Option<String>,
    pub current_work_description: Option<String>,

    // AI engagement
    pub ai_opportunity: Option<String>,
    pub customer_ai_adoption: Option<String>,
    pub product_business_line: Option<String>,
    pub worked_on_ai: Option<String>,

    // AI skills
    pub ai_skill_level: Option<String>,
    pub ai_upskill_interest: Option<String>,
    pub ai_certification: Option<String>,
    pub ai_forge_core_business_view: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Slice of the record returned by the auth endpoints.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}
