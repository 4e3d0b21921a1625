use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Registrant role. `ADMIN` is only ever set through the promotion CLI,
/// never through a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// Registrant record in the database.
///
/// Serializing a `User` yields the public projection: the password hash is
/// skipped, so this type is safe to return from any handler.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub employee_id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,

    pub full_name: String,
    pub designation: Option<String>,
    pub primary_technology: Option<String>,
    pub experience_years: Option<f64>,
    pub skill_level: Option<String>,

    pub customer_name: Option<String>,
    pub customer_country: Option<String>,
    pub customer_pic_name: Option<String>,
    pub customer_pic_department: Option<String>,
    pub current_work_description: Option<String>,

    pub ai_opportunity: Option<String>,
    pub customer_ai_adoption: Option<String>,
    pub product_business_line: Option<String>,
    pub worked_on_ai: Option<String>,

    pub ai_skill_level: Option<String>,
    pub ai_upskill_interest: Option<String>,
    pub ai_certification: Option<String>,
    pub ai_forge_core_business_view: Option<String>,

    pub idea_pdf_key: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
pub(crate) fn test_user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        employee_id: "EMP001".into(),
        email: "alice@example.com".into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".into(),
        role,
        full_name: "Alice Example".into(),
        designation: Some("Engineer".into()),
        primary_technology: Some("Rust".into()),
        experience_years: Some(5.0),
        skill_level: Some("Senior".into()),
        customer_name: None,
        customer_country: None,
        customer_pic_name: None,
        customer_pic_department: None,
        current_work_description: None,
        ai_opportunity: None,
        customer_ai_adoption: None,
        product_business_line: None,
        worked_on_ai: Some("Yes".into()),
        ai_skill_level: None,
        ai_upskill_interest: None,
        ai_certification: None,
        ai_forge_core_business_view: None,
        idea_pdf_key: None,
        created_at: OffsetDateTime::UNIX_EPOCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = test_user(Role::User);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice@example.com"));
        assert!(json.contains("EMP001"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    }
}
