use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::dto::RegisterRequest;
use crate::auth::repo_types::{Role, User};

/// True when the error is a Postgres unique-constraint violation (23505),
/// i.e. the email or employee id is already taken.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| match e {
            sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
            _ => None,
        })
        .map_or(false, |code| code == "23505")
}

impl User {
    /// Insert a new registrant. Uniqueness of email and employee id is
    /// enforced by the database constraints alone; a duplicate surfaces as a
    /// 23505 error with nothing written.
    pub async fn create(
        db: &PgPool,
        req: &RegisterRequest,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                employee_id, full_name, designation, primary_technology,
                experience_years, skill_level,
                customer_name, customer_country, customer_pic_name,
                customer_pic_department, current_work_description,
                ai_opportunity, customer_ai_adoption, product_business_line,
                worked_on_ai,
                ai_skill_level, ai_upskill_interest, ai_certification,
                ai_forge_core_business_view,
                email, password_hash
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                $12, $13, $14, $15, $16, $17, $18, $19, $20, $21
            )
            RETURNING *
            "#,
        )
        .bind(&req.employee_id)
        .bind(&req.full_name)
        .bind(&req.designation)
        .bind(&req.primary_technology)
        .bind(req.experience_years)
        .bind(&req.skill_level)
        .bind(&req.customer_name)
        .bind(&req.customer_country)
        .bind(&req.customer_pic_name)
        .bind(&req.customer_pic_department)
        .bind(&req.current_work_description)
        .bind(&req.ai_opportunity)
        .bind(&req.customer_ai_adoption)
        .bind(&req.product_business_line)
        .bind(&req.worked_on_ai)
        .bind(&req.ai_skill_level)
        .bind(&req.ai_upskill_interest)
        .bind(&req.ai_certification)
        .bind(&req.ai_forge_core_business_view)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    /// Link the uploaded document to the registrant. Called only after the
    /// bytes are durably stored.
    pub async fn set_idea_pdf_key(db: &PgPool, id: Uuid, key: &str) -> anyhow::Result<()> {
        let result = sqlx::query("UPDATE users SET idea_pdf_key = $1 WHERE id = $2")
            .bind(key)
            .bind(id)
            .execute(db)
            .await?;
        anyhow::ensure!(
            result.rows_affected() == 1,
            "no registrant row matched id {id}"
        );
        Ok(())
    }

    /// Newest registrations first.
    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(db)
            .await?;
        Ok(users)
    }

    /// Report order.
    pub async fn list_by_name(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY full_name ASC")
            .fetch_all(db)
            .await?;
        Ok(users)
    }

    /// Returns the number of rows removed (0 when the id does not exist).
    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    /// The only USER to ADMIN transition in the system. Reachable from the
    /// `promote-admin` binary, never from a request handler.
    pub async fn promote_to_admin(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("UPDATE users SET role = $1 WHERE email = $2 RETURNING *")
                .bind(Role::Admin)
                .bind(email)
                .fetch_optional(db)
                .await?;
        Ok(user)
    }
}
