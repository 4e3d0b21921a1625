//! Out-of-band USER to ADMIN promotion. There is deliberately no request
//! path that changes a role; an operator runs this against the database.
//!
//! Usage: promote-admin <email>

use anyhow::Context;

use forge_portal::auth::repo_types::User;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let email = std::env::args()
        .nth(1)
        .context("usage: promote-admin <email>")?;
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let db = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("connect to database")?;

    match User::promote_to_admin(&db, &email).await? {
        Some(user) => {
            tracing::info!(user_id = %user.id, email = %user.email, "promoted to ADMIN");
        }
        None => {
            tracing::warn!(email = %email, "no user with that email");
            std::process::exit(1);
        }
    }

    Ok(())
}
