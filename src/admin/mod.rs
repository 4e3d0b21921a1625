use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

pub mod handlers;
pub mod report;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(handlers::list_users))
        .route("/admin/users/export", get(handlers::export_users))
        .route("/admin/users/:id", delete(handlers::delete_user))
}
