use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/me", get(handlers::get_me))
        .route("/user/idea-pdf", get(handlers::get_idea_pdf))
        .route(
            "/user/upload-idea",
            post(handlers::upload_idea).layer(DefaultBodyLimit::max(8 * 1024 * 1024)),
        )
}
