pub mod health;
pub mod portfolio;
pub mod resume;
pub mod theme;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Public portfolio
        .route("/profile/:username", get(portfolio::handle_get_profile))
        .route("/theme/toggle", post(theme::handle_toggle_theme))
        // Resume dashboard
        .route("/dashboard/resume", get(resume::handle_resume_page))
        .route(
            "/dashboard/resume/upload",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(resume::UPLOAD_BODY_LIMIT)),
        )
        .route("/dashboard/resume/summary", post(resume::handle_save_summary))
        .fallback(not_found)
        .with_state(state)
}
