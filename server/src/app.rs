use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Resume limit plus room for the text fields.
const MAX_BODY_BYTES: usize = handlers::MAX_RESUME_BYTES + 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/jobs/", get(handlers::listing_page))
        .route("/jobs/api/search", get(handlers::search_jobs))
        .route("/jobs/{id}", get(handlers::detail_page))
        .route("/jobs/{id}/save", post(handlers::save_job))
        .route("/jobs/{id}/unsave", post(handlers::unsave_job))
        .route("/jobs/{id}/apply", post(handlers::apply_job))
        .route("/auth/login", get(handlers::login_page))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
