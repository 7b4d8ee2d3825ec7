pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job catalog
        .route("/jobs", get(jobs::handle_list_jobs))
        .route("/jobs/search", post(jobs::handle_search_jobs))
        .route("/jobs/filter", post(jobs::handle_filter_jobs))
        // Applications
        .route("/apply", post(applications::handle_apply))
        .route("/my-applications", post(applications::handle_my_applications))
        .fallback(route_not_found)
        .with_state(state)
}
