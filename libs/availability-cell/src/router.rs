use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_utils::extractor::session_middleware;
use shared_utils::AppState;

use crate::handlers;

/// Availability pages, mounted under `/schedule`.
pub fn availability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::show_schedule))
        .route("/{doctor_id}/slots", post(handlers::add_slot))
        .route("/{doctor_id}/slots/{availability_id}/delete", post(handlers::delete_slot))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}
