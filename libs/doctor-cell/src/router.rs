use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_utils::extractor::session_middleware;
use shared_utils::AppState;

use crate::handlers;

/// Directory pages, mounted under `/doctors`.
pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/new", get(handlers::new_doctor_form))
        .route("/{doctor_id}", post(handlers::update_doctor))
        .route("/{doctor_id}/edit", get(handlers::edit_doctor_form))
        .route("/{doctor_id}/delete", post(handlers::delete_doctor))
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
}
