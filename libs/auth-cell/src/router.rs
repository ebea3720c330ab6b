use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_utils::AppState;

use crate::handlers;

pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/logout", post(handlers::logout))
        .with_state(state)
}
