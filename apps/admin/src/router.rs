use std::sync::Arc;

use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use auth_cell::router::auth_routes;
use availability_cell::router::availability_routes;
use doctor_cell::router::doctor_routes;
use shared_utils::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/doctors") }))
        .route("/health", get(|| async { "Clinibooth admin is running!" }))
        .merge(auth_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/schedule", availability_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use shared_utils::test_utils::TestConfig;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = create_router(TestConfig::default().to_state());

        let response = app.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_redirects_to_directory() {
        let app = create_router(TestConfig::default().to_state());

        let response = app.oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/doctors");
    }

    #[tokio::test]
    async fn test_cell_pages_require_login() {
        let state = TestConfig::default().to_state();

        for uri in ["/doctors", "/doctors/new", "/schedule"] {
            let response = create_router(state.clone()).oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
            assert_eq!(response.headers()["location"], "/login");
        }

        let response = create_router(state).oneshot(get_request("/login")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
