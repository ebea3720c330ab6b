use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";

/// Raw session id from the cookie jar, if the session is still registered.
pub async fn active_session(state: &AppState, jar: &CookieJar) -> Option<String> {
    let cookie = jar.get(SESSION_COOKIE)?;
    if state.sessions.is_active(cookie.value()).await {
        Some(cookie.value().to_string())
    } else {
        None
    }
}

// Pages behind this layer bounce to the login form without a live session
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request<Body>,
    next: Next,
) -> Response {
    if active_session(&state, &jar).await.is_none() {
        debug!("No admin session for {}, redirecting to login", request.uri().path());
        return Redirect::to(LOGIN_PATH).into_response();
    }

    next.run(request).await
}
