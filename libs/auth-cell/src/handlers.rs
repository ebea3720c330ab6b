use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{info, warn};

use shared_config::AppConfig;
use shared_utils::extractor::{active_session, LOGIN_PATH};
use shared_utils::{AppState, HtmlTemplate, SESSION_COOKIE};

use crate::views::LoginTemplate;

const HOME_PATH: &str = "/doctors";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn credentials_match(config: &AppConfig, form: &LoginForm) -> bool {
    form.email.trim() == config.admin_email && form.password == config.admin_password
}

#[axum::debug_handler]
pub async fn login_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if active_session(&state, &jar).await.is_some() {
        return Redirect::to(HOME_PATH).into_response();
    }

    HtmlTemplate(LoginTemplate::blank()).into_response()
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if !credentials_match(&state.config, &form) {
        warn!("Rejected admin login for {}", form.email.trim());
        let template = LoginTemplate {
            email: form.email,
            error: Some("Invalid credentials.".to_string()),
        };
        return (StatusCode::UNAUTHORIZED, HtmlTemplate(template)).into_response();
    }

    let session_id = state.sessions.create().await;
    info!("Admin {} signed in", state.config.admin_email);

    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), Redirect::to(HOME_PATH)).into_response()
}

#[axum::debug_handler]
pub async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if state.sessions.revoke(cookie.value()).await {
            info!("Admin signed out");
        }
    }

    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}
