use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doctor_cell::router::doctor_routes;
use shared_utils::test_utils::{MockDirectoryResponses, TestConfig};
use shared_utils::AppState;

async fn setup(mock_server: &MockServer) -> (Router, Arc<AppState>, String) {
    let state = TestConfig::with_api(mock_server.uri()).to_state();
    let cookie = TestConfig::session_cookie(&state).await;
    (doctor_routes(state.clone()), state, cookie)
}

async fn mount_list(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/doctors/doctors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockDirectoryResponses::doctor(1, "ada@clinibooth.com", "Ada", "Okafor"),
            MockDirectoryResponses::doctor(2, "ben@clinibooth.com", "Ben", "Ito")
        ])))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

fn get(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("cookie", cookie)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_list_doctors_renders_rows() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app.oneshot(get("/", &cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("ada@clinibooth.com"));
    assert!(html.contains("ben@clinibooth.com"));
    assert!(html.contains("VA, DC"));
}

#[tokio::test]
async fn test_list_requires_session() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 0).await;
    let state = TestConfig::with_api(mock_server.uri()).to_state();

    let response = doctor_routes(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/login");
}

#[tokio::test]
async fn test_list_failure_shows_alert() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doctors/doctors/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let html = body_text(app.oneshot(get("/", &cookie)).await.unwrap()).await;

    assert!(html.contains("Request failed (500)"));
    assert!(html.contains("No doctors found."));
}

#[tokio::test]
async fn test_create_with_empty_email_never_calls_api() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 0).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app
        .oneshot(post_form("/", &cookie, "email=&first_name=Ann&gender=F"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Email is required."));
    assert!(html.contains("value=\"Ann\""));
}

#[tokio::test]
async fn test_create_posts_payload_then_refetches() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/"))
        .and(body_partial_json(json!({
            "email": "new@clinibooth.com",
            "gender": "X",
            "password": "root",
            "states": ["VA", "DC"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app
        .oneshot(post_form(
            "/",
            &cookie,
            "email=new%40clinibooth.com&gender=x&states=va%2C+VA+%2Cdc&password=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Doctor created."));
}

#[tokio::test]
async fn test_create_api_failure_keeps_form_open() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doctors/"))
        .respond_with(ResponseTemplate::new(409).set_body_string("Email already registered"))
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 0).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app
        .oneshot(post_form("/", &cookie, "email=dup%40clinibooth.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(response).await;
    assert!(html.contains("Email already registered"));
    assert!(html.contains("Create New Doctor"));
}

#[tokio::test]
async fn test_delete_triggers_exactly_one_refetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/doctors/doctors/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app.oneshot(post_form("/2/delete", &cookie, "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Doctor deleted."));
}

#[tokio::test]
async fn test_delete_failure_shows_alert() {
    let mock_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/doctors/doctors/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let html = body_text(app.oneshot(post_form("/2/delete", &cookie, "")).await.unwrap()).await;

    assert!(html.contains("Delete failed (404)"));
    assert!(html.contains("role=\"alert\""));
}

#[tokio::test]
async fn test_edit_form_prefills_doctor() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app.oneshot(get("/2/edit", &cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Edit Doctor #2"));
    assert!(html.contains("value=\"ben@clinibooth.com\""));
    assert!(html.contains("value=\"VA,DC\""));
    assert!(!html.contains("name=\"password\""));
}

#[tokio::test]
async fn test_edit_with_unsupported_gender_warns_and_update_is_rejected() {
    let mock_server = MockServer::start().await;
    let mut doctor = MockDirectoryResponses::doctor(5, "cy@clinibooth.com", "Cy", "Moss");
    doctor["gender"] = json!("Male");
    Mock::given(method("GET"))
        .and(path("/doctors/doctors/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([doctor])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let html = body_text(app.clone().oneshot(get("/5/edit", &cookie)).await.unwrap()).await;
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("<option value=\"Male\" selected>"));

    let response = app
        .oneshot(post_form("/5", &cookie, "email=cy%40clinibooth.com&gender=Male"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains("Gender must be M, F or X."));
}

#[tokio::test]
async fn test_edit_unknown_doctor_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app.oneshot(get("/99/edit", &cookie)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_puts_payload_then_refetches() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/doctors/doctors/2"))
        .and(body_partial_json(json!({
            "email": "ben@clinibooth.com",
            "additional_info": {"title": "MD", "speciality": "Oncology", "work_experience": 7},
            "states": ["NY"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_list(&mock_server, 1).await;
    let (app, _state, cookie) = setup(&mock_server).await;

    let response = app
        .oneshot(post_form(
            "/2",
            &cookie,
            "email=ben%40clinibooth.com&title=MD&speciality=Oncology&work_experience=7&states=ny",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Doctor updated."));
}
