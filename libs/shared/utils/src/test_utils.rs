use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;

use shared_config::AppConfig;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

pub struct TestConfig {
    pub api_base_url: String,
    pub token_store_path: PathBuf,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:54321".to_string(),
            token_store_path: std::env::temp_dir().join("clinibooth-test-missing-storage.json"),
        }
    }
}

impl TestConfig {
    /// Config pointing at a mock server, e.g. `wiremock::MockServer::uri()`.
    pub fn with_api(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            token_store_path: self.token_store_path.clone(),
            ..AppConfig::default()
        }
    }

    pub fn to_state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(self.to_app_config()).expect("test http client"))
    }

    /// `Cookie` header value for a freshly registered admin session.
    pub async fn session_cookie(state: &AppState) -> String {
        let id = state.sessions.create().await;
        format!("{}={}", SESSION_COOKIE, id)
    }
}

pub struct MockDirectoryResponses;

impl MockDirectoryResponses {
    pub fn doctor(id: i64, email: &str, first_name: &str, last_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "email": email,
            "phone": "555-0100",
            "first_name": first_name,
            "last_name": last_name,
            "gender": "F",
            "dob": "1980-04-12",
            "additional_info": {
                "id": id * 10,
                "doctor_id": id,
                "profile_photo": null,
                "title": "MD",
                "speciality": "Cardiology",
                "work_experience": 12,
                "npi_number": "1234567890",
                "qualification": null
            },
            "states": [
                {"id": id * 100, "doctor_id": id, "state_code": "VA"},
                {"id": id * 100 + 1, "doctor_id": id, "state_code": "DC"}
            ],
            "availability": []
        })
    }

    pub fn slot(availability_id: i64, day: &str, start: &str, end: &str) -> serde_json::Value {
        json!({
            "availability_id": availability_id,
            "day_of_week": day,
            "start_time": start,
            "end_time": end,
            "buffer_time": 15
        })
    }

    pub fn doctor_with_slots(id: i64, email: &str, slots: Vec<serde_json::Value>) -> serde_json::Value {
        let mut doctor = Self::doctor(id, email, "Ada", "Okafor");
        doctor["availability"] = serde_json::Value::Array(slots);
        doctor
    }
}
