use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use shared_api_client::{endpoints, ApiClient, ApiError};
use shared_models::Doctor;
use shared_utils::{AppState, Notice};

use crate::models::DoctorForm;
use crate::services::validation::{build_create_payload, build_update_payload};

/// What the directory page shows after a load or a mutation.
#[derive(Debug, Clone, Default)]
pub struct DirectoryPage {
    pub doctors: Vec<Doctor>,
    pub notice: Option<Notice>,
}

pub struct DirectoryService {
    api: ApiClient,
    default_password: String,
}

impl DirectoryService {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            default_password: state.config.default_doctor_password.clone(),
        }
    }

    pub fn default_password(&self) -> &str {
        &self.default_password
    }

    /// Fetches the full list. A failed load shows an alert and no rows.
    pub async fn load(&self) -> DirectoryPage {
        match self.api.list_doctors().await {
            Ok(doctors) => {
                debug!("Loaded {} doctors", doctors.len());
                DirectoryPage { doctors, notice: None }
            }
            Err(e) => {
                warn!("Failed to load doctors: {}", e);
                DirectoryPage {
                    doctors: Vec::new(),
                    notice: Some(Notice::alert(e.to_string())),
                }
            }
        }
    }

    /// Re-fetches after a mutation. A load failure replaces the success notice.
    async fn reload_with(&self, notice: Notice) -> DirectoryPage {
        let mut page = self.load().await;
        if page.notice.is_none() {
            page.notice = Some(notice);
        }
        page
    }

    pub async fn find(&self, doctor_id: i64) -> Result<Option<Doctor>, ApiError> {
        let doctors = self.api.list_doctors().await?;
        Ok(doctors.into_iter().find(|d| d.id == doctor_id))
    }

    /// Validates and submits a new doctor. `Err` carries the alert to show on
    /// the still-open form; validation failures never reach the API.
    pub async fn create(&self, form: &DoctorForm) -> Result<DirectoryPage, Notice> {
        let payload = build_create_payload(form, &self.default_password)
            .map_err(|e| Notice::alert(e.to_string()))?;

        debug!("Creating doctor {}", payload.email);
        self.api
            .execute(Method::POST, endpoints::CREATE_DOCTOR, Some(&payload), "Create doctor")
            .await
            .map_err(|e| Notice::alert(e.to_string()))?;

        info!("Doctor {} created", payload.email);
        Ok(self.reload_with(Notice::status("Doctor created.")).await)
    }

    pub async fn update(&self, doctor_id: i64, form: &DoctorForm) -> Result<DirectoryPage, Notice> {
        let payload = build_update_payload(form).map_err(|e| Notice::alert(e.to_string()))?;

        debug!("Updating doctor {}", doctor_id);
        self.api
            .execute(Method::PUT, &endpoints::doctor(doctor_id), Some(&payload), "Update doctor")
            .await
            .map_err(|e| Notice::alert(e.to_string()))?;

        info!("Doctor {} updated", doctor_id);
        Ok(self.reload_with(Notice::status("Doctor updated.")).await)
    }

    /// Deletes and re-renders the list. A failed delete still shows the
    /// current rows with the failure as an alert.
    pub async fn delete(&self, doctor_id: i64) -> DirectoryPage {
        debug!("Deleting doctor {}", doctor_id);
        let result = self
            .api
            .execute::<Value>(Method::DELETE, &endpoints::doctor(doctor_id), None, "Delete")
            .await;

        match result {
            Ok(()) => {
                info!("Doctor {} deleted", doctor_id);
                self.reload_with(Notice::status("Doctor deleted.")).await
            }
            Err(e) => {
                let mut page = self.load().await;
                page.notice = Some(Notice::alert(e.to_string()));
                page
            }
        }
    }
}
