use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, warn};

use shared_api_client::{endpoints, ApiClient};
use shared_models::Doctor;
use shared_utils::{AppState, Notice};

use crate::models::{ScheduleFilter, SlotForm};
use crate::services::slots::sort_slots;
use crate::services::validation::build_slot_payload;

/// Availability page contents after a load or an action.
#[derive(Debug, Clone, Default)]
pub struct SchedulePage {
    /// Doctors passing the filter, slots in display order.
    pub doctors: Vec<Doctor>,
    pub filter: ScheduleFilter,
    pub notice: Option<Notice>,
    /// Draft kept for the doctor whose submit failed.
    pub draft: Option<(i64, SlotForm)>,
}

impl SchedulePage {
    pub fn draft_for(&self, doctor_id: i64) -> SlotForm {
        match &self.draft {
            Some((id, form)) if *id == doctor_id => form.clone(),
            _ => SlotForm::default(),
        }
    }
}

pub struct ScheduleService {
    api: ApiClient,
}

impl ScheduleService {
    pub fn new(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }

    pub async fn load(&self, filter: ScheduleFilter) -> SchedulePage {
        match self.api.list_doctors().await {
            Ok(doctors) => {
                let total = doctors.len();
                let doctors: Vec<Doctor> = doctors
                    .into_iter()
                    .filter(|d| d.matches_query(&filter.q) && d.licensed_in(&filter.state))
                    .map(|mut d| {
                        sort_slots(&mut d.availability);
                        d
                    })
                    .collect();
                debug!("Showing {} of {} doctors", doctors.len(), total);

                SchedulePage { doctors, filter, notice: None, draft: None }
            }
            Err(e) => {
                warn!("Failed to load doctors: {}", e);
                SchedulePage {
                    doctors: Vec::new(),
                    filter,
                    notice: Some(Notice::alert(e.to_string())),
                    draft: None,
                }
            }
        }
    }

    async fn reload_with(&self, filter: ScheduleFilter, notice: Notice) -> SchedulePage {
        let mut page = self.load(filter).await;
        if page.notice.is_none() {
            page.notice = Some(notice);
        }
        page
    }

    /// Adds a weekly slot. On success the doctor's draft is cleared; on any
    /// failure the draft is kept and the reason shown as a status message.
    pub async fn add_slot(&self, doctor_id: i64, form: SlotForm, filter: ScheduleFilter) -> SchedulePage {
        let result = match build_slot_payload(&form) {
            Err(e) => Err(e.to_string()),
            Ok(payload) => {
                debug!("Adding {} slot for doctor {}", payload.day_of_week, doctor_id);
                self.api
                    .execute(
                        Method::POST,
                        &endpoints::doctor_availability(doctor_id),
                        Some(&payload),
                        "Add availability",
                    )
                    .await
                    .map_err(|e| e.to_string())
            }
        };

        match result {
            Ok(()) => {
                info!("Availability added for doctor {}", doctor_id);
                self.reload_with(filter, Notice::status("Availability added.")).await
            }
            Err(message) => {
                let mut page = self.reload_with(filter, Notice::status(message)).await;
                page.draft = Some((doctor_id, form));
                page
            }
        }
    }

    pub async fn delete_slot(&self, doctor_id: i64, availability_id: i64, filter: ScheduleFilter) -> SchedulePage {
        debug!("Deleting availability {} of doctor {}", availability_id, doctor_id);
        let result = self
            .api
            .execute::<Value>(
                Method::DELETE,
                &endpoints::availability_slot(doctor_id, availability_id),
                None,
                "Delete",
            )
            .await;

        match result {
            Ok(()) => {
                info!("Availability {} deleted", availability_id);
                self.reload_with(filter, Notice::status("Availability deleted.")).await
            }
            Err(e) => self.reload_with(filter, Notice::status(e.to_string())).await,
        }
    }
}
