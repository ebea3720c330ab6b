use serde::{Deserialize, Serialize};

use shared_models::Weekday;

/// Search box and state filter of the availability page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleFilter {
    pub q: String,
    pub state: String,
}

/// Per-doctor "add slot" draft, as typed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlotForm {
    pub day_of_week: String,
    /// `HH:MM` from a time input.
    pub start_time: String,
    pub end_time: String,
    pub buffer_time: String,
}

/// Add-slot post: the draft plus the filter the page was showing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddSlotSubmission {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub buffer_time: String,
    pub q: String,
    pub state: String,
}

impl AddSlotSubmission {
    pub fn split(self) -> (SlotForm, ScheduleFilter) {
        (
            SlotForm {
                day_of_week: self.day_of_week,
                start_time: self.start_time,
                end_time: self.end_time,
                buffer_time: self.buffer_time,
            },
            ScheduleFilter { q: self.q, state: self.state },
        )
    }
}

/// JSON body for `POST /doctor-availability/{doctor_id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSlotPayload {
    pub day_of_week: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub buffer_time: u32,
}
