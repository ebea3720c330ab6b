use askama::Template;

use shared_models::{AvailabilityItem, Doctor, Weekday};
use shared_utils::{Notice, SelectOption};

use crate::models::SlotForm;
use crate::services::SchedulePage;

#[derive(Debug, Clone)]
pub struct SlotRow {
    pub availability_id: i64,
    pub day: String,
    pub start: String,
    pub end: String,
    pub buffer: u32,
}

impl From<&AvailabilityItem> for SlotRow {
    fn from(item: &AvailabilityItem) -> Self {
        Self {
            availability_id: item.availability_id,
            day: item.day_of_week.to_string(),
            start: item.start_time.clone(),
            end: item.end_time.clone(),
            buffer: item.buffer_time,
        }
    }
}

/// One doctor block: header, slot table and add-slot form.
#[derive(Debug, Clone)]
pub struct DoctorCard {
    pub id: i64,
    pub name: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub states: String,
    pub slots: Vec<SlotRow>,
    pub draft: SlotForm,
    pub day_options: Vec<SelectOption>,
}

impl DoctorCard {
    fn new(doctor: &Doctor, draft: SlotForm) -> Self {
        let day_options = Weekday::ALL
            .iter()
            .map(|day| SelectOption::new(day.as_str(), day.as_str(), &draft.day_of_week))
            .collect();

        Self {
            id: doctor.id,
            name: doctor.display_name(),
            subtitle: doctor.subtitle(),
            email: doctor.email.clone(),
            phone: doctor.phone.clone().unwrap_or_default(),
            states: doctor.states_label(),
            slots: doctor.availability.iter().map(SlotRow::from).collect(),
            draft,
            day_options,
        }
    }
}

#[derive(Template)]
#[template(path = "schedule/page.html")]
pub struct ScheduleTemplate {
    pub q: String,
    pub state_filter: String,
    pub cards: Vec<DoctorCard>,
    pub notice: Option<Notice>,
}

impl From<SchedulePage> for ScheduleTemplate {
    fn from(page: SchedulePage) -> Self {
        let cards = page
            .doctors
            .iter()
            .map(|doctor| DoctorCard::new(doctor, page.draft_for(doctor.id)))
            .collect();

        Self {
            q: page.filter.q,
            state_filter: page.filter.state,
            cards,
            notice: page.notice,
        }
    }
}
