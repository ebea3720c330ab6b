use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Form,
};

use shared_utils::{AppState, HtmlTemplate};

use crate::models::{AddSlotSubmission, ScheduleFilter};
use crate::services::ScheduleService;
use crate::views::ScheduleTemplate;

#[axum::debug_handler]
pub async fn show_schedule(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ScheduleFilter>,
) -> Response {
    let service = ScheduleService::new(&state);
    let page = service.load(filter).await;

    HtmlTemplate(ScheduleTemplate::from(page)).into_response()
}

#[axum::debug_handler]
pub async fn add_slot(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
    Form(submission): Form<AddSlotSubmission>,
) -> Response {
    let service = ScheduleService::new(&state);
    let (form, filter) = submission.split();
    let page = service.add_slot(doctor_id, form, filter).await;

    HtmlTemplate(ScheduleTemplate::from(page)).into_response()
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    Path((doctor_id, availability_id)): Path<(i64, i64)>,
    Form(filter): Form<ScheduleFilter>,
) -> Response {
    let service = ScheduleService::new(&state);
    let page = service.delete_slot(doctor_id, availability_id, filter).await;

    HtmlTemplate(ScheduleTemplate::from(page)).into_response()
}
