use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use tracing::debug;

use shared_models::error::AppError;
use shared_utils::{AppState, HtmlTemplate};

use crate::models::DoctorForm;
use crate::services::DirectoryService;
use crate::views::{DoctorFormTemplate, DoctorListTemplate};

#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<AppState>>) -> Response {
    let service = DirectoryService::new(&state);
    let page = service.load().await;

    HtmlTemplate(DoctorListTemplate::from(page)).into_response()
}

#[axum::debug_handler]
pub async fn new_doctor_form(State(state): State<Arc<AppState>>) -> Response {
    let service = DirectoryService::new(&state);
    let form = DoctorForm::blank(service.default_password());

    HtmlTemplate(DoctorFormTemplate::create(form, None)).into_response()
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DoctorForm>,
) -> Response {
    let service = DirectoryService::new(&state);

    match service.create(&form).await {
        Ok(page) => HtmlTemplate(DoctorListTemplate::from(page)).into_response(),
        Err(notice) => {
            debug!("Create doctor rejected: {}", notice.message);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                HtmlTemplate(DoctorFormTemplate::create(form, Some(notice))),
            )
                .into_response()
        }
    }
}

#[axum::debug_handler]
pub async fn edit_doctor_form(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
) -> Result<Response, AppError> {
    let service = DirectoryService::new(&state);

    let doctor = service
        .find(doctor_id)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    let form = DoctorForm::from_doctor(&doctor);
    Ok(HtmlTemplate(DoctorFormTemplate::edit(doctor_id, form, None)).into_response())
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
    Form(form): Form<DoctorForm>,
) -> Response {
    let service = DirectoryService::new(&state);

    match service.update(doctor_id, &form).await {
        Ok(page) => HtmlTemplate(DoctorListTemplate::from(page)).into_response(),
        Err(notice) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            HtmlTemplate(DoctorFormTemplate::edit(doctor_id, form, Some(notice))),
        )
            .into_response(),
    }
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<i64>,
) -> Response {
    let service = DirectoryService::new(&state);
    let page = service.delete(doctor_id).await;

    HtmlTemplate(DoctorListTemplate::from(page)).into_response()
}
