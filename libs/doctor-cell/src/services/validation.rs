use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use shared_models::{normalize_state_codes, Gender};

use crate::models::{AdditionalInfoPayload, DoctorForm, DoctorPayload};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::new("Email is required."));
    }
    if !EMAIL_REGEX.is_match(email) || email.len() > 254 {
        return Err(ValidationError::new("Email address is not valid."));
    }
    Ok(email.to_string())
}

fn validate_gender(raw: &str) -> Result<Gender, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(Gender::default());
    }
    raw.parse::<Gender>()
        .map_err(|_| ValidationError::new("Gender must be M, F or X."))
}

fn validate_dob(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    match optional_text(raw) {
        None => Ok(None),
        Some(dob) => NaiveDate::parse_from_str(&dob, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::new("Date of birth must be in YYYY-MM-DD format.")),
    }
}

fn validate_additional_info(form: &DoctorForm) -> Result<Option<AdditionalInfoPayload>, ValidationError> {
    if !form.has_additional_info() {
        return Ok(None);
    }

    let title = form.title.trim();
    let speciality = form.speciality.trim();
    if title.is_empty() || speciality.is_empty() {
        return Err(ValidationError::new(
            "Title and speciality are required when additional info is provided.",
        ));
    }

    let work_experience = match form.work_experience.trim() {
        "" => 0,
        raw => raw.parse::<u32>().map_err(|_| {
            ValidationError::new("Work experience must be a non-negative whole number.")
        })?,
    };

    Ok(Some(AdditionalInfoPayload {
        title: title.to_string(),
        speciality: speciality.to_string(),
        work_experience,
        npi_number: optional_text(&form.npi_number),
        qualification: optional_text(&form.qualification),
    }))
}

fn validate_fields(form: &DoctorForm) -> Result<DoctorPayload, ValidationError> {
    Ok(DoctorPayload {
        email: validate_email(&form.email)?,
        phone: optional_text(&form.phone),
        first_name: optional_text(&form.first_name),
        last_name: optional_text(&form.last_name),
        gender: validate_gender(&form.gender)?,
        dob: validate_dob(&form.dob)?,
        password: None,
        additional_info: validate_additional_info(form)?,
        states: normalize_state_codes(&form.states),
    })
}

/// Checks a create form and assembles its payload. A blank password falls
/// back to `default_password`.
pub fn build_create_payload(
    form: &DoctorForm,
    default_password: &str,
) -> Result<DoctorPayload, ValidationError> {
    let mut payload = validate_fields(form)?;
    payload.password = optional_text(&form.password).or_else(|| Some(default_password.to_string()));
    Ok(payload)
}

/// Checks an edit form. Updates never carry a password.
pub fn build_update_payload(form: &DoctorForm) -> Result<DoctorPayload, ValidationError> {
    validate_fields(form)
}
