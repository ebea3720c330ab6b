use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::{Doctor, Gender, StateCodes};

/// Raw create/edit form as posted by the browser. Every field is text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DoctorForm {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub password: String,

    // additional info
    pub title: String,
    pub speciality: String,
    pub work_experience: String,
    pub npi_number: String,
    pub qualification: String,

    /// Comma-separated state codes, e.g. `va, dc`.
    pub states: String,
}

impl DoctorForm {
    pub fn blank(default_password: &str) -> Self {
        Self {
            gender: Gender::default().to_string(),
            password: default_password.to_string(),
            ..Self::default()
        }
    }

    /// Pre-filled edit form for an existing doctor.
    pub fn from_doctor(doctor: &Doctor) -> Self {
        let info = doctor.additional_info.clone().unwrap_or_default();
        let has_info = doctor.additional_info.is_some();

        Self {
            email: doctor.email.clone(),
            phone: doctor.phone.clone().unwrap_or_default(),
            first_name: doctor.first_name.clone().unwrap_or_default(),
            last_name: doctor.last_name.clone().unwrap_or_default(),
            gender: doctor.gender.clone().unwrap_or_else(|| Gender::default().to_string()),
            dob: doctor.dob.clone().unwrap_or_default(),
            password: String::new(),
            title: info.title,
            speciality: info.speciality,
            work_experience: if has_info { info.work_experience.to_string() } else { String::new() },
            npi_number: info.npi_number.unwrap_or_default(),
            qualification: info.qualification.unwrap_or_default(),
            states: doctor.states.to_csv(),
        }
    }

    pub fn has_additional_info(&self) -> bool {
        [
            &self.title,
            &self.speciality,
            &self.work_experience,
            &self.npi_number,
            &self.qualification,
        ]
        .iter()
        .any(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdditionalInfoPayload {
    pub title: String,
    pub speciality: String,
    pub work_experience: u32,
    pub npi_number: Option<String>,
    pub qualification: Option<String>,
}

/// JSON body for create (`POST /doctors/`) and update (`PUT /doctors/doctors/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorPayload {
    pub email: String,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Gender,
    pub dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfoPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<StateCodes>,
}
