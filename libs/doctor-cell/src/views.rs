use askama::Template;

use shared_models::{Doctor, Gender};
use shared_utils::{Notice, SelectOption};

use crate::models::DoctorForm;
use crate::services::DirectoryPage;

/// One table row of the directory.
#[derive(Debug, Clone)]
pub struct DoctorRow {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub speciality: String,
    pub states: String,
    pub delete_prompt: String,
}

fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

impl From<&Doctor> for DoctorRow {
    fn from(doctor: &Doctor) -> Self {
        let who = doctor
            .first_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("this doctor");

        Self {
            id: doctor.id,
            email: doctor.email.clone(),
            phone: doctor.phone.clone().unwrap_or_default(),
            first_name: or_dash(doctor.first_name.as_deref()),
            last_name: or_dash(doctor.last_name.as_deref()),
            gender: doctor.gender.clone().unwrap_or_default(),
            dob: doctor.dob.clone().unwrap_or_default(),
            speciality: doctor.speciality().unwrap_or("—").to_string(),
            states: doctor.states_label(),
            delete_prompt: format!("Are you sure you want to delete {}?", who),
        }
    }
}

#[derive(Template)]
#[template(path = "doctors/list.html")]
pub struct DoctorListTemplate {
    pub rows: Vec<DoctorRow>,
    pub notice: Option<Notice>,
}

impl From<DirectoryPage> for DoctorListTemplate {
    fn from(page: DirectoryPage) -> Self {
        Self {
            rows: page.doctors.iter().map(DoctorRow::from).collect(),
            notice: page.notice,
        }
    }
}

fn unsupported_gender(value: &str) -> bool {
    !value.trim().is_empty() && value.parse::<Gender>().is_err()
}

#[derive(Template)]
#[template(path = "doctors/form.html")]
pub struct DoctorFormTemplate {
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub is_create: bool,
    pub form: DoctorForm,
    pub gender_options: Vec<SelectOption>,
    pub notice: Option<Notice>,
}

impl DoctorFormTemplate {
    /// A stored value outside M/F/X stays selected so that saving it is
    /// rejected instead of falling back to the first option.
    fn gender_options(current: &str) -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> = Gender::ALL
            .iter()
            .map(|g| SelectOption::new(g.as_str(), g.as_str(), current))
            .collect();

        if unsupported_gender(current) {
            let current = current.trim();
            options.insert(
                0,
                SelectOption {
                    value: current.to_string(),
                    label: format!("{} (unsupported)", current),
                    selected: true,
                },
            );
        }
        options
    }

    pub fn create(form: DoctorForm, notice: Option<Notice>) -> Self {
        Self {
            heading: "Create New Doctor".to_string(),
            action: "/doctors".to_string(),
            submit_label: "Save Doctor".to_string(),
            is_create: true,
            gender_options: Self::gender_options(&form.gender),
            form,
            notice,
        }
    }

    pub fn edit(doctor_id: i64, form: DoctorForm, notice: Option<Notice>) -> Self {
        let notice = notice.or_else(|| {
            unsupported_gender(&form.gender).then(|| {
                Notice::alert(format!(
                    "Stored gender '{}' is not M, F or X. Choose one before saving.",
                    form.gender.trim()
                ))
            })
        });

        Self {
            heading: format!("Edit Doctor #{}", doctor_id),
            action: format!("/doctors/{}", doctor_id),
            submit_label: "Update Doctor".to_string(),
            is_create: false,
            gender_options: Self::gender_options(&form.gender),
            form,
            notice,
        }
    }
}
