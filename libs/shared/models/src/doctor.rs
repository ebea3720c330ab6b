use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityItem;
use crate::lenient::null_as_default;
use crate::states::StateCodes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    M,
    F,
    X,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::M, Gender::F, Gender::X];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
            Gender::X => "X",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Gender::M),
            "F" => Ok(Gender::F),
            "X" => Ok(Gender::X),
            other => Err(format!("Gender must be M, F or X (got '{}')", other)),
        }
    }
}

/// Extended profile block nested under a doctor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speciality: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub work_experience: u32,
    #[serde(default)]
    pub npi_number: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
}

/// Doctor row as listed by the directory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub email: String,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub additional_info: Option<AdditionalInfo>,
    #[serde(default)]
    pub states: StateCodes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: Vec<AvailabilityItem>,
}

impl Doctor {
    /// `first last`, or the email when both names are blank.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("").trim();
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let name = format!("{} {}", first, last).trim().to_string();
        if name.is_empty() {
            self.email.clone()
        } else {
            name
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.additional_info
            .as_ref()
            .map(|info| info.title.trim())
            .filter(|t| !t.is_empty())
    }

    pub fn speciality(&self) -> Option<&str> {
        self.additional_info
            .as_ref()
            .map(|info| info.speciality.trim())
            .filter(|s| !s.is_empty())
    }

    /// `"{title} · {speciality}"`, falling back to `—` for a missing speciality.
    pub fn subtitle(&self) -> String {
        let speciality = self.speciality().unwrap_or("—");
        match self.title() {
            Some(title) => format!("{} · {}", title, speciality),
            None => speciality.to_string(),
        }
    }

    pub fn states_label(&self) -> String {
        if self.states.is_empty() {
            "—".to_string()
        } else {
            self.states.to_string()
        }
    }

    /// Case-insensitive substring match over email, names, title and speciality.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let haystack = [
            self.email.as_str(),
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or(""),
            self.title().unwrap_or(""),
            self.speciality().unwrap_or(""),
        ]
        .join(" ")
        .to_lowercase();

        haystack.contains(&needle)
    }

    /// Exact state filter; a blank filter matches everyone.
    pub fn licensed_in(&self, state: &str) -> bool {
        state.trim().is_empty() || self.states.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Doctor {
        serde_json::from_value(json!({
            "id": 7,
            "email": "grey@clinibooth.com",
            "phone": "555-0100",
            "first_name": " Meredith ",
            "last_name": "Grey",
            "gender": "F",
            "dob": "1978-03-02",
            "additional_info": {
                "id": 1,
                "doctor_id": 7,
                "title": "MD",
                "speciality": "General Surgery",
                "work_experience": 20,
                "npi_number": null,
                "qualification": null
            },
            "states": [
                {"id": 1, "doctor_id": 7, "state_code": "WA"},
                {"id": 2, "doctor_id": 7, "state_code": "va"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_doctor_reads_without_availability() {
        let doctor = sample();
        assert!(doctor.availability.is_empty());
        assert_eq!(doctor.states.to_csv(), "WA,VA");
    }

    #[test]
    fn test_null_profile_fields_keep_the_row() {
        let doctors: Vec<Doctor> = serde_json::from_value(json!([
            {"id": 1, "email": "a@clinibooth.com"},
            {
                "id": 2,
                "email": "b@clinibooth.com",
                "additional_info": {"title": null, "speciality": null, "work_experience": null},
                "states": null,
                "availability": null
            }
        ]))
        .unwrap();

        assert_eq!(doctors.len(), 2);
        let info = doctors[1].additional_info.as_ref().unwrap();
        assert_eq!(info.work_experience, 0);
        assert_eq!(doctors[1].title(), None);
        assert_eq!(doctors[1].subtitle(), "—");
        assert!(doctors[1].availability.is_empty());
    }

    #[test]
    fn test_display_name_and_fallback() {
        let mut doctor = sample();
        assert_eq!(doctor.display_name(), "Meredith Grey");

        doctor.first_name = None;
        doctor.last_name = Some("  ".into());
        assert_eq!(doctor.display_name(), "grey@clinibooth.com");
    }

    #[test]
    fn test_subtitle_variants() {
        let mut doctor = sample();
        assert_eq!(doctor.subtitle(), "MD · General Surgery");

        doctor.additional_info = None;
        assert_eq!(doctor.subtitle(), "—");
        assert_eq!(doctor.title(), None);
    }

    #[test]
    fn test_filters() {
        let doctor = sample();
        assert!(doctor.matches_query("SURGERY"));
        assert!(doctor.matches_query("grey@"));
        assert!(doctor.matches_query("  "));
        assert!(!doctor.matches_query("cardio"));

        assert!(doctor.licensed_in("va"));
        assert!(doctor.licensed_in(""));
        assert!(!doctor.licensed_in("DC"));
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::F);
        assert!("Q".parse::<Gender>().is_err());
    }
}
