//! Paths of the directory API, relative to the configured base URL.

pub const DOCTORS: &str = "/doctors/doctors/";
pub const CREATE_DOCTOR: &str = "/doctors/";

pub fn doctor(doctor_id: i64) -> String {
    format!("/doctors/doctors/{}", doctor_id)
}

pub fn doctor_availability(doctor_id: i64) -> String {
    format!("/doctor-availability/{}", doctor_id)
}

pub fn availability_slot(doctor_id: i64, availability_id: i64) -> String {
    format!("/doctors/{}/{}", doctor_id, availability_id)
}
