pub mod availability;
pub mod doctor;
pub mod error;
mod lenient;
pub mod states;

pub use availability::{AvailabilityItem, Weekday};
pub use doctor::{AdditionalInfo, Doctor, Gender};
pub use states::{normalize_state_codes, StateCodes};
