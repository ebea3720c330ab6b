pub mod schedule;
pub mod slots;
pub mod validation;

pub use schedule::{SchedulePage, ScheduleService};
pub use slots::{compare_slots, is_canonical_time, sort_slots, to_canonical_time};
pub use validation::{build_slot_payload, ValidationError};
