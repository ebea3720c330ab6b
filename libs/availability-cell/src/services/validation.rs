use thiserror::Error;

use shared_models::Weekday;

use crate::models::{NewSlotPayload, SlotForm};
use crate::services::slots::{is_canonical_time, to_canonical_time};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// Checks a slot draft in the order the page reports problems and builds
/// the request body.
pub fn build_slot_payload(form: &SlotForm) -> Result<NewSlotPayload, ValidationError> {
    if form.day_of_week.trim().is_empty() {
        return Err(ValidationError::new("Please select a day of week."));
    }
    let day_of_week = form
        .day_of_week
        .parse::<Weekday>()
        .map_err(|_| ValidationError::new("Please select a day of week."))?;

    let start_raw = form.start_time.trim();
    let end_raw = form.end_time.trim();
    if start_raw.is_empty() || end_raw.is_empty() {
        return Err(ValidationError::new("Please provide both start and end time."));
    }

    let start_time = to_canonical_time(start_raw);
    let end_time = to_canonical_time(end_raw);
    if !is_canonical_time(&start_time) || !is_canonical_time(&end_time) {
        return Err(ValidationError::new("Times must be in HH:MM format."));
    }
    if start_time >= end_time {
        return Err(ValidationError::new("End time must be after start time."));
    }

    let buffer_time = match form.buffer_time.trim() {
        "" => 0,
        raw => raw
            .parse::<u32>()
            .map_err(|_| ValidationError::new("Buffer time must be a non-negative whole number of minutes."))?,
    };

    Ok(NewSlotPayload {
        day_of_week,
        start_time,
        end_time,
        buffer_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(day: &str, start: &str, end: &str, buffer: &str) -> SlotForm {
        SlotForm {
            day_of_week: day.into(),
            start_time: start.into(),
            end_time: end.into(),
            buffer_time: buffer.into(),
        }
    }

    #[test]
    fn test_messages_in_order() {
        assert_eq!(
            build_slot_payload(&draft("", "", "", "x")).unwrap_err().0,
            "Please select a day of week."
        );
        assert_eq!(
            build_slot_payload(&draft("Monday", "09:00", "", "x")).unwrap_err().0,
            "Please provide both start and end time."
        );
        assert_eq!(
            build_slot_payload(&draft("Monday", "10:00", "09:00", "x")).unwrap_err().0,
            "End time must be after start time."
        );
        assert_eq!(
            build_slot_payload(&draft("Monday", "09:00", "09:00", "")).unwrap_err().0,
            "End time must be after start time."
        );
        assert_eq!(
            build_slot_payload(&draft("Monday", "09:00", "10:00", "-5")).unwrap_err().0,
            "Buffer time must be a non-negative whole number of minutes."
        );
    }

    #[test]
    fn test_fractional_buffer_is_rejected() {
        assert_eq!(
            build_slot_payload(&draft("Monday", "09:00", "10:00", "7.5")).unwrap_err().0,
            "Buffer time must be a non-negative whole number of minutes."
        );
        assert_eq!(build_slot_payload(&draft("Monday", "09:00", "10:00", "15")).unwrap().buffer_time, 15);
    }

    #[test]
    fn test_unknown_day_and_bad_time() {
        assert!(build_slot_payload(&draft("Someday", "09:00", "10:00", "")).is_err());
        assert_eq!(
            build_slot_payload(&draft("Friday", "9am", "10:00", "")).unwrap_err().0,
            "Times must be in HH:MM format."
        );
    }

    #[test]
    fn test_payload_shape() {
        let payload = build_slot_payload(&draft("Thursday", "08:15", "12:00:00", " ")).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "day_of_week": "Thursday",
                "start_time": "08:15:00",
                "end_time": "12:00:00",
                "buffer_time": 0
            })
        );
    }
}
