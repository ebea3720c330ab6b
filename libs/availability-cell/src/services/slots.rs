use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use shared_models::AvailabilityItem;

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("valid time pattern"));

/// `HH:MM` → `HH:MM:SS`. Canonical values pass through, anything else is
/// returned verbatim.
pub fn to_canonical_time(value: &str) -> String {
    if value.is_empty() || !TIME_REGEX.is_match(value) {
        return value.to_string();
    }
    if value.len() == 5 {
        format!("{}:00", value)
    } else {
        value.to_string()
    }
}

/// True for zero-padded `HH:MM:SS`.
pub fn is_canonical_time(value: &str) -> bool {
    value.len() == 8 && TIME_REGEX.is_match(value)
}

/// Monday-first weekday index, then start time. Start times compare as
/// strings, which holds for zero-padded `HH:MM:SS`.
pub fn compare_slots(a: &AvailabilityItem, b: &AvailabilityItem) -> Ordering {
    a.day_of_week
        .index()
        .cmp(&b.day_of_week.index())
        .then_with(|| a.start_time.cmp(&b.start_time))
}

pub fn sort_slots(slots: &mut [AvailabilityItem]) {
    slots.sort_by(compare_slots);
}
