use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lenient::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday-first display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown day of week: {}", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownWeekday(wanted.to_string()))
    }
}

/// One recurring weekly slot as returned by the directory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityItem {
    pub availability_id: i64,
    pub day_of_week: Weekday,
    /// `HH:MM:SS`, possibly with fractional seconds.
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buffer_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weekday_index_is_monday_first() {
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert_eq!(" Sunday ".parse::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("Funday".parse::<Weekday>().is_err());
        assert!("".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_availability_item_wire_shape() {
        let item: AvailabilityItem = serde_json::from_value(json!({
            "availability_id": 12,
            "day_of_week": "Wednesday",
            "start_time": "09:00:00",
            "end_time": "12:30:00.000000",
            "buffer_time": 10
        }))
        .unwrap();

        assert_eq!(item.day_of_week, Weekday::Wednesday);
        assert_eq!(item.end_time, "12:30:00.000000");
        assert_eq!(item.buffer_time, 10);
    }

    #[test]
    fn test_null_buffer_reads_as_zero() {
        let item: AvailabilityItem = serde_json::from_value(json!({
            "availability_id": 3,
            "day_of_week": "Monday",
            "start_time": "08:00:00",
            "end_time": "09:00:00",
            "buffer_time": null
        }))
        .unwrap();

        assert_eq!(item.buffer_time, 0);
    }
}
