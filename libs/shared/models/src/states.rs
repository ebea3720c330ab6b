//! Licensed state codes.
//!
//! The directory API has returned the `states` relation in several shapes:
//! a single CSV string, one row per code (`{"state_code": "VA", ..}`), a row
//! whose `state_code` itself holds a CSV, or a plain list of codes. Reads
//! accept all of them; writes always send a JSON list of codes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered, deduplicated, upper-cased list of state codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateCodes(Vec<String>);

impl StateCodes {
    /// Normalizes free-text CSV input. Returns `None` when nothing survives trimming.
    pub fn parse_csv(input: &str) -> Option<Self> {
        let mut codes = Self::default();
        codes.extend_csv(input);
        if codes.is_empty() {
            None
        } else {
            Some(codes)
        }
    }

    fn extend_csv(&mut self, input: &str) {
        for part in input.split(',') {
            let code = part.trim().to_uppercase();
            if code.is_empty() || self.0.contains(&code) {
                continue;
            }
            self.0.push(code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, code: &str) -> bool {
        let wanted = code.trim().to_uppercase();
        self.0.iter().any(|c| *c == wanted)
    }

    /// Joins with `,` as typed into the edit form.
    pub fn to_csv(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for StateCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Free-function form of [`StateCodes::parse_csv`].
pub fn normalize_state_codes(input: &str) -> Option<StateCodes> {
    StateCodes::parse_csv(input)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStates {
    Csv(String),
    List(Vec<RawStateEntry>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStateEntry {
    Code(Option<String>),
    Row { state_code: Option<String> },
}

impl<'de> Deserialize<'de> for StateCodes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawStates>::deserialize(deserializer)?;
        let mut codes = StateCodes::default();

        match raw {
            None => {}
            Some(RawStates::Csv(csv)) => codes.extend_csv(&csv),
            Some(RawStates::List(entries)) => {
                for entry in entries {
                    let code = match entry {
                        RawStateEntry::Code(code) => code,
                        RawStateEntry::Row { state_code } => state_code,
                    };
                    if let Some(code) = code {
                        codes.extend_csv(&code);
                    }
                }
            }
        }

        Ok(codes)
    }
}

impl Serialize for StateCodes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
