use chrono::NaiveDateTime;
use serde::Serialize;

/// The required fields of one input record, still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub timestamp: String,
    pub user: String,
    pub location: String,
    pub line: u64, // 1-based line in the source file (header is line 1)
}

impl RawRow {
    pub fn new(
        timestamp: impl Into<String>,
        user: impl Into<String>,
        location: impl Into<String>,
        line: u64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            user: user.into(),
            location: location.into(),
            line,
        }
    }
}

/// A parsed attendance punch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawEvent {
    pub user: String,
    pub timestamp: NaiveDateTime,
    pub location_label: String,
}
