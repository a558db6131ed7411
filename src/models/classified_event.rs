use super::{direction::Direction, raw_event::RawEvent};
use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A punch enriched with its calendar attributes and direction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedEvent {
    pub user: String,
    pub timestamp: NaiveDateTime,
    pub location_label: String,
    pub date: NaiveDate,
    pub weekday_name: String,
    pub iso_week_key: String,
    pub month_label: String,
    pub direction: Direction,
}

impl ClassifiedEvent {
    pub fn from_raw(raw: RawEvent) -> Self {
        let date = raw.timestamp.date();
        let direction = Direction::classify(&raw.location_label);

        Self {
            weekday_name: date::weekday_name(date).to_string(),
            iso_week_key: date::iso_week_key(date),
            month_label: date::month_label(date),
            date,
            direction,
            user: raw.user,
            timestamp: raw.timestamp,
            location_label: raw.location_label,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
