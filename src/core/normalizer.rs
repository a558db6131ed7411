//! Event normalizer: CSV rows → typed, calendar-tagged, classified events.
//!
//! Ingestion is fail-fast. A missing column, a short record or a bad
//! timestamp aborts the whole run; nothing partial is returned.

use crate::config::ColumnNames;
use crate::errors::{AppError, AppResult};
use crate::models::classified_event::ClassifiedEvent;
use crate::models::raw_event::{RawEvent, RawRow};
use crate::utils::date::is_working_day;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// The input layout: which header names carry the three required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub timestamp: String,
    pub user: String,
    pub location: String,
}

/// Positions of the required columns inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    timestamp: usize,
    user: usize,
    location: usize,
}

impl Default for Schema {
    fn default() -> Self {
        Self::from_columns(&ColumnNames::default())
    }
}

impl Schema {
    pub fn from_columns(cols: &ColumnNames) -> Self {
        Self {
            timestamp: cols.timestamp.clone(),
            user: cols.user.clone(),
            location: cols.location.clone(),
        }
    }

    /// One-line description of the expected input, used in error messages.
    pub fn describe(&self) -> String {
        format!(
            "expected a CSV file with a header row containing the columns '{}', '{}' and '{}' \
             (e.g. 2024-01-01 09:00:00,John Doe,Office In)",
            self.timestamp, self.user, self.location
        )
    }

    /// What a valid timestamp cell looks like, for `InvalidTimestamp`.
    pub fn describe_timestamp(&self, formats: &[String]) -> String {
        format!(
            "column '{}' must match one of {}, RFC 3339 or YYYY-MM-DD; {}",
            self.timestamp,
            formats.join(" | "),
            self.describe()
        )
    }

    fn locate(&self, headers: &StringRecord) -> AppResult<ColumnIndex> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let wanted = [&self.timestamp, &self.user, &self.location];
        let found: Vec<Option<usize>> = wanted.iter().map(|n| find(n)).collect();

        let missing: Vec<String> = wanted
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| format!("'{name}'"))
            .collect();

        match found.as_slice() {
            [Some(timestamp), Some(user), Some(location)] => Ok(ColumnIndex {
                timestamp: *timestamp,
                user: *user,
                location: *location,
            }),
            _ => Err(AppError::malformed(
                format!("missing required column(s) {}", missing.join(", ")),
                self.describe(),
            )),
        }
    }
}

/// Open `path` and read its required fields.
pub fn read_rows_from_path(path: &Path, schema: &Schema) -> AppResult<Vec<RawRow>> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading attendance log");
    read_rows(file, schema)
}

/// Read the required fields of every record. Extra columns are ignored.
pub fn read_rows<R: Read>(reader: R, schema: &Schema) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(AppError::malformed("input has no header row", schema.describe()));
    }

    let idx = schema.locate(&headers)?;
    let mut rows = Vec::new();

    for (n, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(n as u64 + 2);

        let field = |i: usize, name: &str| -> AppResult<String> {
            record.get(i).map(str::to_string).ok_or_else(|| {
                AppError::malformed(
                    format!("line {line}: missing value for column '{name}'"),
                    schema.describe(),
                )
            })
        };

        let timestamp = field(idx.timestamp, &schema.timestamp)?;
        let user = field(idx.user, &schema.user)?;
        let location = field(idx.location, &schema.location)?;

        if user.is_empty() {
            return Err(AppError::malformed(
                format!("line {line}: empty value for column '{}'", schema.user),
                schema.describe(),
            ));
        }

        rows.push(RawRow {
            timestamp,
            user,
            location,
            line,
        });
    }

    debug!(rows = rows.len(), "attendance rows read");
    Ok(rows)
}

/// Parse a combined date-and-time value.
///
/// `formats` are tried in order, then RFC 3339 (wall-clock time kept as
/// written, offset discarded), then a bare `YYYY-MM-DD` at midnight.
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse, weekday-filter and classify every row, with the default schema
/// named in errors.
pub fn normalize(rows: &[RawRow], formats: &[String]) -> AppResult<Vec<ClassifiedEvent>> {
    normalize_with_schema(rows, &Schema::default(), formats)
}

/// Parse, weekday-filter and classify every row.
///
/// Every timestamp is parsed before anything is filtered, so a bad value on
/// a weekend row still aborts the run.
pub fn normalize_with_schema(
    rows: &[RawRow],
    schema: &Schema,
    formats: &[String],
) -> AppResult<Vec<ClassifiedEvent>> {
    let raw: Vec<RawEvent> = rows
        .iter()
        .map(|r| to_raw_event(r, schema, formats))
        .collect::<AppResult<_>>()?;

    let total = raw.len();
    let events: Vec<ClassifiedEvent> = raw
        .into_iter()
        .filter(|e| is_working_day(e.timestamp.date()))
        .map(ClassifiedEvent::from_raw)
        .collect();

    let unknown = events.iter().filter(|e| !e.direction.is_known()).count();
    if unknown > 0 {
        warn!(unknown, "events with neither 'In' nor 'Out' in their location");
    }

    debug!(
        total,
        kept = events.len(),
        weekend = total - events.len(),
        "events normalized"
    );

    Ok(events)
}

fn to_raw_event(row: &RawRow, schema: &Schema, formats: &[String]) -> AppResult<RawEvent> {
    let timestamp =
        parse_timestamp(&row.timestamp, formats).ok_or_else(|| AppError::InvalidTimestamp {
            line: row.line,
            value: row.timestamp.clone(),
            expected: schema.describe_timestamp(formats),
        })?;

    Ok(RawEvent {
        user: row.user.clone(),
        timestamp,
        location_label: row.location.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::direction::Direction;

    fn formats() -> Vec<String> {
        crate::config::Config::default().timestamp_formats
    }

    fn rows(csv: &str) -> AppResult<Vec<RawRow>> {
        read_rows(csv.as_bytes(), &Schema::default())
    }

    #[test]
    fn reads_required_columns_and_ignores_extras() {
        let input = "Badge,Date/time,Where,User\n\
                     7,2024-01-01 09:00:00,Office In,John Doe\n";
        let r = rows(input).unwrap();
        assert_eq!(
            r,
            vec![RawRow::new("2024-01-01 09:00:00", "John Doe", "Office In", 2)]
        );
    }

    #[test]
    fn missing_column_is_malformed_and_named() {
        let err = rows("Date/time,Where\n2024-01-01 09:00:00,Office In\n").unwrap_err();
        match err {
            AppError::MalformedInput { reason, expected } => {
                assert!(reason.contains("'User'"));
                assert!(expected.contains("'Date/time', 'User' and 'Where'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(matches!(
            rows("").unwrap_err(),
            AppError::MalformedInput { .. }
        ));
    }

    #[test]
    fn short_record_is_malformed() {
        let err = rows("Date/time,User,Where\n2024-01-01 09:00:00,John Doe\n").unwrap_err();
        match err {
            AppError::MalformedInput { reason, .. } => {
                assert!(reason.contains("line 2"));
                assert!(reason.contains("'Where'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_user_is_malformed() {
        let err = rows("Date/time,User,Where\n2024-01-01 09:00:00,,Office In\n").unwrap_err();
        assert!(matches!(err, AppError::MalformedInput { .. }));
    }

    #[test]
    fn custom_schema() {
        let cols = ColumnNames {
            timestamp: "When".into(),
            user: "Employee".into(),
            location: "Door".into(),
        };
        let r = read_rows(
            "Employee,When,Door\nAda,2024-01-02 08:00,Main In\n".as_bytes(),
            &Schema::from_columns(&cols),
        )
        .unwrap();
        assert_eq!(r[0].user, "Ada");
        assert_eq!(r[0].timestamp, "2024-01-02 08:00");
    }

    #[test]
    fn timestamp_formats() {
        let f = formats();
        let expected = NaiveDateTime::parse_from_str("2024-01-01 09:00:00", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(parse_timestamp("2024-01-01 09:00:00", &f), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01 09:00", &f), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T09:00:00", &f), Some(expected));
        assert_eq!(parse_timestamp("2024-01-01T09:00:00+02:00", &f), Some(expected));
        assert_eq!(
            parse_timestamp("2024-01-01", &f),
            expected.date().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("01/01/2024 9am", &f), None);
        assert_eq!(parse_timestamp("", &f), None);
    }

    #[test]
    fn invalid_timestamp_aborts_the_run() {
        let input = vec![
            RawRow::new("2024-01-01 09:00:00", "John Doe", "Office In", 2),
            RawRow::new("not a date", "John Doe", "Office Out", 3),
        ];
        let err = normalize(&input, &formats()).unwrap_err();
        match err {
            AppError::InvalidTimestamp {
                line,
                value,
                expected,
            } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not a date");
                assert!(expected.contains("column 'Date/time'"));
                assert!(expected.contains("%Y-%m-%d %H:%M:%S"));
                assert!(expected.contains("'Date/time', 'User' and 'Where'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_timestamp_names_the_configured_column() {
        let schema = Schema::from_columns(&ColumnNames {
            timestamp: "When".into(),
            user: "Employee".into(),
            location: "Door".into(),
        });
        let err = normalize_with_schema(&[RawRow::new("bad", "A", "Office In", 2)], &schema, &formats())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid timestamp 'bad' at line 2;"));
        assert!(msg.contains("column 'When'"));
        assert!(msg.contains("'When', 'Employee' and 'Door'"));
    }

    #[test]
    fn weekend_rows_are_dropped() {
        let input = vec![
            RawRow::new("2024-01-05 09:00:00", "A", "Office In", 2), // Friday
            RawRow::new("2024-01-06 09:00:00", "A", "Office In", 3), // Saturday
            RawRow::new("2024-01-07 09:00:00", "A", "Office In", 4), // Sunday
        ];
        let events = normalize(&input, &formats()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].weekday_name, "Friday");
    }

    #[test]
    fn events_are_enriched_and_classified() {
        let input = vec![
            RawRow::new("2024-01-01 09:00:00", "John Doe", "Office In", 2),
            RawRow::new("2024-01-01 18:00:00", "John Doe", "Office Out", 3),
            RawRow::new("2024-01-01 12:00:00", "John Doe", "Cafeteria", 4),
        ];
        let events = normalize(&input, &formats()).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].direction, Direction::Entry);
        assert_eq!(events[1].direction, Direction::Exit);
        assert_eq!(events[2].direction, Direction::Unknown);

        let e = &events[0];
        assert_eq!(e.date_str(), "2024-01-01");
        assert_eq!(e.weekday_name, "Monday");
        assert_eq!(e.iso_week_key, "2024-W01");
        assert_eq!(e.month_label, "January 2024");
        assert_eq!(e.time_str(), "09:00:00");
    }
}
