//! Calendar helpers: weekday filter, ISO week keys, month labels.

use chrono::{Datelike, NaiveDate, Weekday};

/// Saturday and Sunday are never working days.
pub fn is_working_day(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday-start ISO-8601 week key, e.g. `2024-W01`.
///
/// The year is the ISO week-year, so 2024-12-30 belongs to `2025-W01`.
pub fn iso_week_key(d: NaiveDate) -> String {
    let w = d.iso_week();
    format!("{:04}-W{:02}", w.year(), w.week())
}

/// Monday and Sunday of the week identified by an ISO week key.
pub fn week_bounds(key: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (year, week) = key.split_once("-W")?;
    let year: i32 = year.parse().ok()?;
    let week: u32 = week.parse().ok()?;

    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
    let sunday = NaiveDate::from_isoywd_opt(year, week, Weekday::Sun)?;
    Some((monday, sunday))
}

/// Month label such as `January 2024`.
pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn weekend_is_not_working() {
        assert!(is_working_day(d("2024-01-05"))); // Friday
        assert!(!is_working_day(d("2024-01-06"))); // Saturday
        assert!(!is_working_day(d("2024-01-07"))); // Sunday
        assert!(is_working_day(d("2024-01-08"))); // Monday
    }

    #[test]
    fn week_key_is_monday_start() {
        assert_eq!(iso_week_key(d("2024-01-01")), "2024-W01");
        assert_eq!(iso_week_key(d("2024-01-05")), "2024-W01");
        assert_eq!(iso_week_key(d("2024-01-08")), "2024-W02");
    }

    #[test]
    fn week_key_uses_iso_year() {
        assert_eq!(iso_week_key(d("2024-12-30")), "2025-W01");
        assert_eq!(iso_week_key(d("2021-01-01")), "2020-W53");
    }

    #[test]
    fn bounds_of_week() {
        assert_eq!(
            week_bounds("2024-W01"),
            Some((d("2024-01-01"), d("2024-01-07")))
        );
        assert_eq!(week_bounds("garbage"), None);
        assert_eq!(week_bounds("2024-W60"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(weekday_name(d("2024-01-03")), "Wednesday");
        assert_eq!(month_label(d("2024-01-03")), "January 2024");
    }
}
