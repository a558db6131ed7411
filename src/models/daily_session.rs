use chrono::{Duration, NaiveDate, NaiveDateTime};

/// One user's reconstructed presence window for one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySession {
    pub user: String,
    pub date: NaiveDate,
    pub entry_time: Option<NaiveDateTime>,
    pub exit_time: Option<NaiveDateTime>,
    pub worked_duration: Duration,
    pub iso_week_key: String,
    pub month_label: String,
}

impl DailySession {
    /// Worked time for a day: `exit - entry` when both punches exist,
    /// floored at zero. A missing endpoint yields zero.
    pub fn worked_between(entry: Option<NaiveDateTime>, exit: Option<NaiveDateTime>) -> Duration {
        match (entry, exit) {
            (Some(entry), Some(exit)) => (exit - entry).max(Duration::zero()),
            _ => Duration::zero(),
        }
    }

    pub fn worked_seconds(&self) -> i64 {
        self.worked_duration.num_seconds()
    }

    pub fn worked_hours(&self) -> f64 {
        self.worked_seconds() as f64 / 3600.0
    }

    pub fn is_worked(&self) -> bool {
        self.worked_duration > Duration::zero()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn full_day_duration() {
        let d = DailySession::worked_between(
            Some(at("2024-01-01 09:00:00")),
            Some(at("2024-01-01 18:00:00")),
        );
        assert_eq!(d, Duration::hours(9));
    }

    #[test]
    fn exit_before_entry_is_floored() {
        let d = DailySession::worked_between(
            Some(at("2024-01-01 22:00:00")),
            Some(at("2024-01-01 06:00:00")),
        );
        assert_eq!(d, Duration::zero());
    }

    #[test]
    fn missing_endpoint_is_zero() {
        assert_eq!(
            DailySession::worked_between(Some(at("2024-01-01 09:00:00")), None),
            Duration::zero()
        );
        assert_eq!(
            DailySession::worked_between(None, Some(at("2024-01-01 18:00:00"))),
            Duration::zero()
        );
        assert_eq!(DailySession::worked_between(None, None), Duration::zero());
    }
}
