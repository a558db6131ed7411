//! Fold daily sessions into one scored summary per (user, ISO week).

use crate::models::daily_session::DailySession;
use crate::models::weekly_summary::{WeeklySummary, WeeklyTarget};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Default)]
struct WeekTotals {
    seconds: i64,
    days_worked: u32,
}

/// Build weekly summaries, sorted by user then week key.
pub fn aggregate_weekly(sessions: &[DailySession], target: WeeklyTarget) -> Vec<WeeklySummary> {
    let mut weeks: BTreeMap<(&str, &str), WeekTotals> = BTreeMap::new();

    for s in sessions {
        let totals = weeks
            .entry((s.user.as_str(), s.iso_week_key.as_str()))
            .or_default();
        totals.seconds += s.worked_seconds();
        if s.is_worked() {
            totals.days_worked += 1;
        }
    }

    let summaries: Vec<WeeklySummary> = weeks
        .into_iter()
        .map(|((user, week), t)| {
            WeeklySummary::scored(
                user,
                week,
                t.seconds as f64 / 3600.0,
                t.days_worked,
                target,
            )
        })
        .collect();

    debug!(
        weeks = summaries.len(),
        target = target.hours(),
        "weekly summaries built"
    );
    summaries
}
