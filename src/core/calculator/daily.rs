//! Fold classified events into one session per (user, date).

use crate::models::classified_event::ClassifiedEvent;
use crate::models::daily_session::DailySession;
use crate::models::direction::Direction;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::debug;

/// Earliest entry and latest exit seen so far for one (user, date).
#[derive(Debug, Default)]
struct DayPunches<'a> {
    entry: Option<NaiveDateTime>,
    exit: Option<NaiveDateTime>,
    iso_week_key: &'a str,
    month_label: &'a str,
}

impl<'a> DayPunches<'a> {
    fn add(&mut self, ev: &'a ClassifiedEvent) {
        self.iso_week_key = &ev.iso_week_key;
        self.month_label = &ev.month_label;

        match ev.direction {
            Direction::Entry => {
                self.entry = Some(self.entry.map_or(ev.timestamp, |t| t.min(ev.timestamp)));
            }
            Direction::Exit => {
                self.exit = Some(self.exit.map_or(ev.timestamp, |t| t.max(ev.timestamp)));
            }
            Direction::Unknown => {}
        }
    }
}

/// Build daily sessions, sorted by user then date.
///
/// Unknown-direction events take no part: a day with only unknown punches
/// produces no session.
pub fn aggregate_daily(events: &[ClassifiedEvent]) -> Vec<DailySession> {
    let mut days: BTreeMap<(&str, NaiveDate), DayPunches> = BTreeMap::new();

    for ev in events.iter().filter(|e| e.direction.is_known()) {
        days.entry((ev.user.as_str(), ev.date))
            .or_default()
            .add(ev);
    }

    let sessions: Vec<DailySession> = days
        .into_iter()
        .map(|((user, date), p)| DailySession {
            user: user.to_string(),
            date,
            entry_time: p.entry,
            exit_time: p.exit,
            worked_duration: DailySession::worked_between(p.entry, p.exit),
            iso_week_key: p.iso_week_key.to_string(),
            month_label: p.month_label.to_string(),
        })
        .collect();

    debug!(sessions = sessions.len(), "daily sessions built");
    sessions
}
