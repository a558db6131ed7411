//! Pure selection over pipeline output. Nothing is recomputed.

use crate::models::daily_session::DailySession;
use crate::models::weekly_summary::WeeklySummary;

/// User / week / score criteria. Empty lists mean "everything".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyFilter {
    pub users: Vec<String>,
    pub weeks: Vec<String>,
    pub min_score: Option<f64>,
    pub search: Option<String>,
}

/// Result of applying a filter. An empty selection is an outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a, T> {
    Matched(Vec<&'a T>),
    NoMatchingRecords,
}

impl<'a, T> Selection<'a, T> {
    fn from_vec(items: Vec<&'a T>) -> Self {
        if items.is_empty() {
            Selection::NoMatchingRecords
        } else {
            Selection::Matched(items)
        }
    }

    pub fn records(&self) -> &[&'a T] {
        match self {
            Selection::Matched(items) => items,
            Selection::NoMatchingRecords => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::NoMatchingRecords)
    }
}

impl WeeklyFilter {
    fn matches_user(&self, user: &str) -> bool {
        let listed = self.users.is_empty() || self.users.iter().any(|u| u == user);
        let searched = match &self.search {
            Some(term) if !term.is_empty() => {
                user.to_lowercase().contains(&term.to_lowercase())
            }
            _ => true,
        };
        listed && searched
    }

    fn matches_week(&self, week: &str) -> bool {
        self.weeks.is_empty() || self.weeks.iter().any(|w| w == week)
    }

    pub fn matches(&self, w: &WeeklySummary) -> bool {
        self.matches_user(&w.user)
            && self.matches_week(&w.iso_week_key)
            && self.min_score.is_none_or(|min| w.performance_score >= min)
    }

    pub fn apply<'a>(&self, weekly: &'a [WeeklySummary]) -> Selection<'a, WeeklySummary> {
        Selection::from_vec(weekly.iter().filter(|w| self.matches(w)).collect())
    }

    /// Daily sessions have no score; only user, search and week apply.
    pub fn apply_daily<'a>(&self, sessions: &'a [DailySession]) -> Selection<'a, DailySession> {
        Selection::from_vec(
            sessions
                .iter()
                .filter(|s| self.matches_user(&s.user) && self.matches_week(&s.iso_week_key))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekly_summary::WeeklyTarget;

    fn weeks() -> Vec<WeeklySummary> {
        let t = WeeklyTarget::default();
        vec![
            WeeklySummary::scored("Alice Smith", "2024-W01", 41.0, 5, t),
            WeeklySummary::scored("Alice Smith", "2024-W02", 30.0, 4, t),
            WeeklySummary::scored("Bob Jones", "2024-W01", 20.0, 3, t),
        ]
    }

    #[test]
    fn empty_filter_selects_all() {
        let w = weeks();
        assert_eq!(WeeklyFilter::default().apply(&w).records().len(), 3);
    }

    #[test]
    fn by_user_and_week() {
        let w = weeks();
        let f = WeeklyFilter {
            users: vec!["Alice Smith".into()],
            weeks: vec!["2024-W02".into()],
            ..Default::default()
        };
        let sel = f.apply(&w);
        assert_eq!(sel.records().len(), 1);
        assert_eq!(sel.records()[0].performance_score, 75.0);
    }

    #[test]
    fn min_score_threshold_is_inclusive() {
        let w = weeks();
        let f = WeeklyFilter {
            min_score: Some(75.0),
            ..Default::default()
        };
        let users: Vec<&str> = f.apply(&w).records().iter().map(|s| s.user.as_str()).collect();
        assert_eq!(users, vec!["Alice Smith", "Alice Smith"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let w = weeks();
        let f = WeeklyFilter {
            search: Some("JONES".into()),
            ..Default::default()
        };
        assert_eq!(f.apply(&w).records()[0].user, "Bob Jones");
    }

    #[test]
    fn no_match_is_a_distinct_outcome() {
        let w = weeks();
        let f = WeeklyFilter {
            users: vec!["Nobody".into()],
            ..Default::default()
        };
        assert_eq!(f.apply(&w), Selection::NoMatchingRecords);
        assert!(f.apply(&w).is_empty());
    }

    #[test]
    fn filtering_does_not_change_records() {
        let w = weeks();
        let f = WeeklyFilter {
            weeks: vec!["2024-W01".into()],
            ..Default::default()
        };
        for s in f.apply(&w).records() {
            assert!(w.contains(*s));
        }
    }
}
