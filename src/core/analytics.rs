//! Aggregate views over a selection of weekly summaries: KPIs, score bands,
//! per-user rankings and per-week trends.

use crate::models::weekly_summary::WeeklySummary;
use serde::Serialize;
use std::collections::BTreeMap;

/// Headline numbers for a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kpis {
    pub records: usize,
    pub total_hours: f64,
    pub total_target_hours: f64,
    pub avg_gap_percent: f64,
    pub avg_performance: f64,
    pub compliant: usize,
    pub compliance_rate: f64,
}

impl Kpis {
    pub fn compute(weeks: &[&WeeklySummary]) -> Self {
        if weeks.is_empty() {
            return Self::default();
        }

        let n = weeks.len() as f64;
        let compliant = weeks.iter().filter(|w| w.compliance.is_met()).count();

        Self {
            records: weeks.len(),
            total_hours: weeks.iter().map(|w| w.total_hours).sum(),
            total_target_hours: weeks.iter().map(|w| w.target_hours).sum(),
            avg_gap_percent: weeks.iter().map(|w| w.gap_percent).sum::<f64>() / n,
            avg_performance: weeks.iter().map(|w| w.performance_score).sum::<f64>() / n,
            compliant,
            compliance_rate: compliant as f64 / n * 100.0,
        }
    }

    /// Hours worked above (positive) or below (negative) the summed targets.
    pub fn hours_vs_target(&self) -> f64 {
        self.total_hours - self.total_target_hours
    }
}

// ── Performance bands ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PerformanceBand {
    Below80,
    From80To95,
    From95To100,
    Above100,
}

impl PerformanceBand {
    pub const ALL: [PerformanceBand; 4] = [
        PerformanceBand::Below80,
        PerformanceBand::From80To95,
        PerformanceBand::From95To100,
        PerformanceBand::Above100,
    ];

    /// Upper bounds are inclusive: 80.0 is `Below80`, 100.0 is `From95To100`.
    pub fn of(score: f64) -> Self {
        if score <= 80.0 {
            PerformanceBand::Below80
        } else if score <= 95.0 {
            PerformanceBand::From80To95
        } else if score <= 100.0 {
            PerformanceBand::From95To100
        } else {
            PerformanceBand::Above100
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceBand::Below80 => "Below 80%",
            PerformanceBand::From80To95 => "80-95%",
            PerformanceBand::From95To100 => "95-100%",
            PerformanceBand::Above100 => "Above 100%",
        }
    }
}

/// Record count per band, every band present, in band order.
pub fn band_distribution(weeks: &[&WeeklySummary]) -> Vec<(PerformanceBand, usize)> {
    PerformanceBand::ALL
        .iter()
        .map(|b| {
            let count = weeks
                .iter()
                .filter(|w| PerformanceBand::of(w.performance_score) == *b)
                .count();
            (*b, count)
        })
        .collect()
}

/// Number of weekly records per `days_worked` value, ascending.
pub fn days_worked_distribution(weeks: &[&WeeklySummary]) -> Vec<(u32, usize)> {
    let mut dist: BTreeMap<u32, usize> = BTreeMap::new();
    for w in weeks {
        *dist.entry(w.days_worked).or_default() += 1;
    }
    dist.into_iter().collect()
}

// ── Per-user ranking ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRanking {
    pub rank: usize,
    pub user: String,
    pub total_hours: f64,
    pub avg_performance: f64,
    pub avg_weekly_hours: f64,
    pub total_days: u32,
    pub total_gap_hours: f64,
    pub weeks: usize,
}

#[derive(Debug, Default)]
struct UserAcc {
    hours: f64,
    score: f64,
    days: u32,
    gap: f64,
    weeks: usize,
}

/// Users ordered by mean performance score (best first, ties by name).
pub fn user_rankings(weeks: &[&WeeklySummary]) -> Vec<UserRanking> {
    let mut by_user: BTreeMap<&str, UserAcc> = BTreeMap::new();

    for w in weeks {
        let acc = by_user.entry(w.user.as_str()).or_default();
        acc.hours += w.total_hours;
        acc.score += w.performance_score;
        acc.days += w.days_worked;
        acc.gap += w.gap_hours;
        acc.weeks += 1;
    }

    let mut rows: Vec<UserRanking> = by_user
        .into_iter()
        .map(|(user, a)| {
            let n = a.weeks as f64;
            UserRanking {
                rank: 0,
                user: user.to_string(),
                total_hours: a.hours,
                avg_performance: a.score / n,
                avg_weekly_hours: a.hours / n,
                total_days: a.days,
                total_gap_hours: a.gap,
                weeks: a.weeks,
            }
        })
        .collect();

    // BTreeMap order already sorted names; a stable sort keeps it for ties
    rows.sort_by(|a, b| b.avg_performance.total_cmp(&a.avg_performance));

    for (i, r) in rows.iter_mut().enumerate() {
        r.rank = i + 1;
    }

    rows
}

// ── Per-week trend ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTrend {
    pub iso_week_key: String,
    pub users: usize,
    pub avg_hours: f64,
    pub avg_performance: f64,
    pub avg_days: f64,
    pub total_gap_hours: f64,
}

/// One row per week key, ascending.
pub fn weekly_trend(weeks: &[&WeeklySummary]) -> Vec<WeekTrend> {
    let mut by_week: BTreeMap<&str, Vec<&WeeklySummary>> = BTreeMap::new();
    for w in weeks {
        by_week.entry(w.iso_week_key.as_str()).or_default().push(w);
    }

    by_week
        .into_iter()
        .map(|(key, ws)| {
            let n = ws.len() as f64;
            WeekTrend {
                iso_week_key: key.to_string(),
                users: ws.len(),
                avg_hours: ws.iter().map(|w| w.total_hours).sum::<f64>() / n,
                avg_performance: ws.iter().map(|w| w.performance_score).sum::<f64>() / n,
                avg_days: ws.iter().map(|w| w.days_worked as f64).sum::<f64>() / n,
                total_gap_hours: ws.iter().map(|w| w.gap_hours).sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekly_summary::WeeklyTarget;

    fn sample() -> Vec<WeeklySummary> {
        let t = WeeklyTarget::default();
        vec![
            WeeklySummary::scored("Alice", "2024-W01", 42.0, 5, t), // 105.0
            WeeklySummary::scored("Alice", "2024-W02", 38.0, 5, t), // 95.0
            WeeklySummary::scored("Bob", "2024-W01", 30.0, 4, t),   // 75.0
            WeeklySummary::scored("Carl", "2024-W02", 34.0, 4, t),  // 85.0
        ]
    }

    fn refs(v: &[WeeklySummary]) -> Vec<&WeeklySummary> {
        v.iter().collect()
    }

    #[test]
    fn kpis() {
        let v = sample();
        let k = Kpis::compute(&refs(&v));
        assert_eq!(k.records, 4);
        assert_eq!(k.total_hours, 144.0);
        assert_eq!(k.total_target_hours, 160.0);
        assert_eq!(k.hours_vs_target(), -16.0);
        assert_eq!(k.avg_performance, 90.0);
        assert!((k.avg_gap_percent - 10.0).abs() < 1e-9);
        assert_eq!(k.compliant, 1);
        assert_eq!(k.compliance_rate, 25.0);
    }

    #[test]
    fn kpis_of_nothing() {
        assert_eq!(Kpis::compute(&[]), Kpis::default());
    }

    #[test]
    fn bands_have_inclusive_upper_bounds() {
        assert_eq!(PerformanceBand::of(0.0), PerformanceBand::Below80);
        assert_eq!(PerformanceBand::of(80.0), PerformanceBand::Below80);
        assert_eq!(PerformanceBand::of(80.1), PerformanceBand::From80To95);
        assert_eq!(PerformanceBand::of(95.0), PerformanceBand::From80To95);
        assert_eq!(PerformanceBand::of(100.0), PerformanceBand::From95To100);
        assert_eq!(PerformanceBand::of(100.1), PerformanceBand::Above100);
    }

    #[test]
    fn band_counts() {
        let v = sample();
        let d = band_distribution(&refs(&v));
        let counts: Vec<usize> = d.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![1, 2, 0, 1]);
    }

    #[test]
    fn days_distribution() {
        let v = sample();
        assert_eq!(days_worked_distribution(&refs(&v)), vec![(4, 2), (5, 2)]);
    }

    #[test]
    fn rankings_best_first() {
        let v = sample();
        let r = user_rankings(&refs(&v));
        let order: Vec<(usize, &str)> = r.iter().map(|u| (u.rank, u.user.as_str())).collect();
        assert_eq!(order, vec![(1, "Alice"), (2, "Carl"), (3, "Bob")]);

        let alice = &r[0];
        assert_eq!(alice.total_hours, 80.0);
        assert_eq!(alice.avg_performance, 100.0);
        assert_eq!(alice.avg_weekly_hours, 40.0);
        assert_eq!(alice.total_days, 10);
        assert_eq!(alice.total_gap_hours, 0.0);
        assert_eq!(alice.weeks, 2);
    }

    #[test]
    fn ranking_ties_are_by_name() {
        let t = WeeklyTarget::default();
        let v = vec![
            WeeklySummary::scored("Zed", "2024-W01", 20.0, 3, t),
            WeeklySummary::scored("Amy", "2024-W01", 20.0, 3, t),
        ];
        let r = user_rankings(&refs(&v));
        assert_eq!(r[0].user, "Amy");
        assert_eq!(r[1].user, "Zed");
    }

    #[test]
    fn trend_per_week() {
        let v = sample();
        let t = weekly_trend(&refs(&v));
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].iso_week_key, "2024-W01");
        assert_eq!(t[0].users, 2);
        assert_eq!(t[0].avg_hours, 36.0);
        assert_eq!(t[0].avg_performance, 90.0);
        assert_eq!(t[0].avg_days, 4.5);
        assert_eq!(t[0].total_gap_hours, 8.0);
    }
}
