use serde::Serialize;

/// Whether a week reached the target hours.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Compliance {
    Met,
    BelowTarget,
}

impl Compliance {
    /// Derived from the rounded score so that `Met` and `score >= 100`
    /// can never disagree.
    pub fn from_score(performance_score: f64) -> Self {
        if performance_score >= 100.0 {
            Compliance::Met
        } else {
            Compliance::BelowTarget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Compliance::Met => "Met",
            Compliance::BelowTarget => "Below Target",
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, Compliance::Met)
    }
}

/// Weekly hours target used to score a week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyTarget(f64);

impl WeeklyTarget {
    pub const DEFAULT_HOURS: f64 = 40.0;

    /// Returns `None` for non-finite or non-positive values.
    pub fn new(hours: f64) -> Option<Self> {
        (hours.is_finite() && hours > 0.0).then_some(Self(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for WeeklyTarget {
    fn default() -> Self {
        Self(Self::DEFAULT_HOURS)
    }
}

/// One user's worked hours for one ISO week, scored against the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub user: String,
    pub iso_week_key: String,
    pub total_hours: f64,
    pub days_worked: u32,
    pub target_hours: f64,
    pub gap_hours: f64,
    pub gap_percent: f64,
    pub performance_score: f64,
    pub compliance: Compliance,
}

impl WeeklySummary {
    /// Compute every derived metric from `total_hours` and the target.
    pub fn scored(
        user: impl Into<String>,
        iso_week_key: impl Into<String>,
        total_hours: f64,
        days_worked: u32,
        target: WeeklyTarget,
    ) -> Self {
        let target_hours = target.hours();
        let gap_hours = target_hours - total_hours;
        let gap_percent = gap_hours / target_hours * 100.0;
        let performance_score = round1(total_hours / target_hours * 100.0);

        Self {
            user: user.into(),
            iso_week_key: iso_week_key.into(),
            total_hours,
            days_worked,
            target_hours,
            gap_hours,
            gap_percent,
            performance_score,
            compliance: Compliance::from_score(performance_score),
        }
    }

    pub fn total_seconds(&self) -> i64 {
        (self.total_hours * 3600.0).round() as i64
    }
}

/// Round to one decimal place, halves to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_hour_week() {
        let w = WeeklySummary::scored("John Doe", "2024-W01", 9.0, 1, WeeklyTarget::default());
        assert_eq!(w.target_hours, 40.0);
        assert_eq!(w.gap_hours, 31.0);
        assert_eq!(w.gap_percent, 77.5);
        assert_eq!(w.performance_score, 22.5);
        assert_eq!(w.compliance, Compliance::BelowTarget);
    }

    #[test]
    fn exact_target_is_met() {
        let w = WeeklySummary::scored("A", "2024-W02", 40.0, 5, WeeklyTarget::default());
        assert_eq!(w.performance_score, 100.0);
        assert_eq!(w.compliance, Compliance::Met);
        assert_eq!(w.gap_hours, 0.0);
    }

    #[test]
    fn compliance_follows_rounded_score() {
        // 39.99h rounds to a 100.0 score
        let w = WeeklySummary::scored("A", "2024-W02", 39.99, 5, WeeklyTarget::default());
        assert_eq!(w.performance_score, 100.0);
        assert!(w.compliance.is_met());

        let w = WeeklySummary::scored("A", "2024-W02", 39.8, 5, WeeklyTarget::default());
        assert_eq!(w.performance_score, 99.5);
        assert!(!w.compliance.is_met());
    }

    #[test]
    fn custom_target() {
        let target = WeeklyTarget::new(20.0).unwrap();
        let w = WeeklySummary::scored("A", "2024-W02", 30.0, 4, target);
        assert_eq!(w.performance_score, 150.0);
        assert_eq!(w.gap_hours, -10.0);
        assert_eq!(w.gap_percent, -50.0);
        assert!(w.compliance.is_met());
    }

    #[test]
    fn rounding_halves_go_to_even() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(-0.25), -0.2);
        assert_eq!(round1(22.5), 22.5);

        // 1h of 16h is exactly 6.25%
        let w = WeeklySummary::scored("A", "2024-W02", 1.0, 1, WeeklyTarget::new(16.0).unwrap());
        assert_eq!(w.performance_score, 6.2);
    }

    #[test]
    fn rejects_bad_targets() {
        assert!(WeeklyTarget::new(0.0).is_none());
        assert!(WeeklyTarget::new(-5.0).is_none());
        assert!(WeeklyTarget::new(f64::NAN).is_none());
        assert!(WeeklyTarget::new(f64::INFINITY).is_none());
    }
}
