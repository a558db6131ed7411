// src/export/model.rs

use crate::models::daily_session::DailySession;
use crate::models::weekly_summary::WeeklySummary;
use crate::utils::formatting::secs2readable;
use serde::Serialize;

/// A flat record every exporter knows how to write.
pub trait TabularRecord: Serialize {
    /// Header row for CSV / XLSX / PDF, in field order.
    fn headers() -> Vec<&'static str>;

    /// Cell values as text, same order as `headers()`.
    fn to_row(&self) -> Vec<String>;
}

/// Flat weekly summary. Field names are the export header.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeeklyExport {
    pub user: String,
    pub iso_week_key: String,
    pub total_hours: f64,
    pub days_worked: u32,
    pub target_hours: f64,
    pub gap_hours: f64,
    pub gap_percent: f64,
    pub performance_score: f64,
    pub compliance: String,
}

impl From<&WeeklySummary> for WeeklyExport {
    fn from(w: &WeeklySummary) -> Self {
        Self {
            user: w.user.clone(),
            iso_week_key: w.iso_week_key.clone(),
            total_hours: w.total_hours,
            days_worked: w.days_worked,
            target_hours: w.target_hours,
            gap_hours: w.gap_hours,
            gap_percent: w.gap_percent,
            performance_score: w.performance_score,
            compliance: w.compliance.label().to_string(),
        }
    }
}

impl TabularRecord for WeeklyExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "user",
            "iso_week_key",
            "total_hours",
            "days_worked",
            "target_hours",
            "gap_hours",
            "gap_percent",
            "performance_score",
            "compliance",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.iso_week_key.clone(),
            format!("{:.2}", self.total_hours),
            self.days_worked.to_string(),
            format!("{:.1}", self.target_hours),
            format!("{:.2}", self.gap_hours),
            format!("{:.2}", self.gap_percent),
            format!("{:.1}", self.performance_score),
            self.compliance.clone(),
        ]
    }
}

/// Flat daily session.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyExport {
    pub user: String,
    pub date: String,
    pub iso_week_key: String,
    pub month: String,
    pub entry_time: String,
    pub exit_time: String,
    pub worked: String,
    pub worked_hours: f64,
}

impl From<&DailySession> for DailyExport {
    fn from(s: &DailySession) -> Self {
        let fmt = |t: Option<chrono::NaiveDateTime>| {
            t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        };

        Self {
            user: s.user.clone(),
            date: s.date_str(),
            iso_week_key: s.iso_week_key.clone(),
            month: s.month_label.clone(),
            entry_time: fmt(s.entry_time),
            exit_time: fmt(s.exit_time),
            worked: secs2readable(s.worked_seconds()),
            worked_hours: s.worked_hours(),
        }
    }
}

impl TabularRecord for DailyExport {
    fn headers() -> Vec<&'static str> {
        vec![
            "user",
            "date",
            "iso_week_key",
            "month",
            "entry_time",
            "exit_time",
            "worked",
            "worked_hours",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.user.clone(),
            self.date.clone(),
            self.iso_week_key.clone(),
            self.month.clone(),
            self.entry_time.clone(),
            self.exit_time.clone(),
            self.worked.clone(),
            format!("{:.2}", self.worked_hours),
        ]
    }
}

/// Convert records in una tabella di stringhe (per PDF).
pub(crate) fn records_to_table<T: TabularRecord>(records: &[T]) -> Vec<Vec<String>> {
    records.iter().map(TabularRecord::to_row).collect()
}
