use crate::config::Config;
use crate::core::calculator::{aggregate_daily, aggregate_weekly};
use crate::core::normalizer::{self, Schema};
use crate::errors::{AppError, AppResult};
use crate::models::{
    classified_event::ClassifiedEvent,
    daily_session::DailySession,
    raw_event::RawRow,
    weekly_summary::{WeeklySummary, WeeklyTarget},
};
use std::path::Path;
use tracing::info;

/// Everything one pipeline run needs, resolved from the configuration.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub schema: Schema,
    pub timestamp_formats: Vec<String>,
    pub target: WeeklyTarget,
}

impl PipelineSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;
        Ok(Self {
            schema: Schema::from_columns(&cfg.columns),
            timestamp_formats: cfg.timestamp_formats.clone(),
            target: cfg.target()?,
        })
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        let cfg = Config::default();
        Self {
            schema: Schema::from_columns(&cfg.columns),
            timestamp_formats: cfg.timestamp_formats,
            target: WeeklyTarget::default(),
        }
    }
}

/// Output of a successful run. Built in full, never updated in place.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub events: Vec<ClassifiedEvent>,
    pub sessions: Vec<DailySession>,
    pub weekly: Vec<WeeklySummary>,
    pub target: WeeklyTarget,
}

pub struct Core;

impl Core {
    /// normalize → daily → weekly.
    ///
    /// Fails with `EmptyResult` when no daily session survives.
    pub fn run_pipeline(rows: &[RawRow], settings: &PipelineSettings) -> AppResult<PipelineReport> {
        let events = normalizer::normalize_with_schema(rows, &settings.schema, &settings.timestamp_formats)?;
        let sessions = aggregate_daily(&events);

        if sessions.is_empty() {
            let reason = if rows.is_empty() {
                "the input has no rows".to_string()
            } else if events.is_empty() {
                format!("all {} rows fall on a weekend", rows.len())
            } else {
                "no event is marked 'In' or 'Out'".to_string()
            };
            return Err(AppError::EmptyResult(reason));
        }

        let weekly = aggregate_weekly(&sessions, settings.target);

        info!(
            rows = rows.len(),
            events = events.len(),
            sessions = sessions.len(),
            weeks = weekly.len(),
            "pipeline completed"
        );

        Ok(PipelineReport {
            events,
            sessions,
            weekly,
            target: settings.target,
        })
    }

    /// Read a CSV file and run the pipeline over it.
    pub fn run_file(path: &Path, settings: &PipelineSettings) -> AppResult<PipelineReport> {
        let rows = normalizer::read_rows_from_path(path, &settings.schema)?;
        Self::run_pipeline(&rows, settings)
    }
}
