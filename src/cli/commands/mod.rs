pub mod config;
pub mod daily;
pub mod events;
pub mod export;
pub mod init;
pub mod report;

use crate::config::Config;
use crate::core::logic::{Core, PipelineReport, PipelineSettings};
use crate::core::normalizer;
use crate::errors::AppResult;
use crate::models::classified_event::ClassifiedEvent;
use crate::utils::path::expand_tilde;
use tracing::debug;

/// Run the full pipeline over `file` with the active configuration.
pub(crate) fn load_report(file: &str, cfg: &Config) -> AppResult<PipelineReport> {
    let settings = PipelineSettings::from_config(cfg)?;
    let path = expand_tilde(file);
    debug!(path = %path.display(), target = settings.target.hours(), "running pipeline");
    Core::run_file(&path, &settings)
}

/// Read and normalize `file` without aggregating, so days with no
/// In/Out punch are still visible.
pub(crate) fn load_events(file: &str, cfg: &Config) -> AppResult<Vec<ClassifiedEvent>> {
    let settings = PipelineSettings::from_config(cfg)?;
    let path = expand_tilde(file);
    debug!(path = %path.display(), "normalizing events");
    let rows = normalizer::read_rows_from_path(&path, &settings.schema)?;
    normalizer::normalize_with_schema(&rows, &settings.schema, &settings.timestamp_formats)
}
