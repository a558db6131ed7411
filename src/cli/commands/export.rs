use super::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest, ExportTarget};
use crate::utils::path::expand_tilde;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        daily,
        filter,
        force,
    } = cmd
    {
        let report = load_report(input, cfg)?;
        let request = ExportRequest {
            format: *format,
            path: expand_tilde(file),
            target: if *daily {
                ExportTarget::Daily
            } else {
                ExportTarget::Weekly
            },
            filter: filter.to_filter(),
            force: *force,
        };
        ExportLogic::export(&report, &request)?;
    }
    Ok(())
}
