use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration to `path`. An existing file is kept
/// unless `force` is set.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    info("Initializing rAttendance…");
    info(format!("Config file : {}", path.display()));

    if Config::init_at(path, force)? {
        success(format!("Configuration written to {}", path.display()));
    } else {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    Ok(())
}
