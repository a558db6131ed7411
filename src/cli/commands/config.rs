use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    if !*print_config && !*check && !*edit_config {
        info("Nothing to do: use --print, --check or --edit.");
        return Ok(());
    }

    if *print_config {
        let cfg = Config::load_from(path)?;
        info(format!("Current configuration ({}):", path.display()));
        println!("{}", cfg.to_yaml()?);
    }

    if *check {
        check_file(path)?;
    }

    if *edit_config {
        edit_file(path, editor.as_deref())?;
    }

    Ok(())
}

/// Report missing keys and invalid values without touching the file.
fn check_file(path: &Path) -> AppResult<()> {
    if !path.exists() {
        warning(format!(
            "No configuration file at {}; built-in defaults are in use.",
            path.display()
        ));
        return Ok(());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let missing = Config::missing_keys(&content)?;

    if missing.is_empty() {
        success("All configuration keys are present.");
    } else {
        warning(format!(
            "Missing keys (defaults will be used): {}",
            missing.join(", ")
        ));
    }

    Config::from_yaml(&content)?;
    success(format!("Configuration {} is valid.", path.display()));
    Ok(())
}

fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    if !path.exists() {
        Config::init_at(path, false)?;
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or(&default_editor);

    if run_editor(editor_to_use, path) {
        success(format!(
            "Configuration file edited successfully using '{editor_to_use}'"
        ));
        return Ok(());
    }

    if editor_to_use != default_editor {
        warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        ));
        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
            return Ok(());
        }
    }

    error(format!("Failed to edit configuration file using '{default_editor}'"));
    Err(AppError::Config(format!(
        "no usable editor for {}",
        path.display()
    )))
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
