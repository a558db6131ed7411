use crate::errors::{AppError, AppResult};
use crate::models::weekly_summary::WeeklyTarget;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Names of the three required input columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnNames {
    #[serde(default = "default_timestamp_column")]
    pub timestamp: String,
    #[serde(default = "default_user_column")]
    pub user: String,
    #[serde(default = "default_location_column")]
    pub location: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp_column(),
            user: default_user_column(),
            location: default_location_column(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_hours")]
    pub target_weekly_hours: f64,
    #[serde(default)]
    pub columns: ColumnNames,
    #[serde(default = "default_timestamp_formats")]
    pub timestamp_formats: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_target_hours() -> f64 {
    WeeklyTarget::DEFAULT_HOURS
}
fn default_timestamp_column() -> String {
    "Date/time".to_string()
}
fn default_user_column() -> String {
    "User".to_string()
}
fn default_location_column() -> String {
    "Where".to_string()
}
fn default_timestamp_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d %H:%M:%S".to_string(),
        "%Y-%m-%d %H:%M".to_string(),
        "%Y-%m-%dT%H:%M:%S".to_string(),
        "%Y-%m-%dT%H:%M".to_string(),
    ]
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

/// Top-level keys every configuration file is expected to carry.
const CONFIG_KEYS: [&str; 5] = [
    "target_weekly_hours",
    "columns",
    "timestamp_formats",
    "log_level",
    "separator_char",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            target_weekly_hours: default_target_hours(),
            columns: ColumnNames::default(),
            timestamp_formats: default_timestamp_formats(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from the default location, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file is a valid, all-defaults configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        self.target()?;

        let cols = &self.columns;
        if [&cols.timestamp, &cols.user, &cols.location]
            .iter()
            .any(|c| c.trim().is_empty())
        {
            return Err(AppError::Config("column names must not be empty".into()));
        }

        if self.timestamp_formats.is_empty() {
            return Err(AppError::Config(
                "at least one timestamp format is required".into(),
            ));
        }

        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }

        Ok(())
    }

    pub fn target(&self) -> AppResult<WeeklyTarget> {
        WeeklyTarget::new(self.target_weekly_hours).ok_or_else(|| {
            AppError::Config(format!(
                "target_weekly_hours must be a positive number, got {}",
                self.target_weekly_hours
            ))
        })
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Top-level keys absent from a YAML configuration document.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value = serde_yaml::from_str(content)?;
        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init_at(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
