#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A week of punches for two people plus a Saturday row and an unknown label.
pub const SAMPLE_LOG: &str = "\
Date/time,User,Where,Badge
2024-01-01 09:00:00,John Doe,Office In,17
2024-01-01 18:00:00,John Doe,Office Out,17
2024-01-02 08:30:00,Jane Roe,Main In,21
2024-01-02 12:00:00,Jane Roe,Canteen,21
2024-01-02 17:00:00,Jane Roe,Main Out,21
2024-01-03 08:00:00,Jane Roe,Main In,21
2024-01-03 16:30:00,Jane Roe,Main Out,21
2024-01-06 10:00:00,John Doe,Office In,17
2024-01-06 14:00:00,John Doe,Office Out,17
";

/// Binary under test, isolated from the user's own configuration file.
pub fn rat(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_path(name));
    cmd
}

/// Config path used by `rat(name)`; left untouched so fixtures survive.
pub fn config_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.conf", name));
    path.to_string_lossy().to_string()
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` as an input CSV and return its path.
pub fn write_log(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write fixture log");
    path
}

/// Write a YAML config next to the other fixtures and return its path.
pub fn write_config(name: &str, content: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, content).expect("write fixture config");
    path
}
