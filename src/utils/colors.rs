/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Score color:
/// \>=100 → green
/// \>=80 → yellow
/// below → red
pub fn color_for_score(score: f64) -> &'static str {
    if score >= 100.0 {
        GREEN
    } else if score >= 80.0 {
        YELLOW
    } else {
        RED
    }
}

/// Gap color: surplus (negative gap) is green, missing hours red.
pub fn color_for_gap(gap_hours: f64) -> &'static str {
    if gap_hours < 0.0 {
        GREEN
    } else if gap_hours > 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out placeholders such as `--:--:--` or `0:00:00`.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--:--" || v == "0:00:00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--:--" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
