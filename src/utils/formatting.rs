//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Seconds as `H:MM:SS`, hours unbounded (e.g. `41:30:00`).
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{}{}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

/// Decimal hours with one decimal and an optional sign, e.g. `+2.5h`.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    if want_sign && hours > 0.0 {
        format!("+{:.1}h", hours)
    } else {
        format!("{:.1}h", hours)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
