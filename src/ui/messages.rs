//! User-facing status lines. Diagnostics go through `tracing` instead.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

/// Honour https://no-color.org
fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn render(level: Level, msg: &dyn fmt::Display, color: bool) -> String {
    let (fg, icon) = level.style();
    if color {
        format!("{fg}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let line = render(level, msg, use_color());
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Section header drawn with the configured separator character.
pub fn header<T: fmt::Display>(msg: T, separator: char) {
    let title = msg.to_string();
    let rule = separator.to_string().repeat(title.chars().count().max(20));
    if use_color() {
        println!("\n{FG_BLUE}{BOLD}{title}{RESET}\n{rule}");
    } else {
        println!("\n{title}\n{rule}");
    }
}
