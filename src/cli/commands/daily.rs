use super::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::{Selection, WeeklyFilter};
use crate::errors::AppResult;
use crate::models::daily_session::DailySession;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};

const NO_TIME: &str = "--:--:--";

/// Handle the `daily` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Daily { file, users, weeks } = cmd else {
        return Ok(());
    };

    let report = load_report(file, cfg)?;
    let filter = WeeklyFilter {
        users: users.clone(),
        weeks: weeks.clone(),
        ..WeeklyFilter::default()
    };

    let Selection::Matched(sessions) = filter.apply_daily(&report.sessions) else {
        warning("No matching records for the selected filters.");
        return Ok(());
    };

    header("Daily sessions", cfg.separator());
    println!("{}", session_table(&sessions, cfg.separator()).render());

    let incomplete = sessions.iter().filter(|s| !s.is_worked()).count();
    if incomplete > 0 {
        info(format!(
            "{incomplete} session(s) without a usable entry/exit pair count as 0:00:00"
        ));
    }

    Ok(())
}

fn session_table(sessions: &[&DailySession], sep: char) -> Table {
    let mut table = Table::new(vec![
        Column::left("User"),
        Column::left("Date"),
        Column::left("Week"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Worked"),
    ])
    .with_separator(sep);

    for s in sessions {
        let time = |t: Option<chrono::NaiveDateTime>| {
            t.map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| NO_TIME.to_string())
        };

        table.add_row(vec![
            s.user.clone(),
            s.date_str(),
            s.iso_week_key.clone(),
            colorize_in_out(&time(s.entry_time), true),
            colorize_in_out(&time(s.exit_time), false),
            colorize_optional(&secs2readable(s.worked_seconds())),
        ]);
    }

    table
}
