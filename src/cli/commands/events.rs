use super::load_events;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::classified_event::ClassifiedEvent;
use crate::models::direction::Direction;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize, GREEN, GREY, RED};
use crate::utils::table::{Column, Table};

/// Handle the `events` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Events { file, unknown } = cmd else {
        return Ok(());
    };

    let all = load_events(file, cfg)?;
    let events: Vec<&ClassifiedEvent> = all
        .iter()
        .filter(|e| !*unknown || !e.direction.is_known())
        .collect();

    if events.is_empty() {
        info("No events to show.");
        return Ok(());
    }

    header(format!("Events ({})", events.len()), cfg.separator());
    println!("{}", event_table(&events, cfg.separator()).render());
    Ok(())
}

fn event_table(events: &[&ClassifiedEvent], sep: char) -> Table {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Day"),
        Column::left("Time"),
        Column::left("User"),
        Column::left("Where"),
        Column::left("Direction"),
        Column::left("Week"),
    ])
    .with_separator(sep);

    for e in events {
        let color = match e.direction {
            Direction::Entry => GREEN,
            Direction::Exit => RED,
            Direction::Unknown => GREY,
        };

        table.add_row(vec![
            e.date_str(),
            e.weekday_name.clone(),
            e.time_str(),
            e.user.clone(),
            e.location_label.clone(),
            colorize(e.direction.as_str(), color),
            e.iso_week_key.clone(),
        ]);
    }

    table
}
