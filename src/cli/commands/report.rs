use super::load_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{self, Kpis};
use crate::core::filter::Selection;
use crate::errors::AppResult;
use crate::models::weekly_summary::WeeklySummary;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_gap, color_for_score, colorize, GREEN, RED};
use crate::utils::date::week_bounds;
use crate::utils::formatting::{bold, hours2readable, percent};
use crate::utils::secs2readable;
use crate::utils::table::{Column, Table};

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        file,
        filter,
        rankings,
        trend,
        distribution,
    } = cmd
    else {
        return Ok(());
    };

    let report = load_report(file, cfg)?;
    let sep = cfg.separator();

    let selection = filter.to_filter().apply(&report.weekly);
    let Selection::Matched(weeks) = &selection else {
        warning("No matching records for the selected filters.");
        return Ok(());
    };

    header(
        format!("Weekly attendance report (target {}h)", report.target.hours()),
        sep,
    );
    print_kpis(&Kpis::compute(weeks));
    println!("{}", weekly_table(weeks, sep).render());

    if *rankings {
        header("User ranking", sep);
        println!("{}", ranking_table(weeks, sep).render());
    }

    if *trend {
        header("Weekly trend", sep);
        println!("{}", trend_table(weeks, sep).render());
    }

    if *distribution {
        header("Performance distribution", sep);
        println!("{}", band_table(weeks, sep).render());
        header("Days worked per week", sep);
        println!("{}", days_table(weeks, sep).render());
    }

    Ok(())
}

fn print_kpis(k: &Kpis) {
    info(format!(
        "{} {}   {} {}   {} {}",
        bold("Total hours:"),
        hours2readable(k.total_hours, false),
        bold("Target:"),
        hours2readable(k.total_target_hours, false),
        bold("Delta:"),
        colorize(
            &hours2readable(k.hours_vs_target(), true),
            color_for_gap(-k.hours_vs_target())
        ),
    ));
    info(format!(
        "{} {}   {} {}   {} {}/{} ({})",
        bold("Avg performance:"),
        colorize(&percent(k.avg_performance), color_for_score(k.avg_performance)),
        bold("Avg gap:"),
        percent(k.avg_gap_percent),
        bold("Compliant weeks:"),
        k.compliant,
        k.records,
        percent(k.compliance_rate),
    ));
}

fn weekly_table(weeks: &[&WeeklySummary], sep: char) -> Table {
    let mut table = Table::new(vec![
        Column::left("User"),
        Column::left("Week"),
        Column::right("Worked"),
        Column::right("Hours"),
        Column::right("Days"),
        Column::right("Target"),
        Column::right("Gap"),
        Column::right("Gap %"),
        Column::right("Score"),
        Column::left("Compliance"),
    ])
    .with_separator(sep);

    for w in weeks {
        let compliance = if w.compliance.is_met() {
            colorize(w.compliance.label(), GREEN)
        } else {
            colorize(w.compliance.label(), RED)
        };

        table.add_row(vec![
            w.user.clone(),
            w.iso_week_key.clone(),
            secs2readable(w.total_seconds()),
            format!("{:.1}", w.total_hours),
            w.days_worked.to_string(),
            format!("{:.1}", w.target_hours),
            colorize(&format!("{:.1}", w.gap_hours), color_for_gap(w.gap_hours)),
            format!("{:.1}", w.gap_percent),
            colorize(
                &format!("{:.1}", w.performance_score),
                color_for_score(w.performance_score),
            ),
            compliance,
        ]);
    }

    table
}

fn ranking_table(weeks: &[&WeeklySummary], sep: char) -> Table {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("User"),
        Column::right("Weeks"),
        Column::right("Hours"),
        Column::right("Avg/week"),
        Column::right("Days"),
        Column::right("Gap"),
        Column::right("Avg score"),
    ])
    .with_separator(sep);

    for r in analytics::user_rankings(weeks) {
        table.add_row(vec![
            r.rank.to_string(),
            r.user,
            r.weeks.to_string(),
            format!("{:.1}", r.total_hours),
            format!("{:.1}", r.avg_weekly_hours),
            r.total_days.to_string(),
            format!("{:.1}", r.total_gap_hours),
            colorize(
                &format!("{:.1}", r.avg_performance),
                color_for_score(r.avg_performance),
            ),
        ]);
    }

    table
}

fn trend_table(weeks: &[&WeeklySummary], sep: char) -> Table {
    let mut table = Table::new(vec![
        Column::left("Week"),
        Column::left("From"),
        Column::left("To"),
        Column::right("Users"),
        Column::right("Avg hours"),
        Column::right("Avg days"),
        Column::right("Total gap"),
        Column::right("Avg score"),
    ])
    .with_separator(sep);

    for t in analytics::weekly_trend(weeks) {
        let (from, to) = week_bounds(&t.iso_week_key)
            .map(|(m, f)| (m.to_string(), f.to_string()))
            .unwrap_or_default();

        table.add_row(vec![
            t.iso_week_key,
            from,
            to,
            t.users.to_string(),
            format!("{:.1}", t.avg_hours),
            format!("{:.1}", t.avg_days),
            format!("{:.1}", t.total_gap_hours),
            colorize(
                &format!("{:.1}", t.avg_performance),
                color_for_score(t.avg_performance),
            ),
        ]);
    }

    table
}

fn band_table(weeks: &[&WeeklySummary], sep: char) -> Table {
    let mut table =
        Table::new(vec![Column::left("Band"), Column::right("Weeks")]).with_separator(sep);
    for (band, count) in analytics::band_distribution(weeks) {
        table.add_row(vec![band.label().to_string(), count.to_string()]);
    }
    table
}

fn days_table(weeks: &[&WeeklySummary], sep: char) -> Table {
    let mut table =
        Table::new(vec![Column::right("Days"), Column::right("Weeks")]).with_separator(sep);
    for (days, count) in analytics::days_worked_distribution(weeks) {
        table.add_row(vec![days.to_string(), count.to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weekly_summary::WeeklyTarget;

    #[test]
    fn weekly_table_shows_readable_duration_and_label() {
        let w = WeeklySummary::scored("John Doe", "2024-W01", 9.0, 1, WeeklyTarget::default());
        let out = weekly_table(&[&w], '-').render();
        assert!(out.contains("John Doe"));
        assert!(out.contains("9:00:00"));
        assert!(out.contains("22.5"));
        assert!(out.contains("Below Target"));
    }

    #[test]
    fn trend_table_includes_week_range() {
        let w = WeeklySummary::scored("A", "2024-W01", 40.0, 5, WeeklyTarget::default());
        let out = trend_table(&[&w], '=').render();
        assert!(out.contains("2024-01-01"));
        assert!(out.contains("2024-01-07"));
    }
}
