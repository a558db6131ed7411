use crate::core::filter::WeeklyFilter;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application turning attendance punch logs into weekly hours reports
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn attendance punch logs into daily sessions and weekly hours compliance reports",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Diagnostic log level (error, warn, info, debug, trace)
    #[arg(global = true, long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Override the weekly target hours for this run
    #[arg(global = true, long = "target", value_name = "HOURS")]
    pub target: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selection criteria shared by `report`, `daily` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "user", value_name = "USER", help = "Only this user (repeatable)")]
    pub users: Vec<String>,

    #[arg(
        long = "week",
        value_name = "YYYY-Www",
        help = "Only this ISO week, e.g. 2024-W01 (repeatable)"
    )]
    pub weeks: Vec<String>,

    #[arg(long = "min-score", value_name = "SCORE", help = "Minimum performance score")]
    pub min_score: Option<f64>,

    #[arg(long = "search", value_name = "TEXT", help = "Case-insensitive match on user name")]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> WeeklyFilter {
        WeeklyFilter {
            users: self.users.clone(),
            weeks: self.weeks.clone(),
            min_score: self.min_score,
            search: self.search.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Weekly summaries with KPIs and optional analytics
    Report {
        /// Attendance log (CSV)
        file: String,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Rank users by average performance score")]
        rankings: bool,

        #[arg(long, help = "Show per-week averages")]
        trend: bool,

        #[arg(long, help = "Show performance bands and days-worked distribution")]
        distribution: bool,
    },

    /// Daily sessions (first entry, last exit, worked time)
    Daily {
        /// Attendance log (CSV)
        file: String,

        #[arg(long = "user", value_name = "USER", help = "Only this user (repeatable)")]
        users: Vec<String>,

        #[arg(long = "week", value_name = "YYYY-Www", help = "Only this ISO week (repeatable)")]
        weeks: Vec<String>,
    },

    /// List the classified working-day events
    Events {
        /// Attendance log (CSV)
        file: String,

        #[arg(long, help = "Only events that are neither 'In' nor 'Out'")]
        unknown: bool,
    },

    /// Export weekly summaries (or daily sessions) to a file
    Export {
        /// Attendance log (CSV)
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'd', help = "Export daily sessions instead of weekly summaries")]
        daily: bool,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn report_filters_parse() {
        let cli = Cli::parse_from([
            "rattendance",
            "report",
            "log.csv",
            "--user",
            "Alice",
            "--user",
            "Bob",
            "--week",
            "2024-W01",
            "--min-score",
            "80",
            "--target",
            "37.5",
        ]);
        assert_eq!(cli.target, Some(37.5));
        let Commands::Report { file, filter, .. } = cli.command else {
            panic!("expected report");
        };
        assert_eq!(file, "log.csv");
        let f = filter.to_filter();
        assert_eq!(f.users, vec!["Alice", "Bob"]);
        assert_eq!(f.weeks, vec!["2024-W01"]);
        assert_eq!(f.min_score, Some(80.0));
        assert_eq!(f.search, None);
    }

    #[test]
    fn export_defaults_to_csv() {
        let cli = Cli::parse_from(["rattendance", "export", "log.csv", "--file", "out.csv"]);
        let Commands::Export { format, daily, force, .. } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(format, ExportFormat::Csv);
        assert!(!daily);
        assert!(!force);
    }
}
