use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeFlow
#[derive(Parser)]
#[command(
    name = "timeflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal time tracker: clock in/out, daily and weekly summaries, breaks and reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or change the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,

        #[arg(
            long = "set-limit",
            value_name = "HOURS",
            help = "Set the daily work-hour limit"
        )]
        set_limit: Option<f64>,
    },

    /// Clock in (start a session)
    In {
        #[arg(long = "at", help = "Clock-in time (HH:MM, YYYY-MM-DD HH:MM or RFC 3339)")]
        at: Option<String>,
    },

    /// Clock out (end the open session)
    Out {
        #[arg(long = "at", help = "Clock-out time (HH:MM, YYYY-MM-DD HH:MM or RFC 3339)")]
        at: Option<String>,
    },

    /// Add a session manually, or close the open one
    Add {
        #[arg(long = "in", help = "Clock-in time")]
        clock_in: Option<String>,

        #[arg(long = "out", help = "Clock-out time")]
        clock_out: Option<String>,
    },

    /// Rewrite both timestamps of a closed session
    Edit {
        /// Entry id (or a unique prefix)
        id: String,

        #[arg(long = "in", help = "New clock-in time")]
        clock_in: String,

        #[arg(long = "out", help = "New clock-out time")]
        clock_out: String,
    },

    /// Delete a session, or every session with --all
    Del {
        /// Entry id (or a unique prefix)
        #[arg(required_unless_present = "all")]
        id: Option<String>,

        #[arg(long = "all", conflicts_with = "id", help = "Delete ALL entries")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List the sessions of one day
    List {
        #[arg(long, short, help = "Day to list (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Daily (or weekly) summary: work, breaks, first/last clock
    Summary {
        #[arg(long, short, help = "Day to summarize (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, short, help = "Summarize the whole week containing the day")]
        week: bool,
    },

    /// Today's worked time against the daily limit
    Status {
        #[arg(long = "no-alert", help = "Skip the forgotten clock-out check")]
        no_alert: bool,

        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Export the daily report
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short, help = "Day to export (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
