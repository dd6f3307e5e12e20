use crate::export::ExportFormat;
use crate::models::AttendanceStatus;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to mark daily attendance in a CSV ledger
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: mark students once per day, report on the ledger and mail absence notices",
    long_about = None
)]
pub struct Cli {
    /// Override ledger path (useful for tests or a second class)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the ledger and the journal
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

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

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the journal")]
        print: bool,
    },

    /// Mark a student present (once per day)
    Mark {
        /// Student identifier
        student_id: String,

        /// Display name
        name: String,

        #[arg(long, help = "Attendance date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Time of day (HH:MM[:SS], default now)")]
        time: Option<String>,

        #[arg(
            long,
            value_name = "REF",
            conflicts_with = "photo",
            help = "Image reference stored as-is"
        )]
        image: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Photo file copied into the images directory"
        )]
        photo: Option<String>,
    },

    /// List attendance records
    List {
        #[arg(long, short, help = "Show a single date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's records")]
        now: bool,
    },

    /// Records per day, in date order
    Stats,

    /// Send attendance notices by email
    Notify {
        #[arg(long, value_name = "ADDR", requires_all = ["name", "status"], conflicts_with = "roster")]
        to: Option<String>,

        #[arg(long, help = "Student name used in the greeting")]
        name: Option<String>,

        #[arg(long, value_enum)]
        status: Option<AttendanceStatus>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Roster CSV (StudentID, Name, Email): mail everyone absent on --date"
        )]
        roster: Option<String>,

        #[arg(long, requires = "roster", help = "Date checked with --roster (default today)")]
        date: Option<String>,
    },

    /// Create a backup copy of the ledger
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export attendance records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Fill missing student ids from a name mapping (legacy ledgers)
    Rekey {
        #[arg(long = "map", value_name = "FILE", help = "CSV with Name and StudentID columns")]
        map: String,
    },

    /// Check the ledger layout and report duplicate keys
    Check,
}
