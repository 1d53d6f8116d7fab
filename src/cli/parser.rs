use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for piyostats
/// CLI application turning piyolog exports into daily statistics stored in SQLite
#[derive(Parser)]
#[command(
    name = "piyostats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate piyolog exports into daily feeding and stool statistics using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Read exported logs and store one statistics row per day
    Ingest {
        /// Export shape: 'monthly' (many days per file) or 'daily' (one day per file)
        dialect: String,

        #[arg(
            long = "dir",
            value_name = "DIR",
            help = "Directory containing the .txt exports (default: <data_dir>/<dialect>)"
        )]
        dir: Option<String>,

        #[arg(
            long = "birth-date",
            value_name = "YYYY-MM-DD",
            help = "Birth date used for month-age buckets (overrides config and BABY_BIRTH_DATE)"
        )]
        birth_date: Option<String>,

        #[arg(long = "dry-run", help = "Print the daily rows without writing them")]
        dry_run: bool,
    },

    /// List stored daily statistics
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2024-03, 2024-03:2024-05, all)"
        )]
        period: Option<String>,
    },

    /// Export stored daily statistics
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

        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
    },
}
