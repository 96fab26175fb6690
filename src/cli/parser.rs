use crate::export::{ExportFormat, ExportView};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBabyLog
#[derive(Parser)]
#[command(
    name = "rbabylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monthly/weekly buckets and nightly sleep statistics from baby CSV logs",
    long_about = None
)]
pub struct Cli {
    /// Dataset configuration document (default: ./config.yml)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Directory holding the CSV files (default: data/ next to the config)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Reference date for month/week buckets (YYYY-MM-DD, default 2021-05-15)
    #[arg(global = true, long = "birthday", value_name = "DATE")]
    pub birthday: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the configured datasets
    Datasets,

    /// Inspect the configuration document
    Config {
        #[arg(long = "print", help = "Print the configuration document")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Report recognized datasets missing from the document and unknown keys"
        )]
        check: bool,
    },

    /// Show the cleaned records of a dataset with month/week labels
    Show {
        /// Dataset name: pumped, nursed, nappies, formula, sleep, pump
        dataset: String,

        /// Print only the first N rows
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Per-minute asleep/awake timeline built from the sleep log
    Minutes {
        /// Print only the first N minutes
        #[arg(long, short)]
        limit: Option<usize>,
    },

    /// Hours of sleep per night (19:00 to 07:00)
    Nights,

    /// List sleep sessions ending at or after the next one starts
    Overlaps,

    /// Export a derived view as CSV or JSON
    Export {
        /// View to export
        #[arg(long, value_enum)]
        view: ExportView,

        /// Dataset for --view records
        #[arg(long)]
        dataset: Option<String>,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
