use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Import bank notifications logged by notimon into a markdown cash book.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(flatten)]
    pub config: ConfigArgs,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Read settings from this file instead of looking for a .env file
    #[clap(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Cash book directory, overrides CASH_BOOK_PATH
    #[clap(long, global = true)]
    pub cash_book_path: Option<PathBuf>,

    /// Notimon log directory, overrides NOTIMON_LOG_PATH
    #[clap(long, global = true)]
    pub notimon_log_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Import notifications logged since the marker date (default)
    Import {
        /// Only report the documents that would be written
        #[clap(long)]
        dry_run: bool,
    },

    /// Show the marker date and the log files the next import would read
    Status,

    /// Set the marker date. The next import reads logs from this day on
    Mark {
        /// Date in YYYY-MM-DD format
        date: NaiveDate,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Import { dry_run: false }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
