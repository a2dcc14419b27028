//! Main CLI application structure

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

use super::output::{Output, OutputFormat};
use super::{calendar, feed_cmd, store_cmd};
use crate::logging;
use crate::storage::Workspace;

#[derive(Parser)]
#[command(name = "litcal")]
#[command(author, version, about = "Liturgical calendar of the Roman rite")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured one)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the yearly event files
    #[arg(long, global = true, env = "LITCAL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "LITCAL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import an ICS feed and store it by year
    Import {
        /// Path to the .ics file
        file: PathBuf,

        /// Store the feed as is, without synthesized weekdays
        #[arg(long)]
        no_augment: bool,
    },

    /// Print the normalized events of an ICS feed without storing them
    Normalize {
        /// Path to the .ics file
        file: PathBuf,
    },

    /// List stored years
    Years,

    /// Show the season and week of every day of a year
    Map {
        /// Civil year
        year: i32,
    },

    /// Show the events of a month with the lectionary cycles in effect
    Month {
        /// Month as YYYY-MM
        month: YearMonth,
    },

    /// Show the context and events of a single day
    Day {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
    },

    /// Add synthesized weekdays to a stored year and save it
    Augment {
        /// Civil year
        year: i32,
    },

    /// Delete all stored years
    Clear,
}

/// A calendar month given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid month '{}': expected YYYY-MM", s);

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let workspace = Workspace::open(cli.config.as_deref(), cli.data_dir.as_deref())?;
    let format = cli
        .format
        .unwrap_or_else(|| workspace.config().default_format.into());
    let output = Output::new(format);

    debug!(data_dir = %workspace.data_dir().display(), "litcal starting");

    match cli.command {
        Commands::Import { file, no_augment } => {
            feed_cmd::import(&workspace, &output, &file, !no_augment)?
        }
        Commands::Normalize { file } => feed_cmd::normalize(&workspace, &output, &file)?,
        Commands::Years => store_cmd::years(&workspace, &output)?,
        Commands::Map { year } => calendar::map(&workspace, &output, year)?,
        Commands::Month { month } => calendar::month(&workspace, &output, month)?,
        Commands::Day { date } => calendar::day(&workspace, &output, date)?,
        Commands::Augment { year } => calendar::augment(&workspace, &output, year)?,
        Commands::Clear => store_cmd::clear(&workspace, &output)?,
    }

    Ok(())
}
