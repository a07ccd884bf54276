use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::calendar::{date, MonthGrid};

#[derive(Debug, Clone, Parser)]
#[clap(bin_name = env!("CARGO_PKG_NAME"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// Path to the configuration file
    #[clap(name = "config")]
    pub config: PathBuf,

    /// Date to treat as today (YYYY-MM-DD)
    #[clap(long, value_parser = date::parse_date)]
    pub today: Option<NaiveDate>,

    /// Increase log verbosity, may be repeated
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Month grid with the events of every day
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[clap(long, value_parser = parse_year_month)]
        month: Option<MonthGrid>,
    },
    /// Program of the current week
    Week,
    /// All events grouped by date
    List,
}

impl Default for Command {
    fn default() -> Self {
        Self::Month { month: None }
    }
}

fn parse_year_month(value: &str) -> Result<MonthGrid, String> {
    date::parse_date(&format!("{value}-01"))
        .ok()
        .and_then(MonthGrid::new)
        .ok_or_else(|| format!("Invalid month '{value}'. Expected YYYY-MM"))
}
