use clap::Parser;

use planner::calendar::{build_current_week, date, MonthGrid};
use planner::cli::{Cli, Command};
use planner::logger::{self, LogExt as _};
use planner::{config, view};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = config::init(&cli.config).log_error("Could not load the configuration file")?;
    let today = cli.today.unwrap_or_else(date::today);
    let max_events_per_day = config.display.max_events_per_day;
    let store = config.into_store(today);

    let mut out = String::new();

    match cli.command.unwrap_or_default() {
        Command::Month { month } => {
            let grid = match month {
                Some(grid) => grid,
                None => MonthGrid::new(today).log_error(&format!("No month grid around {today}"))?,
            };

            view::month(&mut out, &grid, &store, today, max_events_per_day)?;
        }
        Command::Week => {
            let program = build_current_week(today, &store).log_error(&format!("No full week around {today}"))?;

            view::week(&mut out, &program, today)?;
        }
        Command::List => view::list(&mut out, &store)?,
    }

    print!("{out}");

    Ok(())
}
