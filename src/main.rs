use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use log::warn;

use depreciation_tracker::{
    app::{App, AssetRegister, utils::parse_datetime},
    config::Config,
    logger::{LogTarget, setup_logger},
    models::ReportFilter,
};

#[derive(Debug, Parser)]
#[command(version, about = "Track asset depreciation from an asset register")]
struct Cli {
    /// Asset register CSV file (overrides DEPRECIATION_REGISTER)
    #[arg(long, global = true)]
    register: Option<String>,

    /// Evaluation date, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the depreciation report as a plain-text table
    Report {
        #[arg(long)]
        category: Option<String>,

        /// Only assets acquired on or after this date
        #[arg(long)]
        acquired_from: Option<String>,

        /// Only assets acquired on or before this date
        #[arg(long)]
        acquired_to: Option<String>,
    },
    /// Browse the depreciation report interactively
    Tui,
}

fn parse_optional_date(field: Option<&str>, flag: &str) -> Result<Option<DateTime<Local>>> {
    field
        .map(|value| parse_datetime(value).with_context(|| format!("Invalid --{}", flag)))
        .transpose()
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_register_path(cli.register.as_deref())?;
    let as_of = parse_optional_date(cli.as_of.as_deref(), "as-of")?.unwrap_or_else(Local::now);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Report {
            category,
            acquired_from,
            acquired_to,
        } => {
            setup_logger(*config.log_level(), LogTarget::Stderr)?;

            let filter = ReportFilter::new(
                category,
                parse_optional_date(acquired_from.as_deref(), "acquired-from")?,
                parse_optional_date(acquired_to.as_deref(), "acquired-to")?,
            );

            let mut register = AssetRegister::new();
            register.import_assets(config.register_path())?;

            let report = register.report(&as_of, &filter);
            print!("{}", report.to_text_table());
        }
        Command::Tui => {
            setup_logger(*config.log_level(), LogTarget::File(config.log_file()))?;

            let mut register = AssetRegister::new();
            if let Err(e) = register.import_assets(config.register_path()) {
                warn!("Starting with an empty register: {:?}", e);
            }

            let mut app = App::new(register, config.register_path().clone(), as_of);
            app.run()?;
        }
    }

    Ok(())
}
