//! Command-line interface for ranking Japanese ski resorts by expected powder.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use japow_core::RegionFilter;
use serde::Serialize;

mod error;
mod fs;
mod rank;
mod resorts;

pub use error::CliError;

use rank::RankArgs;
use resorts::ResortsArgs;

const ARG_RANK_FORECASTS: &str = "forecasts";
const ARG_SNOW_WEIGHT: &str = "snow-weight";
const ARG_TEMPERATURE_WEIGHT: &str = "temperature-weight";
const ARG_WIND_WEIGHT: &str = "wind-weight";
const ARG_BLUEBIRD_WEIGHT: &str = "bluebird-weight";
const ARG_REGION: &str = "region";
const ENV_RANK_FORECASTS: &str = "JAPOW_CMDS_RANK_FORECASTS";

/// Run the Japow CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, when an
/// input cannot be read or parsed, or when writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => rank::run_rank_with(args, writer),
        Command::Resorts(args) => resorts::run_resorts_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "japow",
    about = "Rank Japanese ski resorts by expected powder",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank resort forecasts.
    Rank(RankArgs),
    /// List the built-in resort catalogue.
    Resorts(ResortsArgs),
}

fn parse_region(raw: Option<&str>) -> Result<RegionFilter, CliError> {
    raw.map_or(Ok(RegionFilter::All), |value| {
        value.parse().map_err(|reason| CliError::InvalidRegion {
            field: ARG_REGION,
            reason,
        })
    })
}

fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
