//! Rank command implementation for the Japow CLI.

use std::collections::BTreeSet;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use japow_core::{
    DEFAULT_WEIGHT, DailyColumns, DailyObservation, PreferenceWeights, RankedResult, Region,
    RegionFilter, ResortForecast, SnowHistory, SnowfallBand, Tag, find_resort,
};
use japow_scorer::{PowderScorer, rank_indexed};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_BLUEBIRD_WEIGHT, ARG_RANK_FORECASTS, ARG_REGION, ARG_SNOW_WEIGHT, ARG_TEMPERATURE_WEIGHT,
    ARG_WIND_WEIGHT, CliError, ENV_RANK_FORECASTS, parse_region, write_json,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score each resort's forecast window against your \
                 preferences and print the resorts best first. Forecasts \
                 are read from a JSON array of {resort_id, daily} entries \
                 where `daily` holds the provider's column-oriented \
                 readings, the first two days being history.",
    about = "Rank resorts by expected powder"
)]
#[ortho_config(prefix = "JAPOW")]
pub(crate) struct RankArgs {
    /// Path to a JSON file of resort forecasts.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) forecasts: Option<Utf8PathBuf>,
    /// Importance of fresh snowfall (0-10).
    #[arg(long = ARG_SNOW_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) snow_weight: Option<u8>,
    /// Importance of cold, dry snow (0-10).
    #[arg(long = ARG_TEMPERATURE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) temperature_weight: Option<u8>,
    /// Sensitivity to wind holds (0-10).
    #[arg(long = ARG_WIND_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) wind_weight: Option<u8>,
    /// Importance of clear skies after a storm (0-10).
    #[arg(long = ARG_BLUEBIRD_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) bluebird_weight: Option<u8>,
    /// Only rank resorts in this region ("all" for every region).
    #[arg(long = ARG_REGION, value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Score the history days as well as the forecast window.
    #[arg(long)]
    #[serde(default)]
    pub(crate) include_history: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the JSON forecast file.
    pub(crate) forecasts: Utf8PathBuf,
    /// Validated preference weights.
    pub(crate) weights: PreferenceWeights,
    /// Region restriction.
    pub(crate) region: RegionFilter,
    /// Whether history days are scored.
    pub(crate) include_history: bool,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.forecasts, ARG_RANK_FORECASTS)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let forecasts = args.forecasts.ok_or(CliError::MissingArgument {
            field: ARG_RANK_FORECASTS,
            env: ENV_RANK_FORECASTS,
        })?;
        let weights = PreferenceWeights::new(
            args.snow_weight.unwrap_or(DEFAULT_WEIGHT),
            args.temperature_weight.unwrap_or(DEFAULT_WEIGHT),
            args.wind_weight.unwrap_or(DEFAULT_WEIGHT),
            args.bluebird_weight.unwrap_or(DEFAULT_WEIGHT),
        )?;
        let region = parse_region(args.region.as_deref())?;
        Ok(Self {
            forecasts,
            weights,
            region,
            include_history: args.include_history,
        })
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// One resort's entry in the forecast file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastEntry {
    pub(crate) resort_id: String,
    pub(crate) daily: DailyColumns,
}

/// A ranked resort as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RankedRow {
    pub(crate) rank: usize,
    pub(crate) resort_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) region: Option<Region>,
    pub(crate) raw_score: u32,
    pub(crate) tags: BTreeSet<Tag>,
    pub(crate) past_24h_cm: f64,
    pub(crate) past_48h_cm: f64,
    /// Snowfall band of each scored day, in date order.
    pub(crate) snowfall_bands: Vec<SnowfallBand>,
}

impl RankedRow {
    fn new(result: RankedResult, details: EntryDetails) -> Self {
        let resort = find_resort(&result.resort_id);
        Self {
            rank: result.rank,
            name: resort.map(|entry| entry.name),
            region: resort.map(|entry| entry.region),
            resort_id: result.resort_id,
            raw_score: result.raw_score,
            tags: result.tags,
            past_24h_cm: details.history.past_24h_cm,
            past_48h_cm: details.history.past_48h_cm,
            snowfall_bands: details.snowfall_bands,
        }
    }
}

/// Per-entry output data that the scorer does not carry.
#[derive(Debug, Clone, Default)]
struct EntryDetails {
    history: SnowHistory,
    snowfall_bands: Vec<SnowfallBand>,
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let rows = execute_rank(&config)?;
    write_json(writer, &rows)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load, score and rank the forecasts named by `config`.
///
/// Entries are joined to their ranked results by position, so a resort id
/// that appears more than once keeps each entry's own history.
pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<RankedRow>, CliError> {
    let entries = load_forecasts(&config.forecasts)?;
    let mut details = Vec::with_capacity(entries.len());
    let mut forecasts = Vec::with_capacity(entries.len());

    for entry in entries {
        if !config.region.matches_id(&entry.resort_id) {
            log::debug!("skipping {} outside the requested region", entry.resort_id);
            continue;
        }
        if find_resort(&entry.resort_id).is_none() {
            log::warn!("{} is not in the resort catalogue", entry.resort_id);
        }
        let sequence = entry
            .daily
            .into_sequence()
            .map_err(|source| CliError::InvalidForecast {
                path: config.forecasts.clone(),
                resort_id: entry.resort_id.clone(),
                source: Box::new(source),
            })?;
        let history = sequence.snow_history();
        let scored = if config.include_history {
            sequence
        } else {
            sequence.forecast_window()
        };
        details.push(EntryDetails {
            history,
            snowfall_bands: scored
                .days()
                .iter()
                .map(DailyObservation::snowfall_band)
                .collect(),
        });
        forecasts.push(ResortForecast::new(entry.resort_id, scored));
    }

    let ranked = rank_indexed(&PowderScorer, &forecasts, &config.weights);
    Ok(ranked
        .into_iter()
        .map(|(index, result)| {
            let entry = details.get_mut(index).map(std::mem::take).unwrap_or_default();
            RankedRow::new(result, entry)
        })
        .collect())
}

/// Loads the JSON forecast file from disk.
pub(crate) fn load_forecasts(path: &Utf8Path) -> Result<Vec<ForecastEntry>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenForecasts {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseForecasts {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
