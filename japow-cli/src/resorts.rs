//! Resort listing command.

use std::io::Write;

use clap::Parser;
use japow_core::{RegionFilter, Resort};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_REGION, CliError, parse_region, write_json};

/// CLI arguments for the `resorts` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the catalogued resorts")]
#[ortho_config(prefix = "JAPOW")]
pub(crate) struct ResortsArgs {
    /// Only list resorts in this region ("all" for every region).
    #[arg(long = ARG_REGION, value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
}

impl ResortsArgs {
    fn into_filter(self) -> Result<RegionFilter, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        parse_region(merged.region.as_deref())
    }
}

/// Catalogue entries passing `filter`, in catalogue order.
pub(crate) fn list_resorts(filter: RegionFilter) -> Vec<&'static Resort> {
    filter.resorts().collect()
}

pub(crate) fn run_resorts_with(args: ResortsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let filter = args.into_filter()?;
    write_json(writer, &list_resorts(filter))
}
