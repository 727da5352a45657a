//! Error types emitted by the Japow CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use japow_core::{PreferenceError, ProviderError};
use thiserror::Error;

/// Errors emitted by the Japow CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required positional argument is missing after configuration merging.
    #[error("missing {field} (pass it as the positional path argument or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A preference weight was out of range.
    #[error(transparent)]
    InvalidPreferences(#[from] PreferenceError),
    /// The region filter named no known region.
    #[error("invalid --{field} value: {reason}")]
    InvalidRegion {
        /// Option that carried the region.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Opening the forecast file failed.
    #[error("failed to open forecasts at {path:?}: {source}")]
    OpenForecasts {
        /// Path of the forecast file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Forecast JSON could not be decoded.
    #[error("failed to parse forecast JSON at {path:?}: {source}")]
    ParseForecasts {
        /// Path of the forecast file.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// One resort's daily columns did not form a valid sequence.
    #[error("forecast for {resort_id} in {path:?} is invalid: {source}")]
    InvalidForecast {
        /// Path of the forecast file.
        path: Utf8PathBuf,
        /// Resort whose payload was rejected.
        resort_id: String,
        /// Why the payload was rejected.
        #[source]
        source: Box<ProviderError>,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
