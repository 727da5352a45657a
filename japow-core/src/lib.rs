//! Core domain types for the Japow powder ranking engine.
//!
//! The weather provider hands the engine ordered daily observations per
//! resort; the presentation layer hands it preference weights. Both are
//! validated here, at construction or deserialisation time, so the scoring
//! crates can treat them as well-formed and stay infallible.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod observation;
pub mod preferences;
pub mod provider;
pub mod resort;
pub mod result;
pub mod scorer;
pub mod tag;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use observation::{
    DEFAULT_VISIBILITY_M, DailyObservation, HISTORY_DAYS, ObservationError, ObservationSequence,
    SequenceError, SnowHistory, SnowfallBand,
};
pub use preferences::{
    DEFAULT_WEIGHT, MAX_WEIGHT, PreferenceError, PreferenceField, PreferenceWeights, Weight,
    WeightMultipliers, WeightOutOfRange,
};
pub use provider::{DailyColumns, ProviderError};
pub use resort::{Region, RegionFilter, Resort, catalogue, find_resort};
pub use result::{RankedResult, ResortForecast, ScoreResult};
pub use scorer::Scorer;
pub use tag::Tag;
