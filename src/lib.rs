//! Facade crate for the Japow powder ranking engine.
//!
//! This crate re-exports the domain model from `japow-core` and the scoring
//! and ranking functions from `japow-scorer`.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use japow_engine::{
//!     DailyObservation, ObservationSequence, PreferenceWeights, ResortForecast, rank_entities,
//! };
//!
//! # fn main() -> Result<(), japow_engine::SequenceError> {
//! let date = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
//! let naeba = DailyObservation::new(date).with_snowfall(4.0);
//! let niseko = DailyObservation::new(date).with_snowfall(25.0);
//! let forecasts = vec![
//!     ResortForecast::new("naeba", ObservationSequence::new(vec![naeba])?),
//!     ResortForecast::new("niseko", ObservationSequence::new(vec![niseko])?),
//! ];
//!
//! let ranking = rank_entities(&forecasts, &PreferenceWeights::default());
//! let best = ranking.first().map(|row| row.resort_id.as_str());
//! assert_eq!(best, Some("niseko"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use japow_core::{
    DEFAULT_VISIBILITY_M, DEFAULT_WEIGHT, DailyColumns, DailyObservation, HISTORY_DAYS, MAX_WEIGHT,
    ObservationError, ObservationSequence, PreferenceError, PreferenceField, PreferenceWeights,
    ProviderError, RankedResult, Region, RegionFilter, Resort, ResortForecast, ScoreResult, Scorer,
    SequenceError, SnowHistory, SnowfallBand, Tag, Weight, WeightMultipliers, WeightOutOfRange,
    catalogue, find_resort,
};

pub use japow_scorer::{
    DayContext, DayOutcome, PowderScorer, explain_entity, freshness, quality_multiplier,
    rank_entities, rank_indexed, rank_with, score_day, score_entity,
};
