//! Powder scoring and ranking for Japow resort forecasts.
//!
//! The crate provides two cooperating pieces:
//! - **Day scoring** ([`score_day`]) turns one day's observation into a
//!   freshness-weighted contribution, adjusting raw snowfall for snow
//!   quality, visibility and wind, and raising descriptive tags.
//! - **Aggregation and ranking** ([`score_entity`], [`rank_entities`]) sums
//!   the day contributions of each resort into a rounded, non-negative score
//!   and orders resorts by it with a stable sort.
//!
//! Everything is pure and synchronous. Each day is scored against the day
//! before it *within the supplied sequence*: callers decide whether history
//! days take part, typically by scoring
//! [`ObservationSequence::forecast_window`].
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use japow_core::{DailyObservation, ObservationSequence, PreferenceWeights, Tag};
//! use japow_scorer::score_entity;
//!
//! # fn main() -> Result<(), japow_core::SequenceError> {
//! let date = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
//! let day = DailyObservation::new(date)
//!     .with_snowfall(20.0)
//!     .with_max_temperature(-6.0)
//!     .with_max_wind_speed(70.0);
//! let sequence = ObservationSequence::new(vec![day])?;
//!
//! let result = score_entity(&sequence, &PreferenceWeights::default());
//! assert_eq!(result.raw_score, 0);
//! assert!(result.has_tag(Tag::WindHoldRisk));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use japow_core::{
    ObservationSequence, PreferenceWeights, RankedResult, ResortForecast, ScoreResult, Scorer,
};

mod day;
mod freshness;
mod rank;

pub use day::{
    CLEAR_VISIBILITY_M, COLD_THRESHOLD_C, DayContext, DayOutcome, HOLD_THRESHOLD_KMH,
    KILL_THRESHOLD_KMH, POOR_VISIBILITY_M, SNOW_POINTS_PER_CM, STORM_SNOWFALL_CM,
    WARM_THRESHOLD_C, quality_multiplier, score_day,
};
pub use freshness::{STALE_FRESHNESS, freshness};
pub use rank::{rank_indexed, rank_with};

/// The preference-aware powder scorer.
///
/// Implements [`Scorer`] by delegating to [`score_entity`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PowderScorer;

impl Scorer for PowderScorer {
    fn score(&self, sequence: &ObservationSequence, weights: &PreferenceWeights) -> ScoreResult {
        score_entity(sequence, weights)
    }
}

/// Score each day of `sequence` and return the per-day outcomes.
///
/// The first day has no previous day; every other day is scored against
/// its predecessor in `sequence`.
#[must_use]
pub fn explain_entity(
    sequence: &ObservationSequence,
    weights: &PreferenceWeights,
) -> Vec<DayOutcome> {
    let multipliers = weights.multipliers();
    let days = sequence.days();
    let previous_days = std::iter::once(None).chain(days.iter().map(Some));
    days.iter()
        .zip(previous_days)
        .enumerate()
        .map(|(position, (day, previous))| {
            score_day(
                DayContext {
                    day,
                    previous,
                    position,
                },
                &multipliers,
            )
        })
        .collect()
}

/// Score a resort's sequence under `weights`.
///
/// The raw score is the rounded sum of every day's contribution plus every
/// kill-switch penalty, floored at zero. Tags are the union of the tags
/// raised by each day. An empty sequence scores `0` with no tags.
#[must_use]
pub fn score_entity(sequence: &ObservationSequence, weights: &PreferenceWeights) -> ScoreResult {
    let outcomes = explain_entity(sequence, weights);
    let total: f64 = outcomes.iter().map(DayOutcome::total).sum();
    ScoreResult {
        raw_score: round_score(total),
        tags: outcomes
            .into_iter()
            .flat_map(|outcome| outcome.tags)
            .collect(),
    }
}

/// Rank resorts by [`score_entity`] under shared `weights`.
///
/// See [`rank_with`] for the ordering rules.
#[must_use]
pub fn rank_entities(
    forecasts: &[ResortForecast],
    weights: &PreferenceWeights,
) -> Vec<RankedResult> {
    rank_with(&PowderScorer, forecasts, weights)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is rounded and floored at zero; `as` saturates above u32::MAX"
)]
fn round_score(total: f64) -> u32 {
    total.round().max(0.0) as u32
}

#[cfg(test)]
mod tests;
