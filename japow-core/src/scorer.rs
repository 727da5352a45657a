//! Score a resort's observations against the user's preferences.
//!
//! The `Scorer` trait is the seam between the domain model and scoring
//! implementations, so rankings can be produced with any scoring strategy.

use crate::{ObservationSequence, PreferenceWeights, ScoreResult};

/// Calculate a powder score for one resort.
///
/// Implementations must be deterministic and free of side effects: the same
/// sequence and weights always yield the same result. They must be
/// thread-safe (`Send` + `Sync`) so callers may score resorts in parallel.
/// An empty sequence must score `0` with no tags.
///
/// # Examples
///
/// ```rust
/// use japow_core::{ObservationSequence, PreferenceWeights, ScoreResult, Scorer};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, sequence: &ObservationSequence, _: &PreferenceWeights) -> ScoreResult {
///         ScoreResult {
///             raw_score: u32::try_from(sequence.len()).unwrap_or(u32::MAX),
///             ..ScoreResult::empty()
///         }
///     }
/// }
///
/// let result = FlatScorer.score(&ObservationSequence::empty(), &PreferenceWeights::default());
/// assert_eq!(result, ScoreResult::empty());
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score and tags for `sequence` under `weights`.
    fn score(&self, sequence: &ObservationSequence, weights: &PreferenceWeights) -> ScoreResult;
}
