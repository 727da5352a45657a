//! Inputs and outputs exchanged with the scoring crates.

use std::collections::BTreeSet;

use crate::{ObservationSequence, Tag};

/// One resort's observations, as handed over by the weather provider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResortForecast {
    /// Resort identifier, usually a catalogue id such as `"niseko"`.
    pub resort_id: String,
    /// Observations to score.
    pub sequence: ObservationSequence,
}

impl ResortForecast {
    /// Pair a resort identifier with its observations.
    #[must_use]
    pub fn new(resort_id: impl Into<String>, sequence: ObservationSequence) -> Self {
        Self {
            resort_id: resort_id.into(),
            sequence,
        }
    }
}

/// Score and tags computed for a single resort.
///
/// # Examples
/// ```
/// use japow_core::ScoreResult;
///
/// let result = ScoreResult::empty();
/// assert_eq!(result.raw_score, 0);
/// assert!(result.tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Rounded, non-negative powder score.
    pub raw_score: u32,
    /// Union of tags raised across all scored days.
    pub tags: BTreeSet<Tag>,
}

impl ScoreResult {
    /// The result for a resort with nothing to score.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            raw_score: 0,
            tags: BTreeSet::new(),
        }
    }

    /// Report whether `tag` was raised.
    #[must_use]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// A resort's place in a ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// Resort identifier copied from the input.
    pub resort_id: String,
    /// Rounded, non-negative powder score.
    pub raw_score: u32,
    /// Union of tags raised across all scored days.
    pub tags: BTreeSet<Tag>,
    /// 1-based position in the ranking; ties keep input order.
    pub rank: usize,
}
