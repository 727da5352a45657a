//! Order resorts by powder score.

use std::cmp::Reverse;

use japow_core::{PreferenceWeights, RankedResult, ResortForecast, ScoreResult, Scorer};

/// Score every forecast with `scorer` and rank them, best first.
///
/// Resorts are ordered by descending `raw_score`. The sort is stable, so
/// equal scores keep their input order, and ranks are ordinal positions
/// (`1..=n`) rather than competition ranks. Nothing is filtered or
/// truncated.
#[must_use]
pub fn rank_with<S>(
    scorer: &S,
    forecasts: &[ResortForecast],
    weights: &PreferenceWeights,
) -> Vec<RankedResult>
where
    S: Scorer + ?Sized,
{
    rank_indexed(scorer, forecasts, weights)
        .into_iter()
        .map(|(_, ranked)| ranked)
        .collect()
}

/// Rank like [`rank_with`], pairing each result with its forecast's index
/// in `forecasts`.
///
/// Resort identifiers need not be unique, so the index is the only reliable
/// way to join a ranked row back to data the caller keeps per forecast.
#[must_use]
pub fn rank_indexed<S>(
    scorer: &S,
    forecasts: &[ResortForecast],
    weights: &PreferenceWeights,
) -> Vec<(usize, RankedResult)>
where
    S: Scorer + ?Sized,
{
    let mut scored: Vec<(usize, &ResortForecast, ScoreResult)> = forecasts
        .iter()
        .enumerate()
        .map(|(index, forecast)| (index, forecast, scorer.score(&forecast.sequence, weights)))
        .collect();
    scored.sort_by_key(|(_, _, result)| Reverse(result.raw_score));

    log::debug!("ranked {} resorts", scored.len());
    scored
        .into_iter()
        .zip(1_usize..)
        .map(|((index, forecast, result), rank)| {
            let ranked = RankedResult {
                resort_id: forecast.resort_id.clone(),
                raw_score: result.raw_score,
                tags: result.tags,
                rank,
            };
            (index, ranked)
        })
        .collect()
}
