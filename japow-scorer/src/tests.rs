//! Unit coverage for day scoring, aggregation and ranking.
#![forbid(unsafe_code)]

use japow_core::test_support::{date, nth_day, sequence_from, sequence_of, snow_day};
use japow_core::{
    DailyObservation, ObservationSequence, PreferenceWeights, ResortForecast, ScoreResult, Scorer,
    Tag, Weight,
};
use rstest::{fixture, rstest};

use crate::{PowderScorer, explain_entity, rank_entities, rank_indexed, rank_with, score_entity};

#[fixture]
fn defaults() -> PreferenceWeights {
    PreferenceWeights::default()
}

fn weight(value: u8) -> Weight {
    Weight::new(value).expect("weight in range")
}

fn single(day: DailyObservation) -> ObservationSequence {
    sequence_of(vec![day])
}

fn powder_day() -> DailyObservation {
    DailyObservation::new(date(2025, 1, 10))
        .with_snowfall(20.0)
        .with_max_temperature(-6.0)
        .with_max_wind_speed(10.0)
        .with_min_visibility(10_000.0)
}

#[rstest]
fn empty_sequence_scores_zero(defaults: PreferenceWeights) {
    let result = score_entity(&ObservationSequence::empty(), &defaults);
    assert_eq!(result, ScoreResult::empty());
}

#[rstest]
fn cold_powder_day_scores_seventy_two(defaults: PreferenceWeights) {
    let result = score_entity(&single(powder_day()), &defaults);
    assert_eq!(result.raw_score, 72);
    assert!(result.tags.is_empty());
}

#[rstest]
fn wind_kill_switch_zeroes_day_and_penalises(defaults: PreferenceWeights) {
    let result = score_entity(&single(powder_day().with_max_wind_speed(70.0)), &defaults);
    assert_eq!(result.raw_score, 0);
    assert!(result.has_tag(Tag::WindHoldRisk));
}

#[rstest]
#[case::default_weight(5, 9)]
#[case::strong_preference(10, 6)]
#[case::weak_preference(0, 18)]
fn warm_snow_is_penalised(#[case] temperature: u8, #[case] expected: u32) {
    let weights = PreferenceWeights::default().with_temperature(weight(temperature));
    let day = snow_day(date(2025, 1, 10), 10.0).with_max_temperature(5.0);
    assert_eq!(score_entity(&single(day), &weights).raw_score, expected);
}

#[rstest]
#[case::boundary_warm(2.0, 30)]
#[case::boundary_cold(-4.0, 30)]
#[case::just_colder(-4.5, 36)]
fn neutral_band_is_inclusive(#[case] max_temperature: f64, #[case] expected: u32) {
    let day = snow_day(date(2025, 1, 10), 10.0).with_max_temperature(max_temperature);
    assert_eq!(
        score_entity(&single(day), &PreferenceWeights::default()).raw_score,
        expected
    );
}

#[rstest]
fn cold_bonus_grows_with_temperature_preference() {
    let weights = PreferenceWeights::default().with_temperature(weight(10));
    let result = score_entity(&single(powder_day()), &weights);
    assert_eq!(result.raw_score, 108);
}

#[rstest]
fn snow_preference_scales_base_contribution() {
    let weights = PreferenceWeights::default().with_snow(weight(0));
    let day = snow_day(date(2025, 1, 10), 10.0);
    assert_eq!(score_entity(&single(day), &weights).raw_score, 15);
}

#[rstest]
fn bluebird_follows_a_storm(defaults: PreferenceWeights) {
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 15.0),
        snow_day(nth_day(start, 1), 10.0).with_min_visibility(8_000.0),
    ]);
    let result = score_entity(&sequence, &defaults);
    assert_eq!(result.raw_score, 90);
    assert!(result.has_tag(Tag::BluebirdPotential));
}

#[rstest]
fn bluebird_bonus_scales_with_preference() {
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 15.0),
        snow_day(nth_day(start, 1), 10.0).with_min_visibility(8_000.0),
    ]);
    let weights = PreferenceWeights::default().with_bluebird(weight(10));
    assert_eq!(score_entity(&sequence, &weights).raw_score, 45 + 68);
}

#[rstest]
fn bluebird_never_fires_on_first_day(defaults: PreferenceWeights) {
    let day = snow_day(date(2025, 1, 10), 20.0).with_min_visibility(9_000.0);
    let result = score_entity(&single(day), &defaults);
    assert!(!result.has_tag(Tag::BluebirdPotential));
    assert_eq!(result.raw_score, 60);
}

#[rstest]
fn bluebird_needs_the_immediately_preceding_day(defaults: PreferenceWeights) {
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 25.0),
        snow_day(nth_day(start, 1), 0.0),
        snow_day(nth_day(start, 2), 10.0).with_min_visibility(9_000.0),
    ]);
    let result = score_entity(&sequence, &defaults);
    assert!(!result.has_tag(Tag::BluebirdPotential));
}

#[rstest]
fn bluebird_needs_more_than_ten_centimetres(defaults: PreferenceWeights) {
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 10.0),
        snow_day(nth_day(start, 1), 10.0).with_min_visibility(9_000.0),
    ]);
    assert!(!score_entity(&sequence, &defaults).has_tag(Tag::BluebirdPotential));
}

#[rstest]
fn fog_subtracts_flat_penalty(defaults: PreferenceWeights) {
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 10.0),
        snow_day(nth_day(start, 1), 5.0).with_min_visibility(300.0),
    ]);
    assert_eq!(score_entity(&sequence, &defaults).raw_score, 35);
}

#[rstest]
fn foggy_day_can_go_negative_before_flooring(defaults: PreferenceWeights) {
    let day = snow_day(date(2025, 1, 10), 0.0).with_min_visibility(100.0);
    let outcomes = explain_entity(&single(day.clone()), &defaults);
    let contribution = outcomes.first().map(|outcome| outcome.contribution);
    assert_eq!(contribution, Some(-10.0));
    assert_eq!(score_entity(&single(day), &defaults).raw_score, 0);
}

#[rstest]
fn storming_low_visibility_is_mildly_penalised(defaults: PreferenceWeights) {
    let day = snow_day(date(2025, 1, 10), 20.0).with_min_visibility(300.0);
    assert_eq!(score_entity(&single(day), &defaults).raw_score, 54);
}

#[rstest]
#[case::default_sensitivity(5, 15)]
#[case::high_sensitivity(10, 11)]
#[case::low_sensitivity(0, 21)]
fn hold_range_decays_with_wind(#[case] wind: u8, #[case] expected: u32) {
    let weights = PreferenceWeights::default().with_wind(weight(wind));
    let day = snow_day(date(2025, 1, 10), 10.0).with_max_wind_speed(45.0);
    assert_eq!(score_entity(&single(day), &weights).raw_score, expected);
}

#[rstest]
fn wind_at_kill_threshold_zeroes_without_penalty(defaults: PreferenceWeights) {
    let day = snow_day(date(2025, 1, 10), 10.0).with_max_wind_speed(60.0);
    let outcomes = explain_entity(&single(day), &defaults);
    let outcome = outcomes.first().expect("one outcome");
    assert_eq!(outcome.contribution, 0.0);
    assert_eq!(outcome.penalty, 0.0);
    assert!(outcome.tags.is_empty());
}

#[rstest]
#[case::default_sensitivity(5, 40)]
#[case::high_sensitivity(10, 30)]
fn kill_penalty_reduces_resort_total(#[case] wind: u8, #[case] expected: u32) {
    let weights = PreferenceWeights::default().with_wind(weight(wind));
    let start = date(2025, 1, 10);
    let sequence = sequence_of(vec![
        snow_day(start, 20.0),
        snow_day(nth_day(start, 1), 30.0).with_max_wind_speed(75.0),
    ]);
    let result = score_entity(&sequence, &weights);
    assert_eq!(result.raw_score, expected);
    assert!(result.has_tag(Tag::WindHoldRisk));
}

#[rstest]
fn kill_penalty_ignores_freshness(defaults: PreferenceWeights) {
    let start = date(2025, 1, 10);
    let mut days: Vec<DailyObservation> = (0..6)
        .map(|offset| snow_day(nth_day(start, offset), 0.0))
        .collect();
    if let Some(first) = days.first_mut() {
        first.snowfall_cm = 30.0;
    }
    if let Some(last) = days.last_mut() {
        last.max_wind_speed_kmh = 80.0;
    }
    let result = score_entity(&sequence_of(days), &defaults);
    assert_eq!(result.raw_score, 70);
}

#[rstest]
fn zero_snow_day_still_raises_wind_tag(defaults: PreferenceWeights) {
    let day = snow_day(date(2025, 1, 10), 0.0).with_max_wind_speed(65.0);
    assert!(score_entity(&single(day), &defaults).has_tag(Tag::WindHoldRisk));
}

#[rstest]
fn freshness_discounts_later_days(defaults: PreferenceWeights) {
    let sequence = sequence_from(date(2025, 1, 10), &[10.0; 8]);
    assert_eq!(score_entity(&sequence, &defaults).raw_score, 165);
}

#[rstest]
fn explain_reports_one_outcome_per_day(defaults: PreferenceWeights) {
    let sequence = sequence_from(date(2025, 1, 10), &[1.0, 2.0, 3.0]);
    let dates: Vec<_> = explain_entity(&sequence, &defaults)
        .into_iter()
        .map(|outcome| outcome.date)
        .collect();
    assert_eq!(
        dates,
        vec![date(2025, 1, 10), date(2025, 1, 11), date(2025, 1, 12)]
    );
}

fn forecast(id: &str, snowfall: &[f64]) -> ResortForecast {
    ResortForecast::new(id, sequence_from(date(2025, 1, 10), snowfall))
}

#[rstest]
fn ranks_by_descending_score(defaults: PreferenceWeights) {
    let forecasts = vec![
        forecast("naeba", &[5.0]),
        forecast("niseko", &[30.0]),
        forecast("hakuba", &[12.0]),
    ];
    let ranking = rank_entities(&forecasts, &defaults);
    let order: Vec<(&str, usize)> = ranking
        .iter()
        .map(|row| (row.resort_id.as_str(), row.rank))
        .collect();
    assert_eq!(order, vec![("niseko", 1), ("hakuba", 2), ("naeba", 3)]);
}

#[rstest]
fn ties_keep_input_order_with_distinct_ranks(defaults: PreferenceWeights) {
    let forecasts = vec![
        forecast("kagura", &[10.0]),
        forecast("furano", &[20.0]),
        forecast("tambara", &[10.0]),
    ];
    let ranking = rank_entities(&forecasts, &defaults);
    let order: Vec<(&str, u32, usize)> = ranking
        .iter()
        .map(|row| (row.resort_id.as_str(), row.raw_score, row.rank))
        .collect();
    assert_eq!(
        order,
        vec![("furano", 60, 1), ("kagura", 30, 2), ("tambara", 30, 3)]
    );
}

#[rstest]
fn ranking_nothing_yields_nothing(defaults: PreferenceWeights) {
    assert!(rank_entities(&[], &defaults).is_empty());
}

struct LengthScorer;

impl Scorer for LengthScorer {
    fn score(&self, sequence: &ObservationSequence, _weights: &PreferenceWeights) -> ScoreResult {
        ScoreResult {
            raw_score: u32::try_from(sequence.len()).unwrap_or(u32::MAX),
            ..ScoreResult::empty()
        }
    }
}

#[rstest]
fn rank_with_uses_the_supplied_scorer(defaults: PreferenceWeights) {
    let forecasts = vec![
        forecast("short", &[50.0]),
        forecast("long", &[0.0, 0.0, 0.0]),
    ];
    let ranking = rank_with(&LengthScorer, &forecasts, &defaults);
    let first = ranking.first().map(|row| row.resort_id.as_str());
    assert_eq!(first, Some("long"));
}

#[rstest]
fn rank_indexed_keeps_positions_of_repeated_ids(defaults: PreferenceWeights) {
    let forecasts = vec![
        forecast("niseko", &[0.0]),
        forecast("niseko", &[20.0]),
        forecast("hakuba", &[10.0]),
    ];
    let ranking = rank_indexed(&PowderScorer, &forecasts, &defaults);
    let summary: Vec<(usize, &str, u32)> = ranking
        .iter()
        .map(|(index, row)| (*index, row.resort_id.as_str(), row.raw_score))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "niseko", 60), (2, "hakuba", 30), (0, "niseko", 0)]
    );
}
