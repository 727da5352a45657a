//! Property-based tests for powder scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Kill-switch:** a window where every day is above the wind kill
//!   threshold scores zero and carries the wind hold tag.
//! - **Monotonic snowfall:** on a neutral day more snow never scores less,
//!   with every other day of the window held fixed. A bluebird weight below
//!   2 makes the next day's bonus factor (`1.5 * mult`) shrink the score, so
//!   the multi-day form only covers bluebird weights of 2 and above.
//! - **Ranking shape:** ranks are `1..=n`, scores never increase down the
//!   list, every resort appears exactly once and ties keep input order.

use std::collections::HashSet;

use japow_core::test_support::{date, nth_day, sequence_from, sequence_of};
use japow_core::{DailyObservation, PreferenceWeights, ResortForecast, Tag, Weight};
use japow_scorer::{rank_entities, score_entity};
use proptest::prelude::*;

/// Raw weather readings for one generated day.
#[derive(Debug, Clone, Copy)]
struct Reading {
    snowfall_cm: f64,
    max_temperature_c: f64,
    max_wind_speed_kmh: f64,
    min_visibility_m: f64,
}

fn reading_strategy(wind: std::ops::Range<f64>) -> impl Strategy<Value = Reading> {
    (0.0_f64..80.0, -20.0_f64..10.0, wind, 0.0_f64..20_000.0).prop_map(
        |(snowfall_cm, max_temperature_c, max_wind_speed_kmh, min_visibility_m)| Reading {
            snowfall_cm,
            max_temperature_c,
            max_wind_speed_kmh,
            min_visibility_m,
        },
    )
}

fn weights_strategy() -> impl Strategy<Value = PreferenceWeights> {
    weights_with_bluebird(0..=10)
}

fn weights_with_bluebird(
    bluebird: std::ops::RangeInclusive<u8>,
) -> impl Strategy<Value = PreferenceWeights> {
    (0_u8..=10, 0_u8..=10, 0_u8..=10, bluebird).prop_map(|(snow, temperature, wind, bluebird)| {
        PreferenceWeights::new(snow, temperature, wind, bluebird)
            .unwrap_or_else(|err| panic!("generated weights are in range: {err}"))
    })
}

fn observations(readings: &[Reading]) -> Vec<DailyObservation> {
    let start = date(2025, 1, 1);
    readings
        .iter()
        .enumerate()
        .map(|(offset, reading)| {
            DailyObservation::new(nth_day(start, offset))
                .with_snowfall(reading.snowfall_cm)
                .with_max_temperature(reading.max_temperature_c)
                .with_min_temperature(reading.max_temperature_c - 5.0)
                .with_max_wind_speed(reading.max_wind_speed_kmh)
                .with_min_visibility(reading.min_visibility_m)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: gale-force wind on every day writes off the whole window.
    #[test]
    fn gale_every_day_scores_zero(
        readings in prop::collection::vec(reading_strategy(60.5..150.0), 1..8),
        weights in weights_strategy(),
    ) {
        let result = score_entity(&sequence_of(observations(&readings)), &weights);
        prop_assert_eq!(result.raw_score, 0);
        prop_assert!(result.has_tag(Tag::WindHoldRisk));
    }

    /// Property: on a neutral day the score is non-decreasing in snowfall.
    #[test]
    fn more_snow_never_scores_less(
        lower in 0.0_f64..100.0,
        extra in 0.0_f64..100.0,
        weights in weights_strategy(),
    ) {
        let start = date(2025, 1, 1);
        let light = score_entity(&sequence_from(start, &[lower]), &weights);
        let heavy = score_entity(&sequence_from(start, &[lower + extra]), &weights);
        prop_assert!(heavy.raw_score >= light.raw_score);
    }

    /// Property: raising one neutral day's snowfall inside a longer window
    /// never lowers the total.
    #[test]
    fn more_snow_on_one_day_never_scores_less(
        readings in prop::collection::vec(reading_strategy(0.0..150.0), 1..8),
        position in any::<prop::sample::Index>(),
        neutral_temperature in -4.0_f64..=2.0,
        extra in 0.0_f64..60.0,
        weights in weights_with_bluebird(2..=10),
    ) {
        let target = position.index(readings.len());
        let mut light = readings;
        if let Some(day) = light.get_mut(target) {
            day.max_temperature_c = neutral_temperature;
        }
        let mut heavy = light.clone();
        if let Some(day) = heavy.get_mut(target) {
            day.snowfall_cm += extra;
        }

        let light_score = score_entity(&sequence_of(observations(&light)), &weights);
        let heavy_score = score_entity(&sequence_of(observations(&heavy)), &weights);
        prop_assert!(
            heavy_score.raw_score >= light_score.raw_score,
            "day {target}: {} < {}",
            heavy_score.raw_score,
            light_score.raw_score,
        );
    }

    /// Property: tags only come from the conditions that raise them.
    #[test]
    fn calm_windows_never_raise_wind_tag(
        readings in prop::collection::vec(reading_strategy(0.0..60.0), 0..8),
        weights in weights_strategy(),
    ) {
        let result = score_entity(&sequence_of(observations(&readings)), &weights);
        prop_assert!(!result.has_tag(Tag::WindHoldRisk));
    }

    /// Property: the ranking is a stable permutation with ordinal ranks.
    #[test]
    fn ranking_is_stable_permutation(
        snowfalls in prop::collection::vec(
            prop::sample::select(vec![0.0, 5.0, 10.0, 20.0]),
            0..12,
        ),
        snow in 0_u8..=10,
    ) {
        let weights = PreferenceWeights::default()
            .with_snow(Weight::new(snow).unwrap_or_default());
        let forecasts: Vec<ResortForecast> = snowfalls
            .iter()
            .enumerate()
            .map(|(index, &cm)| {
                let sequence = sequence_from(date(2025, 1, 1), &[cm]);
                ResortForecast::new(format!("resort-{index}"), sequence)
            })
            .collect();

        let ranking = rank_entities(&forecasts, &weights);
        prop_assert_eq!(ranking.len(), forecasts.len());

        let ids: HashSet<&str> = ranking.iter().map(|row| row.resort_id.as_str()).collect();
        prop_assert_eq!(ids.len(), forecasts.len());

        for (expected_rank, row) in (1_usize..).zip(&ranking) {
            prop_assert_eq!(row.rank, expected_rank);
        }
        for pair in ranking.windows(2) {
            if let [above, below] = pair {
                prop_assert!(above.raw_score >= below.raw_score);
                if above.raw_score == below.raw_score {
                    prop_assert!(input_index(&above.resort_id) < input_index(&below.resort_id));
                }
            }
        }
    }
}

fn input_index(id: &str) -> usize {
    id.trim_start_matches("resort-")
        .parse()
        .unwrap_or_else(|err| panic!("generated id carries its index: {err}"))
}
