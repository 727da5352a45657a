//! Builders shared by unit and behaviour tests across the workspace.
//!
//! Enable the `test-support` feature to use these helpers from other crates.

use chrono::{Days, NaiveDate};

use crate::{DailyObservation, ObservationSequence};

/// Build a calendar date, panicking on impossible input.
///
/// # Panics
/// Panics when the year, month and day do not form a valid date.
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Return the date `offset` days after `start`.
///
/// # Panics
/// Panics when the result leaves chrono's supported range.
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
#[must_use]
pub fn nth_day(start: NaiveDate, offset: usize) -> NaiveDate {
    let days = u64::try_from(offset).expect("offset fits in u64");
    start
        .checked_add_days(Days::new(days))
        .expect("date within range")
}

/// A calm, cold-neutral day with the given snowfall.
#[must_use]
pub fn snow_day(date: NaiveDate, snowfall_cm: f64) -> DailyObservation {
    DailyObservation::new(date)
        .with_snowfall(snowfall_cm)
        .with_max_temperature(0.0)
        .with_min_temperature(-5.0)
        .with_max_wind_speed(10.0)
        .with_min_visibility(2_000.0)
}

/// Build consecutive [`snow_day`]s starting at `start`.
///
/// # Panics
/// Panics when the generated days do not form a valid sequence.
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
#[must_use]
pub fn sequence_from(start: NaiveDate, snowfall_cm: &[f64]) -> ObservationSequence {
    let days = snowfall_cm
        .iter()
        .enumerate()
        .map(|(offset, &amount)| snow_day(nth_day(start, offset), amount))
        .collect();
    ObservationSequence::new(days).expect("generated sequence is valid")
}

/// Wrap already-dated observations in a sequence.
///
/// # Panics
/// Panics when the observations do not form a valid sequence.
#[expect(clippy::expect_used, reason = "test fixtures should fail fast")]
#[must_use]
pub fn sequence_of(days: Vec<DailyObservation>) -> ObservationSequence {
    ObservationSequence::new(days).expect("observations form a valid sequence")
}
