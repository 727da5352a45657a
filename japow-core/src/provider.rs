//! Adapter for the column-oriented daily payload emitted by the weather
//! provider.
//!
//! The provider reports each variable as a parallel array indexed by day.
//! [`DailyColumns::into_sequence`] zips those arrays into a validated
//! [`ObservationSequence`]. Nothing here performs I/O.

use chrono::NaiveDate;
use thiserror::Error;

use crate::observation::DEFAULT_VISIBILITY_M;
use crate::{DailyObservation, ObservationSequence, SequenceError};

/// Daily weather variables as parallel columns.
///
/// `visibility_min` and `historical_snowfall` are optional; individual
/// entries may also be `null`. Missing visibility defaults to good
/// visibility, missing historical averages stay unknown.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use japow_core::DailyColumns;
///
/// # fn main() -> Result<(), japow_core::ProviderError> {
/// let day = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
/// let columns = DailyColumns {
///     time: vec![day],
///     snowfall_sum: vec![18.0],
///     precipitation_probability_max: vec![90.0],
///     wind_speed_10m_max: vec![12.0],
///     visibility_min: None,
///     temperature_2m_max: vec![-5.0],
///     temperature_2m_min: vec![-11.0],
///     historical_snowfall: None,
/// };
/// let sequence = columns.into_sequence()?;
/// assert_eq!(sequence.days()[0].min_visibility_m, 10_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyColumns {
    /// Calendar day of each row.
    pub time: Vec<NaiveDate>,
    /// New snow per day, in centimetres.
    pub snowfall_sum: Vec<f64>,
    /// Highest precipitation probability per day, in percent.
    pub precipitation_probability_max: Vec<f64>,
    /// Strongest wind speed per day, in km/h.
    pub wind_speed_10m_max: Vec<f64>,
    /// Lowest visibility per day, in metres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visibility_min: Option<Vec<Option<f64>>>,
    /// Daily maximum temperature, in degrees Celsius.
    pub temperature_2m_max: Vec<f64>,
    /// Daily minimum temperature, in degrees Celsius.
    pub temperature_2m_min: Vec<f64>,
    /// Long-run average snowfall per calendar date, in centimetres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub historical_snowfall: Option<Vec<Option<f64>>>,
}

/// Errors raised while converting a provider payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// A column did not have one entry per day.
    #[error("column {column} has {found} entries but {expected} days were reported")]
    ColumnLength {
        /// Name of the mismatched column.
        column: &'static str,
        /// Number of entries in `time`.
        expected: usize,
        /// Number of entries in the column.
        found: usize,
    },
    /// The zipped observations were not a valid sequence.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl DailyColumns {
    /// Zip the columns into a validated observation sequence.
    ///
    /// # Errors
    /// Returns [`ProviderError::ColumnLength`] when a column's length differs
    /// from `time`, and [`ProviderError::Sequence`] when the resulting
    /// observations are out of order or implausible.
    pub fn into_sequence(self) -> Result<ObservationSequence, ProviderError> {
        self.check_lengths()?;
        let mut visibility = self.visibility_min.map(Vec::into_iter);
        let mut historical = self.historical_snowfall.map(Vec::into_iter);
        let days = self
            .time
            .into_iter()
            .zip(self.snowfall_sum)
            .zip(self.precipitation_probability_max)
            .zip(self.wind_speed_10m_max)
            .zip(self.temperature_2m_max.into_iter().zip(self.temperature_2m_min))
            .map(|((((date, snowfall), probability), wind), (max_temp, min_temp))| {
                let mut day = DailyObservation::new(date)
                    .with_snowfall(snowfall)
                    .with_precipitation_probability(probability)
                    .with_max_wind_speed(wind)
                    .with_max_temperature(max_temp)
                    .with_min_temperature(min_temp)
                    .with_min_visibility(
                        next_reading(visibility.as_mut()).unwrap_or(DEFAULT_VISIBILITY_M),
                    );
                day.historical_average_snowfall_cm = next_reading(historical.as_mut());
                day
            })
            .collect();
        Ok(ObservationSequence::new(days)?)
    }

    fn check_lengths(&self) -> Result<(), ProviderError> {
        let expected = self.time.len();
        let required = [
            ("snowfall_sum", self.snowfall_sum.len()),
            (
                "precipitation_probability_max",
                self.precipitation_probability_max.len(),
            ),
            ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
        ];
        let optional = [
            ("visibility_min", self.visibility_min.as_ref().map(Vec::len)),
            (
                "historical_snowfall",
                self.historical_snowfall.as_ref().map(Vec::len),
            ),
        ];
        let present = optional
            .into_iter()
            .filter_map(|(column, len)| len.map(|found| (column, found)));
        for (column, found) in required.into_iter().chain(present) {
            if found != expected {
                return Err(ProviderError::ColumnLength {
                    column,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

fn next_reading(column: Option<&mut std::vec::IntoIter<Option<f64>>>) -> Option<f64> {
    column.and_then(Iterator::next).flatten()
}
