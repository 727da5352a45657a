//! Daily weather observations and chronologically ordered sequences of them.
//!
//! A sequence produced by the weather provider conventionally opens with
//! [`HISTORY_DAYS`] past days followed by the forecast window. The sequence
//! itself does not enforce that split; callers pick the window they score
//! through [`ObservationSequence::split_history`] or
//! [`ObservationSequence::forecast_window`].

use chrono::NaiveDate;
use thiserror::Error;

/// Number of past days the weather provider prepends to each sequence.
pub const HISTORY_DAYS: usize = 2;

/// Visibility assumed when the provider omits a reading, in metres.
pub const DEFAULT_VISIBILITY_M: f64 = 10_000.0;

/// Weather for a single calendar day at one resort.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use japow_core::DailyObservation;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
/// let day = DailyObservation::new(date)
///     .with_snowfall(20.0)
///     .with_max_temperature(-6.0);
/// assert_eq!(day.snowfall_cm, 20.0);
/// assert!(day.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyObservation {
    /// Calendar day the observation describes.
    pub date: NaiveDate,
    /// New snow for the day, in centimetres.
    pub snowfall_cm: f64,
    /// Daily maximum temperature, in degrees Celsius.
    pub max_temperature_c: f64,
    /// Daily minimum temperature, in degrees Celsius.
    pub min_temperature_c: f64,
    /// Strongest wind speed of the day, in km/h.
    pub max_wind_speed_kmh: f64,
    /// Lowest visibility of the day, in metres.
    pub min_visibility_m: f64,
    /// Highest precipitation probability of the day, in percent.
    pub precipitation_probability: f64,
    /// Long-run average snowfall for the same calendar date, in centimetres.
    ///
    /// Display only; scoring never reads it.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub historical_average_snowfall_cm: Option<f64>,
}

impl DailyObservation {
    /// Construct a calm, snowless day at 0 °C with unlimited visibility.
    ///
    /// Use the `with_*` methods to fill in the measured values.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            snowfall_cm: 0.0,
            max_temperature_c: 0.0,
            min_temperature_c: 0.0,
            max_wind_speed_kmh: 0.0,
            min_visibility_m: DEFAULT_VISIBILITY_M,
            precipitation_probability: 0.0,
            historical_average_snowfall_cm: None,
        }
    }

    /// Set the day's snowfall in centimetres.
    #[must_use]
    pub const fn with_snowfall(mut self, centimetres: f64) -> Self {
        self.snowfall_cm = centimetres;
        self
    }

    /// Set the day's maximum temperature in degrees Celsius.
    #[must_use]
    pub const fn with_max_temperature(mut self, celsius: f64) -> Self {
        self.max_temperature_c = celsius;
        self
    }

    /// Set the day's minimum temperature in degrees Celsius.
    #[must_use]
    pub const fn with_min_temperature(mut self, celsius: f64) -> Self {
        self.min_temperature_c = celsius;
        self
    }

    /// Set the day's maximum wind speed in km/h.
    #[must_use]
    pub const fn with_max_wind_speed(mut self, kmh: f64) -> Self {
        self.max_wind_speed_kmh = kmh;
        self
    }

    /// Set the day's minimum visibility in metres.
    #[must_use]
    pub const fn with_min_visibility(mut self, metres: f64) -> Self {
        self.min_visibility_m = metres;
        self
    }

    /// Set the day's precipitation probability in percent.
    #[must_use]
    pub const fn with_precipitation_probability(mut self, percent: f64) -> Self {
        self.precipitation_probability = percent;
        self
    }

    /// Set the long-run average snowfall for this calendar date.
    #[must_use]
    pub const fn with_historical_average(mut self, centimetres: f64) -> Self {
        self.historical_average_snowfall_cm = Some(centimetres);
        self
    }

    /// Check that every measurement is finite and physically plausible.
    ///
    /// # Errors
    /// Returns [`ObservationError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ObservationError> {
        self.require_non_negative("snowfall_cm", self.snowfall_cm)?;
        self.require_finite("max_temperature_c", self.max_temperature_c)?;
        self.require_finite("min_temperature_c", self.min_temperature_c)?;
        self.require_non_negative("max_wind_speed_kmh", self.max_wind_speed_kmh)?;
        self.require_non_negative("min_visibility_m", self.min_visibility_m)?;
        self.require_finite("precipitation_probability", self.precipitation_probability)?;
        if !(0.0..=100.0).contains(&self.precipitation_probability) {
            return Err(ObservationError::ProbabilityOutOfRange {
                date: self.date,
                value: self.precipitation_probability,
            });
        }
        if let Some(average) = self.historical_average_snowfall_cm {
            self.require_non_negative("historical_average_snowfall_cm", average)?;
        }
        Ok(())
    }

    /// Classify the day's snowfall for display.
    #[must_use]
    pub fn snowfall_band(&self) -> SnowfallBand {
        SnowfallBand::classify(self.snowfall_cm)
    }

    const fn require_finite(
        &self,
        field: &'static str,
        value: f64,
    ) -> Result<(), ObservationError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ObservationError::NonFinite {
                date: self.date,
                field,
            })
        }
    }

    fn require_non_negative(
        &self,
        field: &'static str,
        value: f64,
    ) -> Result<(), ObservationError> {
        self.require_finite(field, value)?;
        if value < 0.0 {
            return Err(ObservationError::Negative {
                date: self.date,
                field,
                value,
            });
        }
        Ok(())
    }
}

/// Reasons a single observation is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObservationError {
    /// A measurement was NaN or infinite.
    #[error("{field} on {date} must be a finite number")]
    NonFinite {
        /// Day of the offending observation.
        date: NaiveDate,
        /// Name of the offending field.
        field: &'static str,
    },
    /// A quantity that cannot be negative was negative.
    #[error("{field} on {date} must not be negative, got {value}")]
    Negative {
        /// Day of the offending observation.
        date: NaiveDate,
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the provider.
        value: f64,
    },
    /// Precipitation probability fell outside `0..=100`.
    #[error("precipitation probability on {date} must lie within 0..=100, got {value}")]
    ProbabilityOutOfRange {
        /// Day of the offending observation.
        date: NaiveDate,
        /// Value supplied by the provider.
        value: f64,
    },
}

/// Display band for a day's snowfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SnowfallBand {
    /// No new snow.
    None,
    /// Under 5 cm.
    Light,
    /// 5 cm up to 15 cm.
    Moderate,
    /// 15 cm up to 30 cm.
    Heavy,
    /// 30 cm up to 50 cm.
    Deep,
    /// 50 cm or more.
    Epic,
}

impl SnowfallBand {
    /// Classify a snowfall amount in centimetres.
    ///
    /// # Examples
    /// ```
    /// use japow_core::SnowfallBand;
    ///
    /// assert_eq!(SnowfallBand::classify(0.0), SnowfallBand::None);
    /// assert_eq!(SnowfallBand::classify(22.0), SnowfallBand::Heavy);
    /// ```
    #[must_use]
    pub fn classify(centimetres: f64) -> Self {
        match centimetres {
            cm if cm <= 0.0 => Self::None,
            cm if cm < 5.0 => Self::Light,
            cm if cm < 15.0 => Self::Moderate,
            cm if cm < 30.0 => Self::Heavy,
            cm if cm < 50.0 => Self::Deep,
            _ => Self::Epic,
        }
    }
}

/// Snowfall that already fell during the history days of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SnowHistory {
    /// Snowfall of the most recent past day, in centimetres.
    pub past_24h_cm: f64,
    /// Snowfall of all past days combined, in centimetres.
    pub past_48h_cm: f64,
}

/// An ordered run of daily observations for one resort.
///
/// Dates are strictly ascending and every observation passes
/// [`DailyObservation::validate`]. An empty sequence is valid.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use japow_core::{DailyObservation, ObservationSequence};
///
/// # fn main() -> Result<(), japow_core::SequenceError> {
/// let first = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
/// let second = first.succ_opt().expect("valid date");
/// let sequence = ObservationSequence::new(vec![
///     DailyObservation::new(first),
///     DailyObservation::new(second).with_snowfall(12.0),
/// ])?;
/// assert_eq!(sequence.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<DailyObservation>", into = "Vec<DailyObservation>")
)]
pub struct ObservationSequence {
    days: Vec<DailyObservation>,
}

/// Reasons an observation sequence is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// One of the observations failed validation.
    #[error("observation {index} is invalid: {source}")]
    InvalidObservation {
        /// Position of the observation within the sequence.
        index: usize,
        /// Validation failure for that observation.
        #[source]
        source: ObservationError,
    },
    /// Dates were repeated or went backwards.
    #[error("observation {index} dated {date} does not follow {previous}")]
    OutOfOrder {
        /// Position of the observation within the sequence.
        index: usize,
        /// Date of the preceding observation.
        previous: NaiveDate,
        /// Date of the offending observation.
        date: NaiveDate,
    },
}

impl ObservationSequence {
    /// Validate and wrap a run of observations.
    ///
    /// # Errors
    /// Returns [`SequenceError::InvalidObservation`] for the first observation
    /// failing [`DailyObservation::validate`] and
    /// [`SequenceError::OutOfOrder`] when dates are not strictly ascending.
    pub fn new(days: Vec<DailyObservation>) -> Result<Self, SequenceError> {
        for (index, day) in days.iter().enumerate() {
            day.validate()
                .map_err(|source| SequenceError::InvalidObservation { index, source })?;
        }
        for (offset, pair) in days.windows(2).enumerate() {
            if let [previous, current] = pair
                && current.date <= previous.date
            {
                return Err(SequenceError::OutOfOrder {
                    index: offset + 1,
                    previous: previous.date,
                    date: current.date,
                });
            }
        }
        Ok(Self { days })
    }

    /// Construct a sequence with no days.
    #[must_use]
    pub const fn empty() -> Self {
        Self { days: Vec::new() }
    }

    /// Borrow the observations in chronological order.
    #[must_use]
    pub fn days(&self) -> &[DailyObservation] {
        &self.days
    }

    /// Iterate over the observations in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyObservation> {
        self.days.iter()
    }

    /// Number of days in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Report whether the sequence holds no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Split the sequence into its history days and its forecast window.
    ///
    /// Sequences shorter than `HISTORY_DAYS + 1` days carry no usable
    /// history, so the whole sequence is treated as the forecast window.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Days, NaiveDate};
    /// use japow_core::{DailyObservation, ObservationSequence};
    ///
    /// # fn main() -> Result<(), japow_core::SequenceError> {
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 8).expect("valid date");
    /// let days = (0..5)
    ///     .filter_map(|offset| start.checked_add_days(Days::new(offset)))
    ///     .map(DailyObservation::new)
    ///     .collect();
    /// let sequence = ObservationSequence::new(days)?;
    /// let (history, forecast) = sequence.split_history();
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(forecast.len(), 3);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn split_history(&self) -> (&[DailyObservation], &[DailyObservation]) {
        if self.days.len() <= HISTORY_DAYS {
            return self.days.split_at(0);
        }
        self.days.split_at(HISTORY_DAYS)
    }

    /// Return the forecast window as a sequence of its own.
    #[must_use]
    pub fn forecast_window(&self) -> Self {
        let (_, forecast) = self.split_history();
        Self {
            days: forecast.to_vec(),
        }
    }

    /// Summarise the snow that fell during the history days.
    #[expect(
        clippy::float_arithmetic,
        reason = "history totals sum snowfall amounts"
    )]
    #[must_use]
    pub fn snow_history(&self) -> SnowHistory {
        let (history, _) = self.split_history();
        SnowHistory {
            past_24h_cm: history.last().map_or(0.0, |day| day.snowfall_cm),
            past_48h_cm: history.iter().map(|day| day.snowfall_cm).sum(),
        }
    }
}

impl TryFrom<Vec<DailyObservation>> for ObservationSequence {
    type Error = SequenceError;

    fn try_from(days: Vec<DailyObservation>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<ObservationSequence> for Vec<DailyObservation> {
    fn from(sequence: ObservationSequence) -> Self {
        sequence.days
    }
}

impl<'a> IntoIterator for &'a ObservationSequence {
    type Item = &'a DailyObservation;
    type IntoIter = std::slice::Iter<'a, DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
