//! Preference weights: four independent 0–10 dials collected from the user.
//!
//! Each dial maps to a multiplier in `0.5..=1.5`, with the default of 5
//! landing on a neutral `1.0`. The dials are never normalised against each
//! other.

use thiserror::Error;

/// Largest accepted preference value.
pub const MAX_WEIGHT: u8 = 10;

/// Preference value used when the user has not adjusted a dial.
pub const DEFAULT_WEIGHT: u8 = 5;

/// A single preference dial in `0..=10`.
///
/// # Examples
/// ```
/// use japow_core::Weight;
///
/// # fn main() -> Result<(), japow_core::WeightOutOfRange> {
/// let weight = Weight::new(10)?;
/// assert_eq!(weight.get(), 10);
/// assert_eq!(weight.multiplier(), 1.5);
/// assert!(Weight::new(11).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Weight(u8);

/// A raw preference value exceeded [`MAX_WEIGHT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("preference weight must lie within 0..=10, got {0}")]
pub struct WeightOutOfRange(pub u8);

impl Weight {
    /// The neutral dial position.
    pub const DEFAULT: Self = Self(DEFAULT_WEIGHT);

    /// Validate a raw dial value.
    ///
    /// # Errors
    /// Returns [`WeightOutOfRange`] when `value` exceeds [`MAX_WEIGHT`].
    pub const fn new(value: u8) -> Result<Self, WeightOutOfRange> {
        if value > MAX_WEIGHT {
            return Err(WeightOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Return the raw dial value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Convert the dial into a multiplier: `0.5 + value / 10`.
    #[expect(
        clippy::float_arithmetic,
        reason = "weights map linearly onto a floating-point multiplier"
    )]
    #[must_use]
    pub fn multiplier(self) -> f64 {
        0.5 + f64::from(self.0) / 10.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Weight {
    type Error = WeightOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// Identifies one of the four preference dials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    /// Importance of raw snowfall.
    Snow,
    /// Importance of snow quality as driven by temperature.
    Temperature,
    /// Sensitivity to wind holds and closures.
    Wind,
    /// Importance of a clear day following a storm.
    Bluebird,
}

impl PreferenceField {
    /// Return the dial name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snow => "snow",
            Self::Temperature => "temperature",
            Self::Wind => "wind",
            Self::Bluebird => "bluebird",
        }
    }
}

impl std::fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by [`PreferenceWeights::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// A dial was set outside `0..=10`.
    #[error("{field} weight must lie within 0..=10, got {value}")]
    OutOfRange {
        /// Dial carrying the invalid value.
        field: PreferenceField,
        /// Value supplied by the caller.
        value: u8,
    },
}

/// The user's four preference dials.
///
/// # Examples
/// ```
/// use japow_core::PreferenceWeights;
///
/// # fn main() -> Result<(), japow_core::PreferenceError> {
/// let weights = PreferenceWeights::new(8, 5, 2, 10)?;
/// assert_eq!(weights.snow().get(), 8);
/// assert_eq!(weights.multipliers().bluebird, 1.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreferenceWeights {
    snow: Weight,
    temperature: Weight,
    wind: Weight,
    bluebird: Weight,
}

impl PreferenceWeights {
    /// Validate raw dial values and build a weight set.
    ///
    /// # Errors
    /// Returns [`PreferenceError::OutOfRange`] naming the first dial above
    /// [`MAX_WEIGHT`].
    pub fn new(snow: u8, temperature: u8, wind: u8, bluebird: u8) -> Result<Self, PreferenceError> {
        Ok(Self {
            snow: checked(PreferenceField::Snow, snow)?,
            temperature: checked(PreferenceField::Temperature, temperature)?,
            wind: checked(PreferenceField::Wind, wind)?,
            bluebird: checked(PreferenceField::Bluebird, bluebird)?,
        })
    }

    /// Importance of raw snowfall.
    #[must_use]
    pub const fn snow(&self) -> Weight {
        self.snow
    }

    /// Importance of snow quality.
    #[must_use]
    pub const fn temperature(&self) -> Weight {
        self.temperature
    }

    /// Sensitivity to wind.
    #[must_use]
    pub const fn wind(&self) -> Weight {
        self.wind
    }

    /// Importance of the post-storm clear-sky bonus.
    #[must_use]
    pub const fn bluebird(&self) -> Weight {
        self.bluebird
    }

    /// Replace the snow dial.
    #[must_use]
    pub const fn with_snow(mut self, weight: Weight) -> Self {
        self.snow = weight;
        self
    }

    /// Replace the temperature dial.
    #[must_use]
    pub const fn with_temperature(mut self, weight: Weight) -> Self {
        self.temperature = weight;
        self
    }

    /// Replace the wind dial.
    #[must_use]
    pub const fn with_wind(mut self, weight: Weight) -> Self {
        self.wind = weight;
        self
    }

    /// Replace the bluebird dial.
    #[must_use]
    pub const fn with_bluebird(mut self, weight: Weight) -> Self {
        self.bluebird = weight;
        self
    }

    /// Convert every dial into its multiplier.
    #[must_use]
    pub fn multipliers(&self) -> WeightMultipliers {
        WeightMultipliers {
            snow: self.snow.multiplier(),
            temperature: self.temperature.multiplier(),
            wind: self.wind.multiplier(),
            bluebird: self.bluebird.multiplier(),
        }
    }
}

fn checked(field: PreferenceField, value: u8) -> Result<Weight, PreferenceError> {
    Weight::new(value).map_err(|WeightOutOfRange(rejected)| PreferenceError::OutOfRange {
        field,
        value: rejected,
    })
}

/// Multipliers derived from [`PreferenceWeights`], each in `0.5..=1.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightMultipliers {
    /// Scales the base snowfall contribution.
    pub snow: f64,
    /// Deepens the warm-snow penalty and the cold-snow bonus.
    pub temperature: f64,
    /// Exponent on the wind decay and scale of the kill-switch penalty.
    pub wind: f64,
    /// Scales the bluebird bonus.
    pub bluebird: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0.5)]
    #[case(5, 1.0)]
    #[case(10, 1.5)]
    fn multiplier_spans_half_to_one_and_a_half(#[case] value: u8, #[case] expected: f64) {
        let weight = Weight::new(value).expect("in range");
        assert!((weight.multiplier() - expected).abs() < 1e-12);
    }

    #[rstest]
    fn default_weights_are_neutral() {
        let multipliers = PreferenceWeights::default().multipliers();
        assert_eq!(
            multipliers,
            WeightMultipliers {
                snow: 1.0,
                temperature: 1.0,
                wind: 1.0,
                bluebird: 1.0,
            }
        );
    }

    #[rstest]
    #[case::snow((11, 5, 5, 5), PreferenceField::Snow)]
    #[case::temperature((5, 12, 5, 5), PreferenceField::Temperature)]
    #[case::wind((5, 5, 200, 5), PreferenceField::Wind)]
    #[case::bluebird((5, 5, 5, u8::MAX), PreferenceField::Bluebird)]
    fn new_names_the_rejected_dial(#[case] raw: (u8, u8, u8, u8), #[case] field: PreferenceField) {
        let (snow, temperature, wind, bluebird) = raw;
        let err = PreferenceWeights::new(snow, temperature, wind, bluebird)
            .expect_err("out-of-range dial");
        assert!(matches!(err, PreferenceError::OutOfRange { field: found, .. } if found == field));
    }

    #[rstest]
    fn dials_are_independent() {
        let weights = PreferenceWeights::default().with_wind(Weight::new(9).expect("in range"));
        assert_eq!(weights.wind().get(), 9);
        assert_eq!(weights.snow(), Weight::DEFAULT);
        assert_eq!(weights.temperature(), Weight::DEFAULT);
        assert_eq!(weights.bluebird(), Weight::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_fills_missing_dials_with_defaults() {
        let weights: PreferenceWeights =
            serde_json::from_str(r#"{"snow":7}"#).expect("partial weights parse");
        assert_eq!(weights.snow().get(), 7);
        assert_eq!(weights.wind(), Weight::DEFAULT);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_rejects_out_of_range_dials() {
        let result: Result<PreferenceWeights, _> = serde_json::from_str(r#"{"bluebird":11}"#);
        assert!(result.is_err());
    }
}
