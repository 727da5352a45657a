//! Score a single day of a resort's forecast.
//!
//! A day's contribution starts from its snowfall, is adjusted for snow
//! quality, visibility and wind, and is finally discounted by its freshness.
//! Wind above [`KILL_THRESHOLD_KMH`] zeroes the day and also yields a
//! separate penalty that the caller adds to the resort total without any
//! freshness discount.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use japow_core::{DailyObservation, Tag, WeightMultipliers};

use crate::freshness;

/// Points awarded per centimetre of new snow.
pub const SNOW_POINTS_PER_CM: f64 = 3.0;
/// Maximum temperature above which snow is treated as wet, in °C.
pub const WARM_THRESHOLD_C: f64 = 2.0;
/// Maximum temperature below which snow is treated as dry, in °C.
pub const COLD_THRESHOLD_C: f64 = -4.0;
/// Visibility above which a day counts as clear, in metres.
pub const CLEAR_VISIBILITY_M: f64 = 5_000.0;
/// Visibility below which a day counts as murky, in metres.
pub const POOR_VISIBILITY_M: f64 = 500.0;
/// Snowfall above which a day counts as a storm, in centimetres.
pub const STORM_SNOWFALL_CM: f64 = 10.0;
/// Wind above which lifts may be put on hold, in km/h.
pub const HOLD_THRESHOLD_KMH: f64 = 30.0;
/// Wind above which the day is written off, in km/h.
pub const KILL_THRESHOLD_KMH: f64 = 60.0;

const WARM_QUALITY: f64 = 0.3;
const COLD_QUALITY: f64 = 1.2;
const BLUEBIRD_BONUS: f64 = 1.5;
const FOG_PENALTY: f64 = 10.0;
const STORM_VISIBILITY_FACTOR: f64 = 0.9;
const KILL_PENALTY: f64 = 20.0;

/// A day together with the context it is scored in.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The day being scored.
    pub day: &'a DailyObservation,
    /// The day immediately before it in the scored window, if any.
    pub previous: Option<&'a DailyObservation>,
    /// Zero-based position of the day in the scored window.
    pub position: usize,
}

/// What a single day adds to its resort's score.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    /// Day the outcome belongs to.
    pub date: NaiveDate,
    /// Freshness-weighted contribution; may be negative after a fog penalty.
    pub contribution: f64,
    /// Kill-switch penalty, zero unless the wind kill-switch fired.
    pub penalty: f64,
    /// Tags raised by this day.
    pub tags: BTreeSet<Tag>,
}

impl DayOutcome {
    /// Contribution and penalty combined.
    #[expect(clippy::float_arithmetic, reason = "day totals add two components")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.contribution + self.penalty
    }
}

/// Derive the snow-quality multiplier from the day's maximum temperature.
///
/// Warm days are penalised and cold days rewarded; a stronger temperature
/// preference deepens both effects. Temperatures from −4 °C to 2 °C are
/// neutral.
///
/// # Examples
/// ```
/// use japow_scorer::quality_multiplier;
///
/// assert_eq!(quality_multiplier(-6.0, 1.0), 1.2);
/// assert_eq!(quality_multiplier(0.0, 1.5), 1.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "quality scales with the temperature multiplier"
)]
#[must_use]
pub fn quality_multiplier(max_temperature_c: f64, temperature_multiplier: f64) -> f64 {
    if max_temperature_c > WARM_THRESHOLD_C {
        WARM_QUALITY / temperature_multiplier
    } else if max_temperature_c < COLD_THRESHOLD_C {
        COLD_QUALITY * temperature_multiplier
    } else {
        1.0
    }
}

/// Score one day under the given multipliers.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use japow_core::{DailyObservation, PreferenceWeights};
/// use japow_scorer::{DayContext, score_day};
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date");
/// let day = DailyObservation::new(date)
///     .with_snowfall(20.0)
///     .with_max_temperature(-6.0)
///     .with_max_wind_speed(10.0);
/// let context = DayContext { day: &day, previous: None, position: 0 };
/// let outcome = score_day(context, &PreferenceWeights::default().multipliers());
/// assert_eq!(outcome.contribution.round(), 72.0);
/// assert_eq!(outcome.penalty, 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "day scoring combines floating-point factors"
)]
#[must_use]
pub fn score_day(context: DayContext<'_>, multipliers: &WeightMultipliers) -> DayOutcome {
    let DayContext {
        day,
        previous,
        position,
    } = context;
    let mut tags = BTreeSet::new();

    let quality = quality_multiplier(day.max_temperature_c, multipliers.temperature);
    let base = day.snowfall_cm * SNOW_POINTS_PER_CM * quality * multipliers.snow;
    let after_visibility = adjust_for_visibility(base, day, previous, multipliers, &mut tags);
    let (after_wind, penalty) = adjust_for_wind(after_visibility, day, multipliers, &mut tags);

    DayOutcome {
        date: day.date,
        contribution: after_wind * freshness(position),
        penalty,
        tags,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "visibility adjustments scale or offset the day score"
)]
fn adjust_for_visibility(
    score: f64,
    day: &DailyObservation,
    previous: Option<&DailyObservation>,
    multipliers: &WeightMultipliers,
    tags: &mut BTreeSet<Tag>,
) -> f64 {
    let follows_storm = previous.is_some_and(|prior| prior.snowfall_cm > STORM_SNOWFALL_CM);
    if day.min_visibility_m > CLEAR_VISIBILITY_M && follows_storm {
        tags.insert(Tag::BluebirdPotential);
        return score * BLUEBIRD_BONUS * multipliers.bluebird;
    }
    if day.min_visibility_m < POOR_VISIBILITY_M {
        // Low visibility is expected while it is dumping; fog on a quiet day is not.
        if day.snowfall_cm > STORM_SNOWFALL_CM {
            return score * STORM_VISIBILITY_FACTOR;
        }
        return score - FOG_PENALTY;
    }
    score
}

#[expect(
    clippy::float_arithmetic,
    reason = "wind decay and kill-switch penalty are floating-point"
)]
fn adjust_for_wind(
    score: f64,
    day: &DailyObservation,
    multipliers: &WeightMultipliers,
    tags: &mut BTreeSet<Tag>,
) -> (f64, f64) {
    let wind = day.max_wind_speed_kmh;
    if wind > KILL_THRESHOLD_KMH {
        log::debug!(
            "wind kill-switch fired on {date}: {wind} km/h exceeds {KILL_THRESHOLD_KMH} km/h",
            date = day.date
        );
        tags.insert(Tag::WindHoldRisk);
        return (0.0, -(KILL_PENALTY * multipliers.wind));
    }
    if wind > HOLD_THRESHOLD_KMH {
        let linear = 1.0 - (wind - HOLD_THRESHOLD_KMH) / (KILL_THRESHOLD_KMH - HOLD_THRESHOLD_KMH);
        return (score * linear.max(0.0).powf(multipliers.wind), 0.0);
    }
    (score, 0.0)
}
