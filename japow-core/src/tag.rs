//! Descriptive labels raised while scoring a resort's forecast.
//!
//! # Examples
//! ```
//! use japow_core::Tag;
//!
//! assert_eq!(Tag::WindHoldRisk.as_str(), "Wind Hold Risk");
//! assert_eq!("Bluebird Potential".parse::<Tag>(), Ok(Tag::BluebirdPotential));
//! ```

/// A condition worth surfacing alongside a resort's score.
///
/// Ordering is declaration order so tag sets render deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// A clear day directly after a heavy snowfall.
    #[cfg_attr(feature = "serde", serde(rename = "Bluebird Potential"))]
    BluebirdPotential,
    /// Wind strong enough to close lifts for the day.
    #[cfg_attr(feature = "serde", serde(rename = "Wind Hold Risk"))]
    WindHoldRisk,
}

impl Tag {
    /// Return the human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BluebirdPotential => "Bluebird Potential",
            Self::WindHoldRisk => "Wind Hold Risk",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bluebird Potential" => Ok(Self::BluebirdPotential),
            "Wind Hold Risk" => Ok(Self::WindHoldRisk),
            _ => Err(format!("unknown tag '{s}'")),
        }
    }
}
