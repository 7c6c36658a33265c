use std::fmt;

use uom::si::{f64::Ratio, ratio::ratio};

/// Margins above this fraction of flooding are classified as [`LoadingStatus::High`].
pub const HIGH_LOADING_THRESHOLD: f64 = 0.9;

/// Margins below this fraction of flooding are classified as [`LoadingStatus::Low`].
pub const LOW_LOADING_THRESHOLD: f64 = 0.4;

/// How close the design point sits to flooding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoadingStatus {
    /// Oversized; the demister runs well below its capacity.
    Low,
    /// Within the normal operating band.
    Ok,
    /// Near flooding; entrainment risk is elevated.
    High,
}

impl LoadingStatus {
    /// Classifies a loading fraction.
    ///
    /// Both thresholds are exclusive, so `0.4` and `0.9` are [`LoadingStatus::Ok`].
    #[must_use]
    pub fn from_fraction(fraction: Ratio) -> Self {
        let fraction = fraction.get::<ratio>();
        if fraction > HIGH_LOADING_THRESHOLD {
            Self::High
        } else if fraction < LOW_LOADING_THRESHOLD {
            Self::Low
        } else {
            Self::Ok
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Ok => "ok",
            Self::High => "high",
        }
    }
}

impl fmt::Display for LoadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
