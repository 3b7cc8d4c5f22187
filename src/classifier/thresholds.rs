//! Score thresholds for flag classification
//!
//! Two cut points split the score range into three bands. Ties go to the
//! outer band: a score equal to `hi` is "Likely AI", a score equal to `lo` is
//! "Likely Human".

use serde::{Deserialize, Serialize};

/// Default lower bound for "Likely AI"
pub const DEFAULT_HI: f64 = 0.70;
/// Default upper bound for "Likely Human"
pub const DEFAULT_LO: f64 = 0.40;

/// Threshold pair used by [`classify`](super::classify)
///
/// Callers are expected to keep `lo <= hi`. An inverted pair is not rejected;
/// the decision rule is still applied in order (`hi` first), so the middle
/// band simply disappears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Scores at or above this are flagged "Likely AI"
    pub hi: f64,
    /// Scores at or below this (and below `hi`) are flagged "Likely Human"
    pub lo: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hi: DEFAULT_HI,
            lo: DEFAULT_LO,
        }
    }
}

impl Thresholds {
    pub fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Whether `lo <= hi` holds
    pub fn is_ordered(&self) -> bool {
        self.lo <= self.hi
    }

    /// Apply optional overrides on top of these thresholds
    pub fn with_overrides(self, hi: Option<f64>, lo: Option<f64>) -> Self {
        Self {
            hi: hi.unwrap_or(self.hi),
            lo: lo.unwrap_or(self.lo),
        }
    }
}
