//! Validated scarcity percentage.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Percentage chance in [0, 100] that a tile independently fails.
///
/// Out-of-range and NaN values are rejected rather than clamped.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Scarcity(f64);

impl Scarcity {
    pub const MIN: Scarcity = Scarcity(0.0);
    pub const MAX: Scarcity = Scarcity(100.0);
    /// Scarcity used when a caller has not picked one.
    pub const DEFAULT: Scarcity = Scarcity(25.0);

    pub fn try_new(percent: f64) -> Result<Self> {
        if percent.is_nan() || !(0.0..=100.0).contains(&percent) {
            return Err(Error::InvalidScarcity(percent));
        }
        Ok(Self(percent))
    }

    /// The percentage as given.
    #[inline]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Per-tile failure probability in [0, 1].
    #[inline]
    pub fn probability(self) -> f64 {
        self.0 / 100.0
    }

    /// True when every tile is guaranteed to fail.
    pub fn is_total(self) -> bool {
        self.0 >= 100.0
    }
}

impl Default for Scarcity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Scarcity {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl TryFrom<u8> for Scarcity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::try_new(value as f64)
    }
}

impl From<Scarcity> for f64 {
    fn from(value: Scarcity) -> Self {
        value.0
    }
}

impl fmt::Display for Scarcity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
