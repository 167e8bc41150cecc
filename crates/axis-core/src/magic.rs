// File: crates/axis-core/src/magic.rs
// Summary: Table of "nice" step multipliers and the power-of-ten decade that scales them.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// Canonical multipliers, one decade wide. Entries 2 and 5 are only reached by
/// walking down from the initial pick.
pub const CANONICAL_STEPS: [f64; 14] = [
    2.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Ordered set of round multipliers a tick step may be built from.
/// Contract: non-empty, finite, positive, strictly increasing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct MagicTable {
    steps: Vec<f64>,
}

impl MagicTable {
    pub fn new(steps: Vec<f64>) -> Result<Self, ScaleError> {
        if steps.is_empty() {
            return Err(ScaleError::InvalidMagicTable("table is empty"));
        }
        if steps.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ScaleError::InvalidMagicTable("entries must be finite and positive"));
        }
        if steps.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ScaleError::InvalidMagicTable("entries must be strictly increasing"));
        }
        Ok(Self { steps })
    }

    /// Index of the smallest entry strictly greater than `ratio`.
    pub fn first_above(&self, ratio: f64) -> Option<usize> {
        self.steps.iter().position(|&m| m > ratio)
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.steps.get(index).copied()
    }

    /// Entry at `index`, which must come from [`first_above`](Self::first_above)
    /// or stay below [`len`](Self::len).
    #[inline]
    pub fn step(&self, index: usize) -> f64 {
        self.steps[index]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn largest(&self) -> f64 {
        self.steps[self.steps.len() - 1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.steps
    }
}

impl Default for MagicTable {
    fn default() -> Self {
        Self { steps: CANONICAL_STEPS.to_vec() }
    }
}

impl TryFrom<Vec<f64>> for MagicTable {
    type Error = ScaleError;

    fn try_from(steps: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<MagicTable> for Vec<f64> {
    fn from(table: MagicTable) -> Self {
        table.steps
    }
}

/// Power-of-ten multiplier applied to the magic table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decade {
    pub exponent: i32,
}

impl Decade {
    /// `10^floor(log10(raw_gap) - 1)`, which puts `raw_gap / decade` in `[10, 100)`.
    /// `None` when the logarithm or the power of ten is not finite.
    pub fn from_raw_gap(raw_gap: f64) -> Option<Self> {
        let log = raw_gap.log10();
        if !log.is_finite() {
            return None;
        }
        let exponent = (log - 1.0).floor();
        if exponent.abs() > f64::from(f64::MAX_10_EXP) {
            return None;
        }
        let mut decade = Self { exponent: exponent as i32 };

        // log10 can round across a power of ten; settle on the ratio itself.
        let ratio = raw_gap / decade.value();
        if ratio >= 100.0 {
            decade.exponent += 1;
        } else if ratio < 10.0 {
            decade.exponent -= 1;
        }

        let value = decade.value();
        if value.is_finite() && value > 0.0 {
            Some(decade)
        } else {
            None
        }
    }

    /// `multiplier * 10^exponent`. Negative exponents divide so that steps
    /// such as 1.5 or 0.3 land on their nearest double.
    #[inline]
    pub fn scale(&self, multiplier: f64) -> f64 {
        if self.exponent >= 0 {
            multiplier * 10f64.powi(self.exponent)
        } else {
            multiplier / 10f64.powi(-self.exponent)
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.scale(1.0)
    }
}
