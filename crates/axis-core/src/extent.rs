// File: crates/axis-core/src/extent.rs
// Summary: Min/max extraction from sampled data, the input side of the scaler.

/// Observed data range. Contract: `min <= max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of two values in either order; `None` if either is not finite.
    pub fn new(a: f64, b: f64) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self { min: a.min(b), max: a.max(b) })
    }

    /// Fold min/max over `values`, skipping NaN and infinities.
    /// Returns `None` when no finite sample is present.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Extent across several columns (e.g. every y column of a curve table).
    pub fn from_columns<'a, I>(columns: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        columns
            .into_iter()
            .filter_map(|col| Self::from_values(col.iter().copied()))
            .reduce(Self::union)
    }

    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True for a zero-width range, which the scaler rejects.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}
