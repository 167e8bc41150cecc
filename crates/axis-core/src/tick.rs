// File: crates/axis-core/src/tick.rs
// Summary: Tick scheme (lower, upper, step) and the tick marks it lays out.

use crate::error::ScaleError;

/// Minor ticks split each major interval in two (minor locator = step / 2).
pub const MINOR_DIVISIONS: usize = 2;

/// Axis limits plus the spacing between major gridlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickScheme {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

impl TickScheme {
    /// Build a scheme from caller-supplied values.
    /// Contract: all finite, `lower < upper`, `step > 0`.
    pub fn try_new(lower: f64, upper: f64, step: f64) -> Result<Self, ScaleError> {
        let finite = lower.is_finite() && upper.is_finite() && step.is_finite();
        if !finite || lower >= upper || step <= 0.0 {
            return Err(ScaleError::InvalidTickScheme { lower, upper, step });
        }
        Ok(Self { lower, upper, step })
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.lower, self.upper, self.step)
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Number of major intervals, rounded to the nearest whole count.
    pub fn split_count(&self) -> usize {
        (self.span() / self.step).round().max(0.0) as usize
    }

    /// True when `span / step` is a whole number (within float noise).
    pub fn divides_evenly(&self) -> bool {
        let ratio = self.span() / self.step;
        (ratio - ratio.round()).abs() <= 1e-9 * ratio.abs().max(1.0)
    }

    pub fn minor_step(&self) -> f64 {
        self.step / MINOR_DIVISIONS as f64
    }

    pub fn contains(&self, min_value: f64, max_value: f64) -> bool {
        self.lower <= min_value && self.upper >= max_value
    }

    /// Major and minor ticks from `lower` to `upper`, inclusive.
    pub fn ticks(&self) -> TickIter {
        TickIter::new(self)
    }

    pub fn major_ticks(&self) -> Vec<f64> {
        self.ticks().filter(|t| t.is_major()).map(|t| t.value).collect()
    }
}

/// A single tick mark. Level 0 is a major tick, level 1 a minor one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub level: u8,
}

impl Tick {
    #[inline]
    pub fn is_major(&self) -> bool {
        self.level == 0
    }
}

/// Walks tick positions by index so values never accumulate rounding error.
pub struct TickIter {
    lower: f64,
    minor_step: f64,
    index: usize,
    last: usize,
}

impl TickIter {
    fn new(scheme: &TickScheme) -> Self {
        let minor_step = scheme.minor_step();
        // Tolerate float noise so an upper bound that is a whole multiple is kept.
        let count = scheme.span() / minor_step;
        let last = (count + 1e-9 * count.abs().max(1.0)).floor().max(0.0) as usize;
        Self { lower: scheme.lower, minor_step, index: 0, last }
    }
}

impl Iterator for TickIter {
    type Item = Tick;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.last {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let value = self.lower + self.minor_step * i as f64;
        let level = if i % MINOR_DIVISIONS == 0 { 0 } else { 1 };
        Some(Tick { value, level })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickIter {}
