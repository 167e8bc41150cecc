// File: crates/axis-core/src/scaler.rs
// Summary: Nice-number axis search: pick a magic step, snap bounds, walk the table until
//          the axis splits into the target number of intervals.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bounds::compute_bounds;
use crate::error::ScaleError;
use crate::extent::Extent;
use crate::magic::{Decade, MagicTable};
use crate::tick::TickScheme;

/// Target number of major intervals when the caller does not choose one.
pub const DEFAULT_SPLITS: usize = 4;

/// Tunables for [`AxisScaler`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleOptions {
    /// Target number of equal intervals between `lower` and `upper`.
    pub splits: usize,
    /// Skip the refinement walk and accept whatever split count the first
    /// step gives; the returned step is still `(upper - lower) / splits`.
    pub allow_deviation: bool,
    /// Force zero-centred bounds whenever they straddle or touch zero. Centred
    /// bounds always hold an even number of intervals, so an odd `splits`
    /// ends in [`SearchStatus::TableExhausted`].
    pub symmetrical: bool,
    pub magic_steps: MagicTable,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            splits: DEFAULT_SPLITS,
            allow_deviation: false,
            symmetrical: false,
            magic_steps: MagicTable::default(),
        }
    }
}

/// How the search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Bounds divide into exactly the target number of intervals.
    Exact,
    /// Deviation was allowed; no refinement was attempted.
    Approximate,
    /// The walk ran off either end of the table (or hit the iteration cap);
    /// the bounds still cover the data but the interval count may differ.
    TableExhausted,
}

/// Result of a scaling run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleOutcome {
    pub scheme: TickScheme,
    pub status: SearchStatus,
    /// Table step the bounds were snapped to. Differs from `scheme.step` only
    /// when the search did not converge.
    pub search_step: f64,
}

impl ScaleOutcome {
    pub fn is_exact(&self) -> bool {
        self.status == SearchStatus::Exact
    }

    /// `(lower, upper, step)`.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        self.scheme.as_tuple()
    }
}

/// Converts a data range into round axis bounds and a tick step.
#[derive(Clone, Debug, Default)]
pub struct AxisScaler {
    options: ScaleOptions,
}

impl AxisScaler {
    pub fn new(options: ScaleOptions) -> Result<Self, ScaleError> {
        if options.splits == 0 {
            return Err(ScaleError::InvalidSplitCount(options.splits));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &ScaleOptions {
        &self.options
    }

    pub fn scale_extent(&self, extent: Extent) -> Result<ScaleOutcome, ScaleError> {
        self.scale(extent.max, extent.min)
    }

    /// Scale `[min_value, max_value]`. Fails fast on an empty, inverted or
    /// non-finite range.
    pub fn scale(&self, max_value: f64, min_value: f64) -> Result<ScaleOutcome, ScaleError> {
        let invalid = ScaleError::InvalidRange { min: min_value, max: max_value };
        if !max_value.is_finite() || !min_value.is_finite() || min_value >= max_value {
            return Err(invalid);
        }

        let opts = &self.options;
        let table = &opts.magic_steps;
        let splits = opts.splits as f64;

        let (mut decade, mut index, mut step) = initial_step(table, (max_value - min_value) / splits, &invalid)?;
        let (mut upper, mut lower) = compute_bounds(step, max_value, min_value, opts.symmetrical);

        // Centred bounds span twice the larger magnitude; size the step from that instead.
        if opts.symmetrical && lower == -upper {
            let reach = max_value.abs().max(min_value.abs());
            (decade, index, step) = initial_step(table, 2.0 * reach / splits, &invalid)?;
            (upper, lower) = compute_bounds(step, max_value, min_value, opts.symmetrical);
        }
        debug!(exponent = decade.exponent, step, upper, lower, "initial magic step");

        if opts.allow_deviation {
            return Ok(finish(lower, upper, splits, step, SearchStatus::Approximate));
        }

        let target = opts.splits as i64;
        let split_count = |upper: f64, lower: f64, step: f64| ((upper - lower) / step).round() as i64;
        let mut status = SearchStatus::TableExhausted;

        // At most two passes over the table.
        for _ in 0..2 * table.len() {
            let actual = split_count(upper, lower, step);
            if actual == target {
                status = SearchStatus::Exact;
                break;
            }

            // Centred bounds grow on both sides or not at all. Otherwise grow the
            // side with more slack; prefer the left when the top sits on zero.
            if opts.symmetrical && lower == -upper {
                if actual < target {
                    lower -= step;
                    upper += step;
                }
            } else if (upper == 0.0 || lower - min_value <= upper - max_value) && actual < target {
                lower -= step;
            } else {
                upper += step;
            }

            let actual = split_count(upper, lower, step);
            if actual == target {
                status = SearchStatus::Exact;
                break;
            }

            let next = if actual > target {
                Some(index + 1).filter(|&i| i < table.len())
            } else {
                index.checked_sub(1)
            };
            let Some(next) = next else { break };
            index = next;
            step = decade.scale(table.step(index));
            (upper, lower) = compute_bounds(step, max_value, min_value, opts.symmetrical);
            debug!(step, upper, lower, actual, "walked magic table");
        }

        if status == SearchStatus::TableExhausted {
            warn!(
                min_value,
                max_value,
                upper,
                lower,
                target_splits = target,
                "magic table exhausted; axis will not split into the target count"
            );
        }

        Ok(finish(lower, upper, splits, step, status))
    }
}

/// Decade, table index and step for `raw_gap`. Over- or underflow anywhere
/// along the way reports `invalid`.
fn initial_step(
    table: &MagicTable,
    raw_gap: f64,
    invalid: &ScaleError,
) -> Result<(Decade, usize, f64), ScaleError> {
    if !raw_gap.is_finite() {
        return Err(invalid.clone());
    }
    let decade = Decade::from_raw_gap(raw_gap).ok_or_else(|| invalid.clone())?;
    let ratio = raw_gap / decade.value();
    let index = table
        .first_above(ratio)
        .ok_or(ScaleError::NoMagicStep { ratio, largest: table.largest() })?;
    let step = decade.scale(table.step(index));
    if !step.is_finite() || step <= 0.0 {
        return Err(invalid.clone());
    }
    Ok((decade, index, step))
}

fn finish(lower: f64, upper: f64, splits: f64, search_step: f64, status: SearchStatus) -> ScaleOutcome {
    let scheme = TickScheme { lower, upper, step: (upper - lower) / splits };
    ScaleOutcome { scheme, status, search_step }
}

/// Nice bounds for `[min_value, max_value]` split into `target_splits` intervals,
/// using the canonical magic table and no symmetry.
pub fn auto_lim(
    max_value: f64,
    min_value: f64,
    target_splits: usize,
    allow_deviation: bool,
) -> Result<ScaleOutcome, ScaleError> {
    let options = ScaleOptions { splits: target_splits, allow_deviation, ..ScaleOptions::default() };
    AxisScaler::new(options)?.scale(max_value, min_value)
}
