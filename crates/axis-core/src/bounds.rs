// File: crates/axis-core/src/bounds.rs
// Summary: Snap a data range outward to multiples of a candidate step.

/// Bounds `(upper, lower)` for `step` around `[min_value, max_value]`.
///
/// Each side moves one step outward and is then truncated toward zero, so a
/// bound lands one or two steps past the data depending on its sign. This is
/// `f64::trunc`, not `floor`: `-4.33` becomes `-4`, not `-5`.
///
/// A zero extremum pins its bound to zero, since the formula would otherwise
/// add a spare step when the data already sits on a tick line. A bound that
/// snaps to zero is always `+0.0`. With
/// `symmetrical`, bounds that straddle or touch zero are widened to
/// `±max(|upper|, |lower|)`.
pub fn compute_bounds(step: f64, max_value: f64, min_value: f64, symmetrical: bool) -> (f64, f64) {
    let mut upper = (max_value / step + 1.0).trunc() * step;
    let mut lower = (min_value / step - 1.0).trunc() * step;

    // Also folds the -0.0 that truncation leaves on a side snapped to zero.
    if max_value == 0.0 || upper == 0.0 {
        upper = 0.0;
    }
    if min_value == 0.0 || lower == 0.0 {
        lower = 0.0;
    }

    if symmetrical && upper * lower <= 0.0 {
        let reach = upper.abs().max(lower.abs());
        upper = reach;
        lower = -reach;
    }

    (upper, lower)
}
