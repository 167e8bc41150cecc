// File: crates/axis-core/tests/ticks.rs
// Purpose: Tick layout for schemes produced by the scaler and for fixed schemes.

use axis_core::{auto_lim, ScaleError, TickScheme};

#[test]
fn majors_and_minors_alternate() {
    let scheme = auto_lim(287.0, 12.0, 4, false).unwrap().scheme;
    let ticks: Vec<_> = scheme.ticks().collect();
    assert_eq!(ticks.len(), 9);
    assert_eq!(scheme.major_ticks(), vec![0.0, 80.0, 160.0, 240.0, 320.0]);

    let minors: Vec<f64> = ticks.iter().filter(|t| !t.is_major()).map(|t| t.value).collect();
    assert_eq!(minors, vec![40.0, 120.0, 200.0, 280.0]);
    assert_eq!(scheme.minor_step(), 40.0);
}

#[test]
fn decimal_steps_keep_the_upper_bound() {
    let scheme = auto_lim(1.0, 0.0, 4, false).unwrap().scheme;
    let majors = scheme.major_ticks();
    assert_eq!(majors.len(), 5);
    let want = [0.0, 0.3, 0.6, 0.9, 1.2];
    for (got, want) in majors.iter().zip(want) {
        assert!((got - want).abs() < 1e-12, "{got} vs {want}");
    }
}

#[test]
fn ticks_are_sorted_and_inside_the_axis() {
    let scheme = auto_lim(12.5, -7.25, 4, false).unwrap().scheme;
    let ticks: Vec<_> = scheme.ticks().collect();
    assert_eq!(ticks.first().map(|t| t.value), Some(scheme.lower));
    for pair in ticks.windows(2) {
        assert!(pair[0].value < pair[1].value);
    }
    let last = ticks.last().unwrap().value;
    assert!((last - scheme.upper).abs() < 1e-9);
}

#[test]
fn uneven_fixed_scheme_stops_before_upper() {
    let scheme = TickScheme::try_new(0.0, 10.0, 4.0).unwrap();
    assert!(!scheme.divides_evenly());
    assert_eq!(scheme.major_ticks(), vec![0.0, 4.0, 8.0]);
    // Minor ticks at 2.0 spacing reach 10.0.
    assert_eq!(scheme.ticks().last().map(|t| (t.value, t.level)), Some((10.0, 1)));
}

#[test]
fn iterator_reports_exact_length() {
    let scheme = TickScheme::try_new(-60.0, 0.0, 15.0).unwrap();
    let iter = scheme.ticks();
    assert_eq!(iter.len(), 9);
    assert_eq!(scheme.split_count(), 4);
}

#[test]
fn invalid_fixed_schemes_are_rejected() {
    assert!(matches!(TickScheme::try_new(5.0, 1.0, 1.0), Err(ScaleError::InvalidTickScheme { .. })));
    assert!(TickScheme::try_new(0.0, 1.0, 0.0).is_err());
    assert!(TickScheme::try_new(0.0, 1.0, -0.5).is_err());
    assert!(TickScheme::try_new(0.0, f64::NAN, 0.5).is_err());
}
