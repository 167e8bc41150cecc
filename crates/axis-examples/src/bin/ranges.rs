// File: crates/axis-examples/src/bin/ranges.rs
// Summary: Scales a few sample data sets and prints the resulting tick schemes.
//          Optional first argument: path to a limits TOML file.

use anyhow::{Context, Result};
use axis_core::{Extent, LimitsConfig, ScaleOutcome};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match std::env::args().nth(1) {
        Some(path) => LimitsConfig::from_path(&path)
            .with_context(|| format!("failed to load limits config '{path}'"))?,
        None => LimitsConfig::default(),
    };
    let scaler = config.scaler().context("invalid scale options")?;
    info!(splits = scaler.options().splits, "scaling sample data");

    // (label, x samples, y columns)
    let samples: Vec<(&str, Vec<f64>, Vec<Vec<f64>>)> = vec![
        ("absorbance", linspace(200.0, 800.0, 61), vec![curve(61, 0.02, 0.37)]),
        ("shift", linspace(-2.0, 12.5, 30), vec![curve(30, -7.25, 12.5), curve(30, 0.0, 4.0)]),
        ("ecd", linspace(12.0, 287.0, 56), vec![curve(56, -50.0, -2.0)]),
    ];

    for (label, xs, ys) in &samples {
        let x_extent = Extent::from_values(xs.iter().copied())
            .with_context(|| format!("{label}: no finite x samples"))?;
        let y_extent = Extent::from_columns(ys.iter().map(Vec::as_slice))
            .with_context(|| format!("{label}: no finite y samples"))?;

        let x = config
            .x_limit
            .resolve(x_extent, &scaler)
            .with_context(|| format!("{label}: x axis"))?;
        let y = config
            .y_limit
            .resolve(y_extent, &scaler)
            .with_context(|| format!("{label}: y axis"))?;

        println!("{label}");
        print_axis("x", x_extent, &x);
        print_axis("y", y_extent, &y);
    }
    Ok(())
}

fn print_axis(name: &str, data: Extent, out: &ScaleOutcome) {
    let (lower, upper, step) = out.as_tuple();
    println!(
        "  {name}: data [{:.4}, {:.4}] -> axis [{lower}, {upper}] step {step} minor {} ({:?})",
        data.min,
        data.max,
        out.scheme.minor_step(),
        out.status,
    );
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smooth bump spanning `[lo, hi]` over `n` samples.
fn curve(n: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n.max(2) - 1) as f64;
            lo + (hi - lo) * (std::f64::consts::PI * t).sin()
        })
        .collect()
}
