// File: crates/axis-core/src/error.rs
// Summary: Error types for axis scaling and limit configuration.

use std::path::PathBuf;

/// Errors raised while computing or validating a tick scheme.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    /// Degenerate, inverted or non-finite data range. Also covers a decade
    /// or step that over/underflows for pathological magnitudes.
    #[error("invalid data range [{min}, {max}]: expected finite values with min < max")]
    InvalidRange { min: f64, max: f64 },

    #[error("split count must be at least 1, got {0}")]
    InvalidSplitCount(usize),

    /// No table entry lies above `raw_gap / decade`.
    #[error("no magic step above {ratio} (largest table entry is {largest})")]
    NoMagicStep { ratio: f64, largest: f64 },

    #[error("invalid magic step table: {0}")]
    InvalidMagicTable(&'static str),

    #[error("invalid tick scheme [{lower}, {upper}] step {step}: expected finite lower < upper and step > 0")]
    InvalidTickScheme { lower: f64, upper: f64, step: f64 },
}

impl ScaleError {
    /// True when the caller handed in a range that cannot be scaled.
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, ScaleError::InvalidRange { .. })
    }
}

/// Errors raised while loading a limits configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}
