// File: crates/axis-core/src/limit.rs
// Summary: Per-axis limit setting: "auto" (scaled from data) or a fixed [min, max, step].

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::extent::Extent;
use crate::scaler::{AxisScaler, ScaleOutcome, SearchStatus};
use crate::tick::TickScheme;

const AUTO: &str = "auto";

/// Axis limit as written in a config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimit", into = "RawLimit")]
pub enum AxisLimit {
    #[default]
    Auto,
    Fixed(TickScheme),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawLimit {
    Keyword(String),
    Triple(Vec<f64>),
}

#[derive(Debug, thiserror::Error)]
pub enum LimitError {
    #[error("limit must be \"auto\" or a list of three floats [min, max, step], got {0}")]
    Shape(String),
    #[error(transparent)]
    Scheme(#[from] ScaleError),
}

impl TryFrom<RawLimit> for AxisLimit {
    type Error = LimitError;

    fn try_from(raw: RawLimit) -> Result<Self, Self::Error> {
        match raw {
            RawLimit::Keyword(s) if s.eq_ignore_ascii_case(AUTO) => Ok(AxisLimit::Auto),
            RawLimit::Keyword(s) => Err(LimitError::Shape(format!("{s:?}"))),
            RawLimit::Triple(v) => match v.as_slice() {
                &[lower, upper, step] => Ok(AxisLimit::Fixed(TickScheme::try_new(lower, upper, step)?)),
                other => Err(LimitError::Shape(format!("{} values", other.len()))),
            },
        }
    }
}

impl From<AxisLimit> for RawLimit {
    fn from(limit: AxisLimit) -> Self {
        match limit {
            AxisLimit::Auto => RawLimit::Keyword(AUTO.to_string()),
            AxisLimit::Fixed(s) => RawLimit::Triple(vec![s.lower, s.upper, s.step]),
        }
    }
}

impl AxisLimit {
    pub fn is_auto(&self) -> bool {
        matches!(self, AxisLimit::Auto)
    }

    /// Turn the setting into a tick scheme. Fixed limits are passed through;
    /// they report `Exact` only when their span is a whole number of steps.
    pub fn resolve(&self, extent: Extent, scaler: &AxisScaler) -> Result<ScaleOutcome, ScaleError> {
        match *self {
            AxisLimit::Auto => scaler.scale_extent(extent),
            AxisLimit::Fixed(scheme) => {
                let status = if scheme.divides_evenly() {
                    SearchStatus::Exact
                } else {
                    SearchStatus::Approximate
                };
                Ok(ScaleOutcome { scheme, status, search_step: scheme.step })
            }
        }
    }
}
