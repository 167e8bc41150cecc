// File: crates/axis-core/src/config.rs
// Summary: TOML-backed limits configuration (scale options plus x/y limit settings).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ScaleError};
use crate::limit::AxisLimit;
use crate::scaler::{AxisScaler, ScaleOptions};

/// Example:
///
/// ```toml
/// x_limit = "auto"
/// y_limit = [0.0, 400.0, 100.0]
///
/// [scale]
/// splits = 5
/// symmetrical = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub x_limit: AxisLimit,
    pub y_limit: AxisLimit,
    pub scale: ScaleOptions,
}

impl LimitsConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.scaler()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn scaler(&self) -> Result<AxisScaler, ScaleError> {
        AxisScaler::new(self.scale.clone())
    }
}
