// File: crates/axis-core/src/lib.rs
// Summary: Core library entry point; exports the axis scaler, tick schemes and limit config.

pub mod bounds;
pub mod config;
pub mod error;
pub mod extent;
pub mod limit;
pub mod magic;
pub mod scaler;
pub mod tick;

pub use bounds::compute_bounds;
pub use config::LimitsConfig;
pub use error::{ConfigError, ScaleError};
pub use extent::Extent;
pub use limit::{AxisLimit, LimitError};
pub use magic::{Decade, MagicTable, CANONICAL_STEPS};
pub use scaler::{auto_lim, AxisScaler, ScaleOptions, ScaleOutcome, SearchStatus, DEFAULT_SPLITS};
pub use tick::{Tick, TickIter, TickScheme, MINOR_DIVISIONS};
