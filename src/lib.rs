//! axis-math: small numeric helpers for axis-driven UI layers.
//!
//! The crate covers clamping a value into a range, producing rounded tick
//! positions along an axis, and measuring the widest of a set of labels.
//! Everything is pure and synchronous; the UI that consumes these values
//! stays outside this crate.

pub mod config;
pub mod core;
pub mod error;
pub mod telemetry;

pub use config::{AxisTickConfig, TemperatureUnit};
pub use crate::core::{HasWidth, LabelExtent, bound, intervals, max_width, round_half_up};
pub use error::{AxisError, AxisResult};
