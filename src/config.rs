use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{bound, intervals};
use crate::error::{AxisError, AxisResult};

/// Display unit for a temperature axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Persistable description of a tick axis, e.g. the temperature axis of a
/// fan curve editor.
///
/// Every field is defaulted so partial JSON documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTickConfig {
    #[serde(default = "default_lower")]
    pub lower: f64,
    #[serde(default = "default_upper")]
    pub upper: f64,
    #[serde(default = "default_delta")]
    pub delta: u32,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl Default for AxisTickConfig {
    fn default() -> Self {
        Self::new(default_lower(), default_upper(), default_delta())
    }
}

impl AxisTickConfig {
    #[must_use]
    pub fn new(lower: f64, upper: f64, delta: u32) -> Self {
        Self {
            lower,
            upper,
            delta,
            unit: TemperatureUnit::default(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Rejects configs that cannot describe a usable axis.
    ///
    /// Stricter than [`intervals`]: an inverted range is an error here.
    pub fn validate(self) -> AxisResult<()> {
        if self.delta == 0 {
            return Err(AxisError::InvalidArgument(
                "axis tick delta must be > 0".to_owned(),
            ));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(AxisError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        if self.lower > self.upper {
            return Err(AxisError::InvalidArgument(format!(
                "axis range is inverted: lower={} upper={}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }

    pub fn ticks(self) -> AxisResult<Vec<f64>> {
        self.validate()?;
        intervals(self.lower, self.upper, self.delta)
    }

    pub fn tick_labels(self) -> AxisResult<Vec<String>> {
        let suffix = self.unit.suffix();
        Ok(self
            .ticks()?
            .into_iter()
            .map(|tick| format!("{tick}{suffix}"))
            .collect())
    }

    /// Clamps a value into the configured range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        bound(self.lower, value, self.upper)
    }

    /// Serializes config to pretty JSON for settings files.
    pub fn to_json_pretty(self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize axis config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse axis config: {e}")))?;
        debug!(
            lower = config.lower,
            upper = config.upper,
            delta = config.delta,
            unit = ?config.unit,
            "loaded axis tick config"
        );
        Ok(config)
    }
}

fn default_lower() -> f64 {
    30.0
}

fn default_upper() -> f64 {
    90.0
}

fn default_delta() -> u32 {
    10
}
