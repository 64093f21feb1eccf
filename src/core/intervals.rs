use tracing::{trace, warn};

use crate::error::{AxisError, AxisResult};

/// Largest magnitude at which every integer is exactly representable in `f64`.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `-2.5` rounds to `-2.0` and `2.5` to `3.0`, unlike [`f64::round`].
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Builds the tick positions for an axis spanning `lower..upper`.
///
/// The result always starts with `lower` and ends with `upper`. In between
/// come the rounded scan values `round(lower + 1)`, `round(lower + 2)`, ...
/// (while the unrounded scan value stays below `upper`) that are multiples of
/// `delta`. When the last rounded scan value lands on `upper` it is emitted
/// and `upper` is appended again, so `intervals(0.5, 10.0, 5)` yields
/// `[0.5, 5.0, 10.0, 10.0]`.
///
/// `upper <= lower + 1` produces just `[lower, upper]`, including the
/// inverted case `lower > upper`. Bounds beyond the exact integer range of
/// `f64` are only rejected when there is something to scan.
pub fn intervals(lower: f64, upper: f64, delta: u32) -> AxisResult<Vec<f64>> {
    if delta == 0 {
        warn!(lower, upper, "rejecting zero tick delta");
        return Err(AxisError::InvalidArgument(
            "tick delta must be > 0".to_owned(),
        ));
    }
    validate_finite_bound(lower, "lower")?;
    validate_finite_bound(upper, "upper")?;

    let mut ticks = vec![lower];

    // Scan values are lower + 1 + k for k in 0..steps, each strictly below upper.
    let span = upper - lower - 1.0;
    if span > 0.0 {
        validate_exact_bound(lower, "lower")?;
        validate_exact_bound(upper, "upper")?;

        let mut steps = span.ceil() as i64;
        while steps > 0 && lower + 1.0 + (steps - 1) as f64 >= upper {
            steps -= 1;
        }
        while lower + 1.0 + (steps as f64) < upper {
            steps += 1;
        }
        let first = round_half_up(lower + 1.0) as i64;
        let last = first + steps - 1;
        let step = i64::from(delta);

        let remainder = first.rem_euclid(step);
        let mut tick = if remainder == 0 {
            first
        } else {
            first + (step - remainder)
        };
        while tick <= last {
            ticks.push(tick as f64);
            tick += step;
        }
    }

    ticks.push(upper);
    trace!(lower, upper, delta, count = ticks.len(), "built axis intervals");
    Ok(ticks)
}

fn validate_finite_bound(value: f64, name: &'static str) -> AxisResult<()> {
    if !value.is_finite() {
        warn!(bound = name, value, "rejecting non-finite axis bound");
        return Err(AxisError::InvalidData(format!(
            "{name} axis bound must be finite"
        )));
    }
    Ok(())
}

fn validate_exact_bound(value: f64, name: &'static str) -> AxisResult<()> {
    if value.abs() > MAX_EXACT_INTEGER {
        warn!(bound = name, value, "rejecting axis bound outside exact integer range");
        return Err(AxisError::InvalidData(format!(
            "{name} axis bound must be within +/-{MAX_EXACT_INTEGER}"
        )));
    }
    Ok(())
}
