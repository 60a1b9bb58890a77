//! Conversion engine
//!
//! Every conversion is routed through the dimension's base unit: the source
//! unit's forward transform, then the target unit's inverse.

use tracing::trace;
use zunits_core::{environment, Environment, UnitError};
use crate::quantity::Quantity;
use crate::registry::UNITS;
use crate::unit::{Unit, UnitKind};

/// Convert a value between two units of one dimension
pub fn convert_between(value: f64, from: &Unit, to: &Unit, env: &Environment) -> Result<f64, UnitError> {
    if !from.is_compatible(to) {
        return Err(UnitError::mismatch(from.dimension, to.dimension));
    }
    if from == to {
        return Ok(value);
    }

    let base = from.to_base(value, env);
    let result = to.from_base(base, env);
    if from.depends_on_environment() || to.depends_on_environment() {
        trace_reference(from, to, env, value, result);
    }
    Ok(result)
}

fn trace_reference(from: &Unit, to: &Unit, env: &Environment, value: f64, result: f64) {
    let gauge = from.kind == UnitKind::Gauge || to.kind == UnitKind::Gauge;
    if gauge {
        trace!(
            from = %from,
            to = %to,
            value,
            result,
            atmospheric_pressure = env.atmospheric_pressure(),
            "gauge conversion"
        );
    } else {
        trace!(
            from = %from,
            to = %to,
            value,
            result,
            standard_temperature = env.standard_temperature(),
            standard_pressure = env.standard_pressure(),
            "standard volume conversion"
        );
    }
}

/// Convert `value` between two unit symbols under the process-wide environment
///
/// The dimension is the first one, in declaration order, that registers both
/// symbols, so `convert(1.0, "C", "F")` converts point temperatures.
pub fn convert(value: f64, from: &str, to: &str) -> Result<Quantity, UnitError> {
    convert_with(value, from, to, &environment::global())
}

/// Convert `value` between two unit symbols under `env`
pub fn convert_with(value: f64, from: &str, to: &str, env: &Environment) -> Result<Quantity, UnitError> {
    let dimension = UNITS.find_common_dimension(from, to)?;
    let from = UNITS.resolve(dimension, from)?;
    let to = UNITS.resolve(dimension, to)?;
    let converted = convert_between(value, from, to, env)?;
    Ok(Quantity::new(converted, to.clone()))
}
