//! Quantity type - a value bound to a unit of one dimension

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};
use serde::{Serialize, Deserialize};
use zunits_core::{environment, Dimension, Environment, UnitError};
use crate::convert::convert_between;
use crate::format::FormatSpec;
use crate::parse::parse_quantity;
use crate::registry::UNITS;
use crate::unit::Unit;

const RELATIVE_TOLERANCE: f64 = 1e-9;
const ABSOLUTE_TOLERANCE: f64 = 1e-12;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

/// A physical quantity: a numeric value with an associated unit
///
/// The dimension comes from the unit and never changes; conversions return a
/// new quantity. Serialized as `{value, dimension, unit}` with the unit symbol
/// resolved through [`UNITS`] on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "QuantityRecord", into = "QuantityRecord")]
pub struct Quantity {
    /// The numeric value, in `unit`
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

/// Wire form of a [`Quantity`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuantityRecord {
    value: f64,
    dimension: Dimension,
    unit: String,
}

impl TryFrom<QuantityRecord> for Quantity {
    type Error = UnitError;

    fn try_from(record: QuantityRecord) -> Result<Self, Self::Error> {
        Quantity::of(record.dimension, record.value, &record.unit)
    }
}

impl From<Quantity> for QuantityRecord {
    fn from(q: Quantity) -> Self {
        QuantityRecord {
            value: q.value,
            dimension: q.unit.dimension,
            unit: q.unit.symbol,
        }
    }
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// A value in a registered unit of `dimension`
    pub fn of(dimension: Dimension, value: f64, symbol: &str) -> Result<Self, UnitError> {
        let unit = UNITS.resolve(dimension, symbol)?;
        Ok(Quantity::new(value, unit.clone()))
    }

    /// A value in the base unit of `dimension`
    pub fn base(dimension: Dimension, value: f64) -> Result<Self, UnitError> {
        let unit = UNITS.base_unit(dimension)?;
        Ok(Quantity::new(value, unit.clone()))
    }

    /// Parse a literal such as `"100 kPa"`; a missing unit means the base unit
    pub fn parse(dimension: Dimension, input: &str) -> Result<Self, UnitError> {
        let (value, symbol) = parse_quantity(input)?;
        match symbol {
            None => Self::base(dimension, value),
            Some(symbol) => {
                let unit = UNITS.resolve(dimension, symbol).map_err(|_| {
                    UnitError::parse(input, format!("unknown unit '{}' for {}", symbol, dimension))
                })?;
                Ok(Quantity::new(value, unit.clone()))
            }
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension
    }

    /// Registered symbols of this quantity's dimension
    pub fn units(&self) -> Vec<&'static str> {
        UNITS.units_of(self.dimension())
    }

    pub fn base_unit(&self) -> Result<&'static Unit, UnitError> {
        UNITS.base_unit(self.dimension())
    }

    /// Check if two quantities have the same dimension
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.unit.is_compatible(&other.unit)
    }

    /// Convert to another unit under the process-wide environment
    pub fn to(&self, symbol: &str) -> Result<Quantity, UnitError> {
        self.to_with(symbol, &environment::global())
    }

    /// Convert to another unit under `env`
    pub fn to_with(&self, symbol: &str, env: &Environment) -> Result<Quantity, UnitError> {
        let target = UNITS.resolve(self.dimension(), symbol)?;
        self.convert_to(target, env)
    }

    /// Convert to the base unit under the process-wide environment
    pub fn to_base(&self) -> Result<Quantity, UnitError> {
        self.to_base_with(&environment::global())
    }

    pub fn to_base_with(&self, env: &Environment) -> Result<Quantity, UnitError> {
        self.convert_to(self.base_unit()?, env)
    }

    /// Convert to an explicit unit
    pub fn convert_to(&self, target: &Unit, env: &Environment) -> Result<Quantity, UnitError> {
        let value = convert_between(self.value, &self.unit, target, env)?;
        Ok(Quantity::new(value, target.clone()))
    }

    /// Value in the dimension's base unit under `env`
    pub fn base_value(&self, env: &Environment) -> f64 {
        self.unit.to_base(self.value, env)
    }

    fn same_dimension(&self, other: &Quantity) -> Result<(), UnitError> {
        if self.is_compatible(other) {
            Ok(())
        } else {
            Err(UnitError::mismatch(self.dimension(), other.dimension()))
        }
    }

    /// Sum in this quantity's unit
    pub fn add(&self, other: &Quantity, env: &Environment) -> Result<Quantity, UnitError> {
        self.same_dimension(other)?;
        let rhs = convert_between(other.value, &other.unit, &self.unit, env)?;
        Ok(Quantity::new(self.value + rhs, self.unit.clone()))
    }

    /// Difference in this quantity's unit
    pub fn sub(&self, other: &Quantity, env: &Environment) -> Result<Quantity, UnitError> {
        self.same_dimension(other)?;
        let rhs = convert_between(other.value, &other.unit, &self.unit, env)?;
        Ok(Quantity::new(self.value - rhs, self.unit.clone()))
    }

    /// Order two quantities by their base values; near-equal values are `Equal`
    pub fn compare(&self, other: &Quantity, env: &Environment) -> Result<Ordering, UnitError> {
        self.same_dimension(other)?;
        let a = self.base_value(env);
        let b = other.base_value(env);
        if close(a, b) {
            Ok(Ordering::Equal)
        } else {
            Ok(a.total_cmp(&b))
        }
    }

    pub fn approx_eq(&self, other: &Quantity, env: &Environment) -> Result<bool, UnitError> {
        Ok(self.compare(other, env)? == Ordering::Equal)
    }

    /// Render with a format token (`""`, `"u"`, `"uq"`, `"up"`, optionally `.N` first)
    pub fn format(&self, token: &str) -> Result<String, UnitError> {
        let spec: FormatSpec = token.parse()?;
        Ok(self.render(&spec))
    }

    pub fn render(&self, spec: &FormatSpec) -> String {
        spec.render(self.value, &self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut spec = FormatSpec::quick();
        spec.precision = f.precision();
        write!(f, "{}", self.render(&spec))
    }
}

/// Equal within tolerance after conversion to base, under the process-wide
/// environment; quantities of different dimensions are never equal.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &environment::global()).unwrap_or(false)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other, &environment::global()).ok()
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }
}
