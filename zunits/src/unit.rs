//! Unit representation with conversion parameters

use std::fmt;
use serde::{Serialize, Deserialize};
use zunits_core::{Dimension, Environment, UnitError};
use crate::reference;

/// How a unit maps onto its dimension's base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// `base = value * scale`; also used for temperature differences
    Linear,
    /// `base = value * scale + offset` with a fixed offset (point temperatures)
    Affine,
    /// Pressure above the current atmospheric pressure
    Gauge,
    /// Gas volume at the current standard temperature and pressure
    StandardVolume,
}

/// Rendering of a unit symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStyle {
    /// `kJ/kmol-C`: no parentheses, `-` for products, powers as plain digits
    Quick,
    /// `kJ/(kmol*C)`: the defining expression as registered
    Expression,
}

/// A named unit of one dimension
///
/// Only serialized; units are loaded by symbol through the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical symbol (quick style), unique within the dimension
    pub symbol: String,
    /// Defining expression, e.g. `kJ/(kmol*C)` or `m**3`
    pub expression: String,
    /// The dimension this unit measures
    pub dimension: Dimension,
    /// Factor to the base unit; for standard volumes, the factor at normal conditions
    pub scale: f64,
    /// Fixed additive term in base units (affine units only)
    pub offset: f64,
    pub kind: UnitKind,
}

impl Unit {
    fn build(
        dimension: Dimension,
        expression: &str,
        scale: f64,
        offset: f64,
        kind: UnitKind,
    ) -> Result<Self, UnitError> {
        let expression: String = expression.split_whitespace().collect();
        if !scale.is_finite() || scale == 0.0 {
            return Err(UnitError::invalid_definition(expression, "scale must be finite and non-zero"));
        }
        if !offset.is_finite() {
            return Err(UnitError::invalid_definition(expression, "offset must be finite"));
        }
        Ok(Unit {
            symbol: quick_symbol(&expression),
            expression,
            dimension,
            scale,
            offset,
            kind,
        })
    }

    /// The identity unit of a dimension
    pub fn base(dimension: Dimension, expression: &str) -> Self {
        Unit {
            symbol: quick_symbol(expression),
            expression: expression.split_whitespace().collect(),
            dimension,
            scale: 1.0,
            offset: 0.0,
            kind: UnitKind::Linear,
        }
    }

    pub fn linear(dimension: Dimension, expression: &str, scale: f64) -> Result<Self, UnitError> {
        Self::build(dimension, expression, scale, 0.0, UnitKind::Linear)
    }

    pub fn affine(dimension: Dimension, expression: &str, scale: f64, offset: f64) -> Result<Self, UnitError> {
        Self::build(dimension, expression, scale, offset, UnitKind::Affine)
    }

    /// A gauge unit sharing `scale` with its absolute counterpart
    pub fn gauge(dimension: Dimension, expression: &str, scale: f64) -> Result<Self, UnitError> {
        Self::build(dimension, expression, scale, 0.0, UnitKind::Gauge)
    }

    /// A standard-volume unit; `normal_scale` is its factor at 0 °C and 1 atm
    pub fn standard_volume(dimension: Dimension, expression: &str, normal_scale: f64) -> Result<Self, UnitError> {
        Self::build(dimension, expression, normal_scale, 0.0, UnitKind::StandardVolume)
    }

    /// Create a unit of any kind
    pub fn with_kind(
        dimension: Dimension,
        expression: &str,
        scale: f64,
        offset: f64,
        kind: UnitKind,
    ) -> Result<Self, UnitError> {
        match kind {
            UnitKind::Affine => Self::build(dimension, expression, scale, offset, kind),
            _ if offset != 0.0 => Err(UnitError::invalid_definition(
                expression,
                "only affine units carry a fixed offset",
            )),
            _ => Self::build(dimension, expression, scale, 0.0, kind),
        }
    }

    /// Check if this unit converts to base as the identity
    pub fn is_identity(&self) -> bool {
        self.kind == UnitKind::Linear && self.scale == 1.0 && self.offset == 0.0
    }

    /// Check if conversions through this unit read the environment
    pub fn depends_on_environment(&self) -> bool {
        matches!(self.kind, UnitKind::Gauge | UnitKind::StandardVolume)
    }

    /// Check if two units measure the same dimension
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Multiplicative factor in effect under `env`
    pub fn scale_in(&self, env: &Environment) -> f64 {
        match self.kind {
            UnitKind::StandardVolume => self.scale / reference::standard_volume_ratio(env),
            _ => self.scale,
        }
    }

    /// Additive term in effect under `env`
    pub fn offset_in(&self, env: &Environment) -> f64 {
        match self.kind {
            UnitKind::Affine => self.offset,
            UnitKind::Gauge => reference::gauge_offset(env),
            UnitKind::Linear | UnitKind::StandardVolume => 0.0,
        }
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64, env: &Environment) -> f64 {
        value * self.scale_in(env) + self.offset_in(env)
    }

    /// Convert a base-unit value to this unit
    pub fn from_base(&self, base: f64, env: &Environment) -> f64 {
        (base - self.offset_in(env)) / self.scale_in(env)
    }

    /// Symbol rendered in `style`
    pub fn styled(&self, style: UnitStyle) -> &str {
        match style {
            UnitStyle::Quick => &self.symbol,
            UnitStyle::Expression => &self.expression,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.expression)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}

/// Quick-style symbol of an expression: `kJ/(kmol*C)` becomes `kJ/kmol-C`
pub fn quick_symbol(expression: &str) -> String {
    expression
        .split_whitespace()
        .collect::<String>()
        .replace("**", "")
        .replace('*', "-")
        .replace(['(', ')'], "")
}

/// Superscript form of an expression: `m**3/h` becomes `m³/h`
pub fn superscript_symbol(expression: &str) -> String {
    let compact: String = expression.split_whitespace().collect();
    quick_symbol(&compact.replace("**2", "²").replace("**3", "³"))
}
