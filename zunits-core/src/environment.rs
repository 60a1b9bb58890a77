//! Reference conditions consumed by gauge-pressure and standard-volume conversions
//!
//! [`Environment`] is a plain value: conversions that depend on it take it by
//! reference, so they are reproducible without touching process state. The
//! process-wide instance behind [`global`] is a convenience for callers that do
//! not thread their own. It starts from defaults on every process start.

use std::sync::{LazyLock, PoisonError, RwLock};
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::constants::{
    DEFAULT_ATMOSPHERIC_PRESSURE, DEFAULT_STANDARD_PRESSURE, DEFAULT_STANDARD_TEMPERATURE,
    NORMAL_PRESSURE, NORMAL_TEMPERATURE,
};
use crate::UnitError;

/// Environment variable overriding the atmospheric pressure (Pa)
pub const ATMOSPHERIC_PRESSURE_VAR: &str = "ZUNITS_ATMOSPHERIC_PRESSURE";
/// Environment variable overriding the standard temperature (K)
pub const STANDARD_TEMPERATURE_VAR: &str = "ZUNITS_STANDARD_TEMPERATURE";
/// Environment variable overriding the standard pressure (Pa)
pub const STANDARD_PRESSURE_VAR: &str = "ZUNITS_STANDARD_PRESSURE";

/// Standard temperature (K) and pressure (Pa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardConditions {
    pub temperature: f64,
    pub pressure: f64,
}

/// Reference values for non-linear unit families
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    atmospheric_pressure: f64,
    standard_temperature: f64,
    standard_pressure: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            atmospheric_pressure: DEFAULT_ATMOSPHERIC_PRESSURE,
            standard_temperature: DEFAULT_STANDARD_TEMPERATURE,
            standard_pressure: DEFAULT_STANDARD_PRESSURE,
        }
    }
}

fn checked(field: &'static str, value: f64) -> Result<f64, UnitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(UnitError::InvalidEnvironment { field, value })
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local atmospheric pressure in Pa, the zero point of gauge units
    pub fn atmospheric_pressure(&self) -> f64 {
        self.atmospheric_pressure
    }

    /// Reference temperature of standard volumes in K
    pub fn standard_temperature(&self) -> f64 {
        self.standard_temperature
    }

    /// Reference pressure of standard volumes in Pa
    pub fn standard_pressure(&self) -> f64 {
        self.standard_pressure
    }

    pub fn standard_conditions(&self) -> StandardConditions {
        StandardConditions {
            temperature: self.standard_temperature,
            pressure: self.standard_pressure,
        }
    }

    pub fn set_atmospheric_pressure(&mut self, pressure: f64) -> Result<(), UnitError> {
        self.atmospheric_pressure = checked("atmospheric_pressure", pressure)?;
        Ok(())
    }

    pub fn set_standard_temperature(&mut self, temperature: f64) -> Result<(), UnitError> {
        self.standard_temperature = checked("standard_temperature", temperature)?;
        Ok(())
    }

    pub fn set_standard_pressure(&mut self, pressure: f64) -> Result<(), UnitError> {
        self.standard_pressure = checked("standard_pressure", pressure)?;
        Ok(())
    }

    /// Set both standard conditions; neither changes unless both are valid
    pub fn set_standard_conditions(&mut self, temperature: f64, pressure: f64) -> Result<(), UnitError> {
        let temperature = checked("standard_temperature", temperature)?;
        let pressure = checked("standard_pressure", pressure)?;
        self.standard_temperature = temperature;
        self.standard_pressure = pressure;
        Ok(())
    }

    /// Builder: atmospheric pressure in Pa
    pub fn with_atmospheric_pressure(mut self, pressure: f64) -> Result<Self, UnitError> {
        self.set_atmospheric_pressure(pressure)?;
        Ok(self)
    }

    /// Builder: standard temperature in K
    pub fn with_standard_temperature(mut self, temperature: f64) -> Result<Self, UnitError> {
        self.set_standard_temperature(temperature)?;
        Ok(self)
    }

    /// Builder: standard pressure in Pa
    pub fn with_standard_pressure(mut self, pressure: f64) -> Result<Self, UnitError> {
        self.set_standard_pressure(pressure)?;
        Ok(self)
    }

    /// Standard conditions equal to normal conditions (0 °C, 1 atm)
    pub fn normal() -> Self {
        Environment {
            standard_temperature: NORMAL_TEMPERATURE,
            standard_pressure: NORMAL_PRESSURE,
            ..Self::default()
        }
    }

    /// Restore every field to its documented default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field, for values that bypassed the setters
    pub fn validate(&self) -> Result<(), UnitError> {
        checked("atmospheric_pressure", self.atmospheric_pressure)?;
        checked("standard_temperature", self.standard_temperature)?;
        checked("standard_pressure", self.standard_pressure)?;
        Ok(())
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        let env: Environment = serde_json::from_str(json)
            .map_err(|e| UnitError::Config(format!("invalid environment JSON: {}", e)))?;
        env.validate()?;
        Ok(env)
    }

    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string(self)
            .map_err(|e| UnitError::Config(format!("cannot serialize environment: {}", e)))
    }

    /// Read overrides from `ZUNITS_*` process environment variables
    pub fn from_vars() -> Result<Self, UnitError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from a variable lookup; absent names keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, UnitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| -> Result<Option<f64>, UnitError> {
            match lookup(name) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| UnitError::Config(format!("{}: '{}' is not a number", name, raw))),
            }
        };

        let mut env = Self::default();
        if let Some(p) = read(ATMOSPHERIC_PRESSURE_VAR)? {
            env.set_atmospheric_pressure(p)?;
        }
        if let Some(t) = read(STANDARD_TEMPERATURE_VAR)? {
            env.set_standard_temperature(t)?;
        }
        if let Some(p) = read(STANDARD_PRESSURE_VAR)? {
            env.set_standard_pressure(p)?;
        }
        Ok(env)
    }
}

static GLOBAL: LazyLock<RwLock<Environment>> = LazyLock::new(|| RwLock::new(Environment::default()));

/// Snapshot of the process-wide environment
pub fn global() -> Environment {
    *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

/// Mutate the process-wide environment; changes are kept only if `f` succeeds
/// and the result validates
pub fn update<F>(f: F) -> Result<(), UnitError>
where
    F: FnOnce(&mut Environment) -> Result<(), UnitError>,
{
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    let mut next = *guard;
    f(&mut next)?;
    next.validate()?;
    *guard = next;
    log_change("updated", &next);
    Ok(())
}

/// Replace the process-wide environment
pub fn replace(env: Environment) -> Result<(), UnitError> {
    env.validate()?;
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    *guard = env;
    log_change("replaced", &env);
    Ok(())
}

/// Restore the process-wide environment to defaults
pub fn reset() {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    guard.reset();
    log_change("reset", &guard);
}

fn log_change(action: &str, env: &Environment) {
    debug!(
        action,
        atmospheric_pressure = env.atmospheric_pressure,
        standard_temperature = env.standard_temperature,
        standard_pressure = env.standard_pressure,
        "environment changed"
    );
}
