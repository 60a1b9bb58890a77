//! Physical constants and reference conditions

/// Standard atmosphere (Pa)
pub const ATM: f64 = 101_325.0;

/// Standard gravity (m/s²)
pub const G: f64 = 9.80665;

/// Zero degrees Celsius (K)
pub const T_0C: f64 = 273.15;

/// Reference temperature of normal volumes, 0 °C (K)
pub const NORMAL_TEMPERATURE: f64 = T_0C;

/// Reference pressure of normal volumes (Pa)
pub const NORMAL_PRESSURE: f64 = ATM;

/// Molar volume of an ideal gas at normal conditions (m³/kmol)
pub const NORMAL_MOLAR_VOLUME: f64 = 22.414;

/// Default standard temperature, 20 °C (K)
pub const DEFAULT_STANDARD_TEMPERATURE: f64 = 293.15;

/// Default standard pressure (Pa)
pub const DEFAULT_STANDARD_PRESSURE: f64 = ATM;

/// Default local atmospheric pressure (Pa)
pub const DEFAULT_ATMOSPHERIC_PRESSURE: f64 = ATM;
