//! zunits - Physical quantities and unit conversion for chemical engineering
//!
//! Values are bound to a unit of one [`Dimension`] and convert only within it,
//! always through the dimension's base unit. Two unit families read reference
//! conditions from an [`Environment`]:
//! - gauge pressures (`kPag`, `psig`, ...) are offset by the atmospheric pressure
//! - standard volumes (`Sm3`, `Sm3/h`, ...) scale with the standard temperature
//!   and pressure through the ideal-gas relation
//!
//! Plain conversions use a snapshot of the process-wide environment in [`env`];
//! the `*_with` variants take one explicitly.
//!
//! Dimensions (base unit):
//! - Length (m), Area (m2), Volume (m3), Time (s), Mass (kg), Force (N)
//! - Substance (kmol), Energy (kJ), Velocity (m/s)
//! - Temperature (K), DeltaTemperature (C), Pressure (Pa)
//! - VolumeFlow (m3/s), MassFlow (kg/s), MolarFlow (kmol/s), HeatFlow (kJ/s)
//! - MassDensity, MolarDensity, MolarVolume, MolecularWeight
//! - Molar and mass heat capacity, entropy, heat and enthalpy
//! - ThermalConductivity, Viscosity, KinematicViscosity, SurfaceTension
//! - StandardGasFlow, Fraction, Dimensionless

mod unit;
mod reference;
mod registry;
mod units;
mod convert;
mod quantity;
mod kinds;
mod parse;
mod format;

pub use zunits_core::{codes, constants, Dimension, Environment, StandardConditions, UnitError};
pub use zunits_core::environment as env;
pub use unit::{quick_symbol, superscript_symbol, Unit, UnitKind, UnitStyle};
pub use reference::{gauge_offset, standard_volume_ratio};
pub use registry::{UnitRegistry, UNITS};
pub use convert::{convert, convert_between, convert_with};
pub use quantity::Quantity;
pub use kinds::*;
pub use parse::parse_quantity;
pub use format::FormatSpec;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::convert::convert;
    pub use crate::{env, Dimension, Environment, FormatSpec, Quantity, UnitError, UNITS};
    pub use crate::kinds::*;
}
