//! Thin constructors, one per quantity kind
//!
//! Each kind only binds a [`Dimension`]; the value type is always [`Quantity`].
//!
//! ```ignore
//! let p = Pressure::new(15.0, "psig")?;
//! let t = Temperature::parse("100C")?;
//! ```

use zunits_core::{Dimension, UnitError};
use crate::quantity::Quantity;
use crate::registry::UNITS;

macro_rules! quantity_kinds {
    ($($(#[$meta:meta])* $name:ident,)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $name {
                pub const DIMENSION: Dimension = Dimension::$name;

                /// A value in a registered unit
                pub fn new(value: f64, unit: &str) -> Result<Quantity, UnitError> {
                    Quantity::of(Self::DIMENSION, value, unit)
                }

                /// A value in the base unit
                pub fn base(value: f64) -> Result<Quantity, UnitError> {
                    Quantity::base(Self::DIMENSION, value)
                }

                /// Parse a literal such as `"1.5 km"`
                pub fn parse(input: &str) -> Result<Quantity, UnitError> {
                    Quantity::parse(Self::DIMENSION, input)
                }

                /// Registered unit symbols
                pub fn units() -> Vec<&'static str> {
                    UNITS.units_of(Self::DIMENSION)
                }
            }
        )*
    };
}

quantity_kinds! {
    Length,
    Area,
    Volume,
    Time,
    Mass,
    Force,
    /// Amount of substance, including normal and standard gas volumes
    Substance,
    Energy,
    Velocity,
    /// Point temperature
    Temperature,
    /// Temperature difference
    DeltaTemperature,
    /// Absolute and gauge pressure
    Pressure,
    VolumeFlow,
    MassDensity,
    HeatFlow,
    MolarFlow,
    MassFlow,
    MolarDensity,
    MolarHeatCapacity,
    MolarEntropy,
    MolarHeat,
    MolarEnthalpy,
    ThermalConductivity,
    Viscosity,
    SurfaceTension,
    MassHeatCapacity,
    MassEntropy,
    MassHeat,
    MassEnthalpy,
    /// Gas flow already expressed at standard conditions
    StandardGasFlow,
    KinematicViscosity,
    MolarVolume,
    MolecularWeight,
    Fraction,
    Dimensionless,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use zunits_core::Environment;

    #[test]
    fn test_kinds_bind_their_dimension() {
        assert_eq!(Length::DIMENSION, Dimension::Length);
        assert_eq!(MolarEntropy::DIMENSION, Dimension::MolarEntropy);
        assert_eq!(Pressure::base(1.0).unwrap().dimension(), Dimension::Pressure);
    }

    #[test]
    fn test_every_kind_has_a_base_unit() {
        let bases = [
            Length::base(1.0), Area::base(1.0), Volume::base(1.0), Time::base(1.0),
            Mass::base(1.0), Force::base(1.0), Substance::base(1.0), Energy::base(1.0),
            Velocity::base(1.0), Temperature::base(1.0), DeltaTemperature::base(1.0),
            Pressure::base(1.0), VolumeFlow::base(1.0), MassDensity::base(1.0),
            HeatFlow::base(1.0), MolarFlow::base(1.0), MassFlow::base(1.0),
            MolarDensity::base(1.0), MolarHeatCapacity::base(1.0), MolarEntropy::base(1.0),
            MolarHeat::base(1.0), MolarEnthalpy::base(1.0), ThermalConductivity::base(1.0),
            Viscosity::base(1.0), SurfaceTension::base(1.0), MassHeatCapacity::base(1.0),
            MassEntropy::base(1.0), MassHeat::base(1.0), MassEnthalpy::base(1.0),
            StandardGasFlow::base(1.0), KinematicViscosity::base(1.0), MolarVolume::base(1.0),
            MolecularWeight::base(1.0), Fraction::base(1.0), Dimensionless::base(1.0),
        ];
        assert_eq!(bases.len(), Dimension::ALL.len());
        for q in bases {
            assert!(q.unwrap().unit.is_identity());
        }
    }

    #[test]
    fn test_temperature_parse() {
        let parsed = Temperature::parse("100C").unwrap();
        assert_eq!(parsed, Temperature::new(100.0, "C").unwrap());
        assert_relative_eq!(
            parsed.to_base_with(&Environment::default()).unwrap().value,
            373.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_molar_entropy_format() {
        let s = MolarEntropy::base(100.0).unwrap();
        assert_eq!(s.format("u").unwrap(), "100 kJ/kmol-C");
        assert_eq!(s.format("up").unwrap(), "100 kJ/(kmol*C)");
    }

    #[test]
    fn test_length_against_pressure() {
        let length = Length::new(1.0, "m").unwrap();
        let pressure = Pressure::new(1.0, "kPa").unwrap();
        assert!(matches!(
            length.compare(&pressure, &Environment::default()),
            Err(UnitError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            length.convert_to(&pressure.unit, &Environment::default()),
            Err(UnitError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_gauge_pressure() {
        let p = Pressure::new(1.0, "MPag").unwrap();
        let psi = p.to_with("psi", &Environment::default()).unwrap();
        assert_relative_eq!(psi.value, 159.7337, max_relative = 1e-6);
    }

    #[test]
    fn test_units() {
        assert_eq!(Fraction::units(), vec!["", "%", "ppm"]);
        assert_eq!(KinematicViscosity::units(), vec!["cSt"]);
    }
}
