//! Physical kinds
//!
//! A dimension is fixed when a quantity is constructed and never inferred from
//! its unit: `kJ/kmol-C` is a valid unit of both molar heat capacity and molar
//! entropy, and the two stay distinct.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::UnitError;

/// The physical kind a quantity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Area,
    Volume,
    Time,
    Mass,
    Force,
    Substance,
    Energy,
    Velocity,
    Temperature,
    DeltaTemperature,
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
    StandardGasFlow,
    KinematicViscosity,
    MolarVolume,
    MolecularWeight,
    Fraction,
    Dimensionless,
}

impl Dimension {
    /// Every dimension, in declaration order
    pub const ALL: [Dimension; 35] = [
        Dimension::Length,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Time,
        Dimension::Mass,
        Dimension::Force,
        Dimension::Substance,
        Dimension::Energy,
        Dimension::Velocity,
        Dimension::Temperature,
        Dimension::DeltaTemperature,
        Dimension::Pressure,
        Dimension::VolumeFlow,
        Dimension::MassDensity,
        Dimension::HeatFlow,
        Dimension::MolarFlow,
        Dimension::MassFlow,
        Dimension::MolarDensity,
        Dimension::MolarHeatCapacity,
        Dimension::MolarEntropy,
        Dimension::MolarHeat,
        Dimension::MolarEnthalpy,
        Dimension::ThermalConductivity,
        Dimension::Viscosity,
        Dimension::SurfaceTension,
        Dimension::MassHeatCapacity,
        Dimension::MassEntropy,
        Dimension::MassHeat,
        Dimension::MassEnthalpy,
        Dimension::StandardGasFlow,
        Dimension::KinematicViscosity,
        Dimension::MolarVolume,
        Dimension::MolecularWeight,
        Dimension::Fraction,
        Dimension::Dimensionless,
    ];

    /// The snake_case name of this dimension
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Time => "time",
            Dimension::Mass => "mass",
            Dimension::Force => "force",
            Dimension::Substance => "substance",
            Dimension::Energy => "energy",
            Dimension::Velocity => "velocity",
            Dimension::Temperature => "temperature",
            Dimension::DeltaTemperature => "delta_temperature",
            Dimension::Pressure => "pressure",
            Dimension::VolumeFlow => "volume_flow",
            Dimension::MassDensity => "mass_density",
            Dimension::HeatFlow => "heat_flow",
            Dimension::MolarFlow => "molar_flow",
            Dimension::MassFlow => "mass_flow",
            Dimension::MolarDensity => "molar_density",
            Dimension::MolarHeatCapacity => "molar_heat_capacity",
            Dimension::MolarEntropy => "molar_entropy",
            Dimension::MolarHeat => "molar_heat",
            Dimension::MolarEnthalpy => "molar_enthalpy",
            Dimension::ThermalConductivity => "thermal_conductivity",
            Dimension::Viscosity => "viscosity",
            Dimension::SurfaceTension => "surface_tension",
            Dimension::MassHeatCapacity => "mass_heat_capacity",
            Dimension::MassEntropy => "mass_entropy",
            Dimension::MassHeat => "mass_heat",
            Dimension::MassEnthalpy => "mass_enthalpy",
            Dimension::StandardGasFlow => "standard_gas_flow",
            Dimension::KinematicViscosity => "kinematic_viscosity",
            Dimension::MolarVolume => "molar_volume",
            Dimension::MolecularWeight => "molecular_weight",
            Dimension::Fraction => "fraction",
            Dimension::Dimensionless => "dimensionless",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnitError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Dimension::ALL.len());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("molar_flow".parse::<Dimension>().unwrap(), Dimension::MolarFlow);
        assert_eq!(" pressure ".parse::<Dimension>().unwrap(), Dimension::Pressure);
        assert!(matches!(
            "flux_capacitance".parse::<Dimension>(),
            Err(UnitError::UnknownDimension(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DeltaTemperature), "delta_temperature");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Dimension::MolarHeatCapacity).unwrap();
        assert_eq!(json, "\"molar_heat_capacity\"");
        let back: Dimension = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Dimension::MolarHeatCapacity);
    }
}
