//! Built-in unit tables, one per dimension
//!
//! Scales are factors to the dimension's base unit. Tables shared by several
//! dimensions (heat capacity and entropy, for instance) are registered once per
//! dimension so the dimensions stay distinct.

use zunits_core::constants::{ATM, G, NORMAL_MOLAR_VOLUME, T_0C};
use zunits_core::{Dimension, UnitError};
use crate::registry::UnitRegistry;
use crate::unit::Unit;

// length (m)
const KM: f64 = 1e3;
const DM: f64 = 1e-1;
const CM: f64 = 1e-2;
const MM: f64 = 1e-3;
const UM: f64 = 1e-6;
const FT: f64 = 0.3048;
const IN: f64 = 0.0254;

// volume (m³)
const LITER: f64 = DM * DM * DM;
const ML: f64 = CM * CM * CM;
const FT3: f64 = FT * FT * FT;
const IN3: f64 = IN * IN * IN;
const GAL: f64 = 231.0 * IN3;
const BBL: f64 = 42.0 * GAL;

// time (s)
const MIN: f64 = 60.0;
const HOUR: f64 = 60.0 * MIN;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;
const YEAR: f64 = 8760.0 * HOUR;
const MONTH: f64 = YEAR / 12.0;

// mass (kg)
const GRAM: f64 = 1e-3;
const TONNE: f64 = 1e3;
const LB: f64 = 0.45359237;

// force (N)
const KGF: f64 = G;
const LBF: f64 = LB * G;

// amount (kmol)
const MOL: f64 = 1e-3;
const NM3: f64 = 1.0 / NORMAL_MOLAR_VOLUME;
const T_20C: f64 = T_0C + 20.0;
const T_60F: f64 = T_0C + (60.0 - 32.0) * 5.0 / 9.0;
const SM3_20C: f64 = NM3 * T_0C / T_20C;
const SM3_60F: f64 = NM3 * T_0C / T_60F;
const SCF: f64 = NM3 * FT3 * T_0C / T_60F;

// energy (kJ)
const CAL: f64 = 4.184e-3;
const KCAL: f64 = 1e3 * CAL;
const BTU: f64 = 1.055056;

// pressure (Pa)
const KPA: f64 = 1e3;
const MPA: f64 = 1e6;
const BAR: f64 = 1e5;
const MBAR: f64 = 1e2;
const KGF_CM2: f64 = KGF / (CM * CM);
const PSI: f64 = LBF / (IN * IN);
const LBF_FT2: f64 = LBF / (FT * FT);
const TORR: f64 = ATM / 760.0;
const INHG_32F: f64 = 3386.389;
const INHG_60F: f64 = 3376.85;

/// Register every built-in table
pub fn register_all(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    length(registry)?;
    area(registry)?;
    volume(registry)?;
    time(registry)?;
    mass(registry)?;
    force(registry)?;
    substance(registry)?;
    energy(registry)?;
    velocity(registry)?;
    temperature(registry)?;
    delta_temperature(registry)?;
    pressure(registry)?;
    volume_flow(registry)?;
    mass_density(registry)?;
    heat_flow(registry)?;
    molar_flow(registry)?;
    mass_flow(registry)?;
    molar_density(registry)?;
    molar_heat_capacity(registry, Dimension::MolarHeatCapacity)?;
    molar_heat_capacity(registry, Dimension::MolarEntropy)?;
    molar_heat(registry, Dimension::MolarHeat)?;
    molar_heat(registry, Dimension::MolarEnthalpy)?;
    thermal_conductivity(registry)?;
    viscosity(registry)?;
    surface_tension(registry)?;
    mass_heat_capacity(registry, Dimension::MassHeatCapacity)?;
    mass_heat_capacity(registry, Dimension::MassEntropy)?;
    mass_heat(registry, Dimension::MassHeat)?;
    mass_heat(registry, Dimension::MassEnthalpy)?;
    standard_gas_flow(registry)?;
    kinematic_viscosity(registry)?;
    molar_volume(registry)?;
    molecular_weight(registry)?;
    fraction(registry)?;
    dimensionless(registry)?;
    Ok(())
}

/// Registration helper bound to one dimension
struct Table<'a> {
    registry: &'a mut UnitRegistry,
    dimension: Dimension,
}

impl<'a> Table<'a> {
    fn new(registry: &'a mut UnitRegistry, dimension: Dimension, base: &str) -> Result<Self, UnitError> {
        registry.register_base(Unit::base(dimension, base))?;
        Ok(Table { registry, dimension })
    }

    fn linear(&mut self, expression: &str, scale: f64) -> Result<(), UnitError> {
        self.registry.register(Unit::linear(self.dimension, expression, scale)?)
    }

    fn affine(&mut self, expression: &str, scale: f64, offset: f64) -> Result<(), UnitError> {
        self.registry.register(Unit::affine(self.dimension, expression, scale, offset)?)
    }

    fn gauge(&mut self, expression: &str, scale: f64) -> Result<(), UnitError> {
        self.registry.register(Unit::gauge(self.dimension, expression, scale)?)
    }

    fn standard(&mut self, expression: &str, normal_scale: f64) -> Result<(), UnitError> {
        self.registry.register(Unit::standard_volume(self.dimension, expression, normal_scale)?)
    }

    fn alias(&mut self, alias: &str, symbol: &str) -> Result<(), UnitError> {
        self.registry.alias(self.dimension, alias, symbol)
    }
}

fn length(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Length, "m")?;
    t.linear("km", KM)?;
    t.linear("dm", DM)?;
    t.linear("cm", CM)?;
    t.linear("mm", MM)?;
    t.linear("um", UM)?;
    t.linear("ft", FT)?;
    t.linear("in", IN)?;

    t.alias("µm", "um")?;
    t.alias("μm", "um")?;
    Ok(())
}

fn area(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Area, "m**2")?;
    t.linear("km**2", KM * KM)?;
    t.linear("dm**2", DM * DM)?;
    t.linear("cm**2", CM * CM)?;
    t.linear("mm**2", MM * MM)?;
    t.linear("um**2", UM * UM)?;
    t.linear("ft**2", FT * FT)?;
    t.linear("in**2", IN * IN)?;
    Ok(())
}

fn volume(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Volume, "m**3")?;
    t.linear("cm**3", CM * CM * CM)?;
    t.linear("mm**3", MM * MM * MM)?;
    t.linear("L", LITER)?;
    t.linear("mL", ML)?;
    t.linear("ft**3", FT3)?;
    t.linear("in**3", IN3)?;
    t.linear("gal", GAL)?;
    t.linear("bbl", BBL)?;
    Ok(())
}

fn time(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Time, "s")?;
    t.linear("min", MIN)?;
    t.linear("hr", HOUR)?;
    t.linear("day", DAY)?;
    t.linear("week", WEEK)?;
    t.linear("yr", YEAR)?;
    t.linear("mon", MONTH)?;

    // flow tables abbreviate hour and day
    t.alias("h", "hr")?;
    t.alias("d", "day")?;
    Ok(())
}

fn mass(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Mass, "kg")?;
    t.linear("g", GRAM)?;
    t.linear("t", TONNE)?;
    t.linear("lb", LB)?;
    Ok(())
}

fn force(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Force, "N")?;
    t.linear("kg*m/s**2", 1.0)?;
    t.linear("kN", 1e3)?;
    t.linear("dyn", 1e-5)?;
    t.linear("kgf", KGF)?;
    t.linear("tonf", TONNE * G)?;
    t.linear("lbf", LBF)?;
    Ok(())
}

fn substance(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Substance, "kmol")?;
    t.linear("mol", MOL)?;
    t.linear("Nm**3", NM3)?;
    t.standard("Sm**3", NM3)?;
    t.linear("Sm**3_20C", SM3_20C)?;
    t.linear("Sm**3_60F", SM3_60F)?;
    t.linear("SCF", SCF)?;
    t.linear("MSCF", 1e3 * SCF)?;
    t.linear("MMSCF", 1e6 * SCF)?;
    Ok(())
}

fn energy(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Energy, "kJ")?;
    t.linear("J", 1e-3)?;
    t.linear("MJ", 1e3)?;
    t.linear("GJ", 1e6)?;
    t.linear("kW*h", HOUR)?;
    t.linear("kW*yr", YEAR)?;
    t.linear("cal", CAL)?;
    t.linear("kcal", KCAL)?;
    t.linear("Mcal", 1e6 * CAL)?;
    t.linear("Gcal", 1e9 * CAL)?;
    t.linear("MMkcal", 1e6 * KCAL)?;
    t.linear("Btu", BTU)?;
    t.linear("MMBtu", 1e6 * BTU)?;
    t.linear("lbf*ft", 1e-3 * LBF * FT)?;
    Ok(())
}

fn velocity(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Velocity, "m/s")?;
    t.linear("m/min", 1.0 / MIN)?;
    t.linear("m/hr", 1.0 / HOUR)?;
    t.linear("km/hr", KM / HOUR)?;
    t.linear("cm/s", CM)?;
    t.linear("ft/s", FT)?;
    t.linear("ft/min", FT / MIN)?;
    t.linear("ft/hr", FT / HOUR)?;
    Ok(())
}

/// Point temperatures: affine, base K
fn temperature(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Temperature, "K")?;
    t.affine("C", 1.0, T_0C)?;
    t.affine("F", 5.0 / 9.0, T_0C - 32.0 * 5.0 / 9.0)?;
    t.affine("R", 5.0 / 9.0, 0.0)?;

    t.alias("°C", "C")?;
    t.alias("°F", "F")?;
    t.alias("degC", "C")?;
    t.alias("degF", "F")?;
    Ok(())
}

/// Temperature differences: the fixed points cancel, so scale only
fn delta_temperature(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::DeltaTemperature, "C")?;
    t.linear("K", 1.0)?;
    t.linear("F", 5.0 / 9.0)?;
    t.linear("R", 5.0 / 9.0)?;

    t.alias("°C", "C")?;
    t.alias("°F", "F")?;
    t.alias("degC", "C")?;
    t.alias("degF", "F")?;
    Ok(())
}

fn pressure(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Pressure, "Pa")?;
    t.linear("kPa", KPA)?;
    t.linear("MPa", MPA)?;
    t.linear("bar", BAR)?;
    t.linear("mbar", MBAR)?;
    t.linear("atm", ATM)?;
    t.linear("kgf/cm**2", KGF_CM2)?;
    t.linear("psi", PSI)?;
    t.linear("lbf/ft**2", LBF_FT2)?;
    t.linear("torr", TORR)?;
    t.linear("mmHg_0C", TORR)?;
    t.linear("inHg_32F", INHG_32F)?;
    t.linear("inHg_60F", INHG_60F)?;

    t.gauge("Pag", 1.0)?;
    t.gauge("kPag", KPA)?;
    t.gauge("MPag", MPA)?;
    t.gauge("barg", BAR)?;
    t.gauge("mbarg", MBAR)?;
    t.gauge("kgf/cm**2_g", KGF_CM2)?;
    t.gauge("psig", PSI)?;
    t.gauge("lbf/ft**2_g", LBF_FT2)?;
    t.gauge("torr_g", TORR)?;
    t.gauge("mmHg_0C_g", TORR)?;
    t.gauge("inHg_32F_g", INHG_32F)?;
    t.gauge("inHg_60F_g", INHG_60F)?;
    Ok(())
}

fn volume_flow(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::VolumeFlow, "m**3/s")?;
    t.linear("m**3/h", 1.0 / HOUR)?;
    t.linear("m**3/min", 1.0 / MIN)?;
    t.linear("m**3/d", 1.0 / DAY)?;
    t.linear("L/h", LITER / HOUR)?;
    t.linear("L/d", LITER / DAY)?;
    t.linear("L/min", LITER / MIN)?;
    t.linear("L/s", LITER)?;
    t.linear("mL/h", ML / HOUR)?;
    t.linear("mL/min", ML / MIN)?;
    t.linear("mL/s", ML)?;
    t.linear("bbl/d", BBL / DAY)?;
    t.linear("bbl/h", BBL / HOUR)?;
    t.linear("MMgal/d", 1e6 * GAL / DAY)?;
    t.linear("USGPM", GAL / MIN)?;
    t.linear("USGPH", GAL / HOUR)?;
    t.linear("ft**3/h", FT3 / HOUR)?;
    t.linear("ft**3/d", FT3 / DAY)?;
    Ok(())
}

fn mass_density(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MassDensity, "kg/m**3")?;
    t.linear("g/L", GRAM / LITER)?;
    t.linear("g/cm**3", GRAM / ML)?;
    t.linear("g/mL", GRAM / ML)?;
    Ok(())
}

fn heat_flow(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::HeatFlow, "kJ/s")?;
    t.linear("kJ/h", 1.0 / HOUR)?;
    t.linear("kJ/min", 1.0 / MIN)?;
    t.linear("MJ/h", 1e3 / HOUR)?;
    t.linear("GJ/h", 1e6 / HOUR)?;
    t.linear("kW", 1.0)?;
    t.linear("MW", 1e3)?;
    t.linear("kcal/h", KCAL / HOUR)?;
    t.linear("kcal/min", KCAL / MIN)?;
    t.linear("kcal/s", KCAL)?;
    t.linear("MMkcal/h", 1e6 * KCAL / HOUR)?;
    t.linear("cal/h", CAL / HOUR)?;
    t.linear("cal/min", CAL / MIN)?;
    t.linear("cal/s", CAL)?;
    t.linear("Btu/h", BTU / HOUR)?;
    t.linear("MMBtu/h", 1e6 * BTU / HOUR)?;
    t.linear("MMBtu/d", 1e6 * BTU / DAY)?;
    t.linear("hp", 0.745699)?;
    Ok(())
}

fn molar_flow(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MolarFlow, "kmol/s")?;
    t.linear("kmol/h", 1.0 / HOUR)?;
    t.linear("kmol/min", 1.0 / MIN)?;
    t.linear("Nm**3/h", NM3 / HOUR)?;
    t.linear("Nm**3/d", NM3 / DAY)?;
    t.standard("Sm**3/h", NM3 / HOUR)?;
    t.linear("Sm**3_20C/h", SM3_20C / HOUR)?;
    t.linear("Sm**3_60F/h", SM3_60F / HOUR)?;
    t.standard("Sm**3/d", NM3 / DAY)?;
    t.linear("Sm**3_20C/d", SM3_20C / DAY)?;
    t.linear("Sm**3_60F/d", SM3_60F / DAY)?;
    t.linear("mol/h", MOL / HOUR)?;
    t.linear("mol/min", MOL / MIN)?;
    t.linear("mol/s", MOL)?;
    t.linear("SCFD", SCF / DAY)?;
    t.linear("MSCFH", 1e3 * SCF / HOUR)?;
    t.linear("MSCFD", 1e3 * SCF / DAY)?;
    t.linear("MMSCFH", 1e6 * SCF / HOUR)?;
    t.linear("MMSCFD", 1e6 * SCF / DAY)?;
    Ok(())
}

fn mass_flow(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MassFlow, "kg/s")?;
    t.linear("kg/h", 1.0 / HOUR)?;
    t.linear("kg/min", 1.0 / MIN)?;
    t.linear("kg/d", 1.0 / DAY)?;
    t.linear("t/d", TONNE / DAY)?;
    t.linear("t/h", TONNE / HOUR)?;
    t.linear("t/yr", TONNE / YEAR)?;
    t.linear("g/h", GRAM / HOUR)?;
    t.linear("g/min", GRAM / MIN)?;
    t.linear("g/s", GRAM)?;
    t.linear("lb/h", LB / HOUR)?;
    t.linear("lb/d", LB / DAY)?;
    t.linear("klb/h", 1e3 * LB / HOUR)?;
    t.linear("klb/d", 1e3 * LB / DAY)?;
    t.linear("MMlb/d", 1e6 * LB / DAY)?;
    Ok(())
}

fn molar_density(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MolarDensity, "kmol/m**3")?;
    t.linear("mol/L", MOL / LITER)?;
    t.linear("mol/cm**3", MOL / ML)?;
    t.linear("mol/mL", MOL / ML)?;
    Ok(())
}

fn molar_heat_capacity(registry: &mut UnitRegistry, dimension: Dimension) -> Result<(), UnitError> {
    let mut t = Table::new(registry, dimension, "kJ/(kmol*C)")?;
    t.linear("kJ/(kmol*K)", 1.0)?;
    t.linear("kJ/(mol*C)", 1.0 / MOL)?;
    t.linear("kJ/(mol*K)", 1.0 / MOL)?;
    t.linear("J/(mol*C)", 1.0)?;
    t.linear("J/(mol*K)", 1.0)?;
    t.linear("J/(kmol*C)", 1e-3)?;
    t.linear("J/(kmol*K)", 1e-3)?;
    t.linear("kcal/(mol*C)", KCAL / MOL)?;
    t.linear("kcal/(mol*K)", KCAL / MOL)?;
    t.linear("kcal/(kmol*C)", KCAL)?;
    t.linear("kcal/(kmol*K)", KCAL)?;
    t.linear("cal/(mol*C)", CAL / MOL)?;
    t.linear("cal/(mol*K)", CAL / MOL)?;
    t.linear("cal/(kmol*C)", CAL)?;
    t.linear("cal/(kmol*K)", CAL)?;
    Ok(())
}

fn molar_heat(registry: &mut UnitRegistry, dimension: Dimension) -> Result<(), UnitError> {
    let mut t = Table::new(registry, dimension, "kJ/kmol")?;
    t.linear("kJ/mol", 1.0 / MOL)?;
    t.linear("J/mol", 1.0)?;
    t.linear("J/kmol", 1e-3)?;
    t.linear("MJ/kmol", 1e3)?;
    t.linear("kcal/mol", KCAL / MOL)?;
    t.linear("kcal/kmol", KCAL)?;
    t.linear("cal/mol", CAL / MOL)?;
    t.linear("cal/kmol", CAL)?;
    Ok(())
}

fn thermal_conductivity(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::ThermalConductivity, "W/(m*K)")?;
    t.linear("Btu/(h*ft*F)", 1e3 * BTU / (HOUR * FT * 5.0 / 9.0))?;
    t.linear("kcal/(m*h*C)", 1e3 * KCAL / HOUR)?;
    t.linear("cal/(cm*s*C)", 1e3 * CAL / CM)?;
    Ok(())
}

fn viscosity(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Viscosity, "cP")?;
    t.linear("mP", 0.1)?;
    t.linear("microP", 1e-4)?;
    t.linear("P", 100.0)?;
    t.linear("Pa*s", 1e3)?;
    t.linear("lbf*s/ft**2", 1e3 * LBF_FT2)?;
    t.linear("lbm/(ft*s)", 1e3 * LB / FT)?;
    t.linear("lbm/(ft*h)", 1e3 * LB / (FT * HOUR))?;
    Ok(())
}

fn surface_tension(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::SurfaceTension, "dyne/cm")?;
    t.linear("dyn/cm", 1.0)?;
    t.linear("lbf/ft", 1e3 * LBF / FT)?;
    Ok(())
}

fn mass_heat_capacity(registry: &mut UnitRegistry, dimension: Dimension) -> Result<(), UnitError> {
    let mut t = Table::new(registry, dimension, "kJ/(kg*C)")?;
    t.linear("kJ/(kg*K)", 1.0)?;
    t.linear("kJ/(g*C)", 1.0 / GRAM)?;
    t.linear("kJ/(g*K)", 1.0 / GRAM)?;
    t.linear("J/(g*C)", 1.0)?;
    t.linear("J/(g*K)", 1.0)?;
    t.linear("J/(kg*C)", 1e-3)?;
    t.linear("J/(kg*K)", 1e-3)?;
    t.linear("kcal/(g*C)", KCAL / GRAM)?;
    t.linear("kcal/(g*K)", KCAL / GRAM)?;
    t.linear("kcal/(kg*C)", KCAL)?;
    t.linear("kcal/(kg*K)", KCAL)?;
    t.linear("cal/(g*C)", CAL / GRAM)?;
    t.linear("cal/(g*K)", CAL / GRAM)?;
    t.linear("cal/(kg*C)", CAL)?;
    t.linear("cal/(kg*K)", CAL)?;
    Ok(())
}

fn mass_heat(registry: &mut UnitRegistry, dimension: Dimension) -> Result<(), UnitError> {
    let mut t = Table::new(registry, dimension, "kJ/kg")?;
    t.linear("kJ/g", 1.0 / GRAM)?;
    t.linear("J/g", 1.0)?;
    t.linear("J/kg", 1e-3)?;
    t.linear("MJ/kg", 1e3)?;
    t.linear("kcal/g", KCAL / GRAM)?;
    t.linear("kcal/kg", KCAL)?;
    t.linear("cal/g", CAL / GRAM)?;
    t.linear("cal/kg", CAL)?;
    t.linear("Btu/lb", BTU / LB)?;
    Ok(())
}

/// Volumes already expressed at standard conditions; no reference math applies
fn standard_gas_flow(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::StandardGasFlow, "Sm**3/s")?;
    t.linear("Sm**3/h", 1.0 / HOUR)?;
    t.linear("Sm**3/d", 1.0 / DAY)?;
    t.linear("Sm**3/min", 1.0 / MIN)?;
    Ok(())
}

fn kinematic_viscosity(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    Table::new(registry, Dimension::KinematicViscosity, "cSt")?;
    Ok(())
}

fn molar_volume(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MolarVolume, "m**3/kmol")?;
    t.linear("m**3/mol", 1.0 / MOL)?;
    t.linear("L/mol", LITER / MOL)?;
    t.linear("cm**3/mol", ML / MOL)?;
    t.linear("mL/mol", ML / MOL)?;
    Ok(())
}

fn molecular_weight(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::MolecularWeight, "kg/kmol")?;
    t.linear("g/mol", GRAM / MOL)?;
    t.linear("kg/mol", 1.0 / MOL)?;
    Ok(())
}

fn fraction(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    let mut t = Table::new(registry, Dimension::Fraction, "")?;
    t.linear("%", 1e-2)?;
    t.linear("ppm", 1e-6)?;
    Ok(())
}

fn dimensionless(registry: &mut UnitRegistry) -> Result<(), UnitError> {
    Table::new(registry, Dimension::Dimensionless, "")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use zunits_core::Environment;
    use crate::registry::UNITS;

    fn factor(dimension: Dimension, symbol: &str) -> f64 {
        UNITS.resolve(dimension, symbol).unwrap().scale
    }

    #[test]
    fn test_base_symbols() {
        let expected = [
            (Dimension::Length, "m"),
            (Dimension::Area, "m2"),
            (Dimension::Volume, "m3"),
            (Dimension::Time, "s"),
            (Dimension::Mass, "kg"),
            (Dimension::Force, "N"),
            (Dimension::Substance, "kmol"),
            (Dimension::Energy, "kJ"),
            (Dimension::Velocity, "m/s"),
            (Dimension::Temperature, "K"),
            (Dimension::DeltaTemperature, "C"),
            (Dimension::Pressure, "Pa"),
            (Dimension::VolumeFlow, "m3/s"),
            (Dimension::MassDensity, "kg/m3"),
            (Dimension::HeatFlow, "kJ/s"),
            (Dimension::MolarFlow, "kmol/s"),
            (Dimension::MassFlow, "kg/s"),
            (Dimension::MolarDensity, "kmol/m3"),
            (Dimension::MolarHeatCapacity, "kJ/kmol-C"),
            (Dimension::MolarEntropy, "kJ/kmol-C"),
            (Dimension::MolarHeat, "kJ/kmol"),
            (Dimension::ThermalConductivity, "W/m-K"),
            (Dimension::Viscosity, "cP"),
            (Dimension::SurfaceTension, "dyne/cm"),
            (Dimension::MassHeatCapacity, "kJ/kg-C"),
            (Dimension::MassEntropy, "kJ/kg-C"),
            (Dimension::MassHeat, "kJ/kg"),
            (Dimension::StandardGasFlow, "Sm3/s"),
            (Dimension::KinematicViscosity, "cSt"),
            (Dimension::MolarVolume, "m3/kmol"),
            (Dimension::Fraction, ""),
            (Dimension::Dimensionless, ""),
        ];
        for (dimension, symbol) in expected {
            assert_eq!(UNITS.base_unit(dimension).unwrap().symbol, symbol, "{}", dimension);
        }
    }

    #[test]
    fn test_length_factors() {
        assert_relative_eq!(1.0 / factor(Dimension::Length, "ft"), 3.28084, max_relative = 1e-5);
        assert_relative_eq!(1.0 / factor(Dimension::Length, "in"), 39.37008, max_relative = 1e-6);
    }

    #[test]
    fn test_volume_factors() {
        assert_relative_eq!(factor(Dimension::Volume, "gal"), 3.785411784e-3, max_relative = 1e-9);
        assert_relative_eq!(factor(Dimension::Volume, "bbl"), 0.158987294928, max_relative = 1e-9);
    }

    #[test]
    fn test_pressure_factors() {
        assert_relative_eq!(factor(Dimension::Pressure, "psi"), 6894.757293, max_relative = 1e-9);
        assert_relative_eq!(factor(Dimension::Pressure, "kgf/cm2"), 98066.5, max_relative = 1e-12);
        assert_relative_eq!(factor(Dimension::Pressure, "torr"), 133.322368, max_relative = 1e-8);
    }

    #[test]
    fn test_gauge_units_share_absolute_scale() {
        for (gauge, absolute) in [
            ("kPag", "kPa"),
            ("MPag", "MPa"),
            ("barg", "bar"),
            ("psig", "psi"),
            ("kgf/cm2_g", "kgf/cm2"),
            ("inHg_60F_g", "inHg_60F"),
        ] {
            assert_eq!(factor(Dimension::Pressure, gauge), factor(Dimension::Pressure, absolute));
        }
    }

    #[test]
    fn test_standard_cubic_foot() {
        // 1 lbmol of ideal gas is about 379.5 SCF at 60 °F and 1 atm
        assert_relative_eq!(LB / SCF, 379.5, max_relative = 1e-3);
    }

    #[test]
    fn test_fixed_standard_volumes_match_environment_volumes() {
        let registry = &*UNITS;
        let env = Environment::default();
        let sm3 = registry.resolve(Dimension::Substance, "Sm3").unwrap();
        let sm3_20c = registry.resolve(Dimension::Substance, "Sm3_20C").unwrap();
        assert_relative_eq!(sm3.scale_in(&env), sm3_20c.scale, max_relative = 1e-12);
    }

    #[test]
    fn test_thermal_conductivity() {
        assert_relative_eq!(
            factor(Dimension::ThermalConductivity, "Btu/h-ft-F"),
            1.7307,
            max_relative = 1e-4
        );
    }

    #[test]
    fn test_shared_tables_stay_distinct() {
        assert_eq!(
            UNITS.units_of(Dimension::MolarHeatCapacity),
            UNITS.units_of(Dimension::MolarEntropy)
        );
        let cp = UNITS.resolve(Dimension::MolarHeatCapacity, "kJ/kmol-C").unwrap();
        let s = UNITS.resolve(Dimension::MolarEntropy, "kJ/kmol-C").unwrap();
        assert_ne!(cp.dimension, s.dimension);
    }

    #[test]
    fn test_delta_temperature_table() {
        assert_eq!(UNITS.units_of(Dimension::DeltaTemperature), vec!["C", "K", "F", "R"]);
        assert_eq!(factor(Dimension::DeltaTemperature, "K"), 1.0);
        assert_relative_eq!(factor(Dimension::DeltaTemperature, "F"), 5.0 / 9.0);
    }

    #[test]
    fn test_time_aliases() {
        assert_eq!(UNITS.resolve(Dimension::Time, "h").unwrap().symbol, "hr");
        assert_eq!(UNITS.resolve(Dimension::Time, "d").unwrap().symbol, "day");
    }
}
