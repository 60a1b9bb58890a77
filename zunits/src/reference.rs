//! Reference-point resolvers for gauge pressure and standard volumes
//!
//! Both read the environment they are given at the moment of conversion.
//! Nothing here is cached.

use zunits_core::constants::{NORMAL_PRESSURE, NORMAL_TEMPERATURE};
use zunits_core::Environment;

/// Offset of every gauge unit, in base pressure units (Pa)
pub fn gauge_offset(env: &Environment) -> f64 {
    env.atmospheric_pressure()
}

/// Standard volume occupied by one normal volume of ideal gas
///
/// `V_std / V_normal = (T_std / 273.15) * (101325 / P_std)` at constant moles.
pub fn standard_volume_ratio(env: &Environment) -> f64 {
    (env.standard_temperature() / NORMAL_TEMPERATURE) * (NORMAL_PRESSURE / env.standard_pressure())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gauge_offset_follows_atmosphere() {
        let env = Environment::default();
        assert_eq!(gauge_offset(&env), 101325.0);
        let env = env.with_atmospheric_pressure(50_000.0).unwrap();
        assert_eq!(gauge_offset(&env), 50_000.0);
    }

    #[test]
    fn test_standard_volume_ratio() {
        let env = Environment::default();
        assert_relative_eq!(standard_volume_ratio(&env), 1.07321984, max_relative = 1e-8);

        let env = env.with_standard_temperature(288.15).unwrap();
        assert_relative_eq!(standard_volume_ratio(&env), 1.05491488, max_relative = 1e-8);
    }

    #[test]
    fn test_ratio_is_one_at_normal_conditions() {
        assert_relative_eq!(standard_volume_ratio(&Environment::normal()), 1.0);
    }

    #[test]
    fn test_ratio_falls_with_pressure() {
        let env = Environment::normal().with_standard_pressure(2.0 * 101325.0).unwrap();
        assert_relative_eq!(standard_volume_ratio(&env), 0.5);
    }
}
