//! Behaviour under the process-wide environment
//!
//! Every test here mutates the shared instance, so they take a lock and reset
//! before releasing it.

use std::sync::{Mutex, MutexGuard, PoisonError};
use approx::assert_relative_eq;
use zunits::prelude::*;

static LOCK: Mutex<()> = Mutex::new(());

fn exclusive() -> MutexGuard<'static, ()> {
    let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    env::reset();
    guard
}

#[test]
fn test_gauge_identity() {
    let _guard = exclusive();

    let atm = env::global().atmospheric_pressure();
    let p = Pressure::new(atm, "Pa").unwrap();
    assert_eq!(p.to("Pag").unwrap().value, 0.0);

    env::update(|e| e.set_atmospheric_pressure(50_000.0)).unwrap();
    let p = Pressure::new(env::global().atmospheric_pressure(), "Pa").unwrap();
    assert_eq!(p.to("Pag").unwrap().value, 0.0);

    env::reset();
}

#[test]
fn test_gauge_follows_atmosphere() {
    let _guard = exclusive();

    let p = Pressure::new(100.0, "kPa").unwrap();
    assert_relative_eq!(p.to("kPag").unwrap().value, -1.325, epsilon = 1e-12);

    env::update(|e| e.set_atmospheric_pressure(100_000.0)).unwrap();
    assert_eq!(p.to("kPag").unwrap().value, 0.0);

    env::reset();
}

#[test]
fn test_standard_volume_follows_standard_temperature() {
    let _guard = exclusive();

    let n = Substance::new(100.0, "Nm3").unwrap();
    assert_relative_eq!(n.to("Sm3").unwrap().value, 107.321984, max_relative = 1e-8);

    env::update(|e| e.set_standard_temperature(288.15)).unwrap();
    assert_relative_eq!(n.to("Sm3").unwrap().value, 105.491488, max_relative = 1e-8);

    env::reset();
}

#[test]
fn test_standard_flow_follows_standard_pressure() {
    let _guard = exclusive();

    env::update(|e| e.set_standard_conditions(273.15, 2.0 * 101_325.0)).unwrap();
    let flow = MolarFlow::new(10.0, "Nm3/h").unwrap();
    assert_relative_eq!(flow.to("Sm3/h").unwrap().value, 5.0, max_relative = 1e-12);

    env::reset();
}

#[test]
fn test_failed_update_changes_nothing() {
    let _guard = exclusive();

    let result = env::update(|e| {
        e.set_atmospheric_pressure(90_000.0)?;
        e.set_standard_pressure(-1.0)
    });
    assert!(matches!(result, Err(UnitError::InvalidEnvironment { .. })));
    assert_eq!(env::global(), Environment::default());

    env::reset();
}

#[test]
fn test_replace() {
    let _guard = exclusive();

    let custom = Environment::default().with_atmospheric_pressure(95_000.0).unwrap();
    env::replace(custom).unwrap();
    assert_eq!(env::global(), custom);

    let p = Pressure::new(0.0, "Pag").unwrap();
    assert_relative_eq!(p.to_base().unwrap().value, 95_000.0);

    env::reset();
}

#[test]
fn test_reset_is_idempotent() {
    let _guard = exclusive();

    env::update(|e| {
        e.set_atmospheric_pressure(50_000.0)?;
        e.set_standard_conditions(288.15, 100_000.0)
    })
    .unwrap();
    env::reset();
    env::reset();

    let e = env::global();
    assert_eq!(e.atmospheric_pressure(), 101_325.0);
    assert_eq!(e.standard_temperature(), 293.15);
    assert_eq!(e.standard_pressure(), 101_325.0);
}

#[test]
fn test_explicit_environment_ignores_global() {
    let _guard = exclusive();

    env::update(|e| e.set_atmospheric_pressure(50_000.0)).unwrap();
    let p = Pressure::new(100.0, "kPa").unwrap();
    let fixed = Environment::default();
    assert_relative_eq!(p.to_with("kPag", &fixed).unwrap().value, -1.325, epsilon = 1e-12);
    assert_relative_eq!(p.to("kPag").unwrap().value, 50.0, epsilon = 1e-12);

    env::reset();
}

#[test]
fn test_free_convert_reads_global() {
    let _guard = exclusive();

    let q = convert(1.0, "m", "mm").unwrap();
    assert_eq!(q, Length::new(1000.0, "mm").unwrap());

    env::update(|e| e.set_atmospheric_pressure(100_000.0)).unwrap();
    assert_eq!(convert(100.0, "kPa", "kPag").unwrap().value, 0.0);

    env::reset();
}
