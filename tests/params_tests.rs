// Host-side tests for the pure parameter store and drift generator.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod params {
    include!("../src/core/params.rs");
}

use constants::{DRIFT_INTERVAL_MS, TRANSITION_ALPHA};
use params::*;

#[test]
fn relax_moves_strictly_toward_target_without_overshoot() {
    let mut store = ParamStore::new();
    store.set_target(ParamField::Iterations, 900.0);
    store.set_target(ParamField::Zoom, 0.2);
    store.set_target(ParamField::Speed, 4.0);
    store.set_target(ParamField::AudioReactivity, 0.0);
    store.set_target(ParamField::Segments, 12.0);

    for _ in 0..100 {
        let before = store.current;
        store.relax();
        for field in ParamField::ALL {
            let b = before.get(field);
            let a = store.current.get(field);
            let t = store.target.get(field);
            if b == t {
                assert_eq!(a, t, "equal field {field:?} must stay put");
            } else {
                assert!(
                    (a - t).abs() < (b - t).abs(),
                    "field {field:?} did not move toward target: {b} -> {a} (target {t})"
                );
                // never crosses the target
                assert!((a - t).signum() == (b - t).signum() || a == t);
            }
        }
    }
}

#[test]
fn relax_converges_geometrically() {
    let mut store = ParamStore::new();
    store.set_target(ParamField::Zoom, 9.0);
    let initial_diff = (store.current.zoom - 9.0).abs();
    for n in 1..=200u32 {
        store.relax();
        let bound = initial_diff * (1.0 - TRANSITION_ALPHA).powi(n as i32);
        let diff = (store.current.zoom - 9.0).abs();
        assert!(
            diff <= bound + 1e-4,
            "after {n} relaxes diff {diff} exceeds bound {bound}"
        );
    }
}

#[test]
fn zoom_scenario_matches_reference_alpha() {
    // target 5 from current 1 with alpha 0.05
    let mut store = ParamStore::new();
    store.set_target(ParamField::Zoom, 5.0);
    store.relax();
    assert!((store.current.zoom - 1.2).abs() < 1e-4);
    for _ in 0..59 {
        store.relax();
    }
    // remaining distance is the geometric residue 4 * 0.95^60
    let expected = 5.0 - 4.0 * 0.95f32.powi(60);
    assert!(
        (store.current.zoom - expected).abs() < 1e-3,
        "zoom after 60 relaxes was {}",
        store.current.zoom
    );
    assert!(store.current.zoom < 5.0);
}

#[test]
fn set_target_overwrites_unconditionally() {
    let mut store = ParamStore::new();
    store.set_target(ParamField::Iterations, -50.0);
    assert_eq!(store.target.iterations, -50.0);
    store.set_target(ParamField::Iterations, 1.0e9);
    assert_eq!(store.target.iterations, 1.0e9);
    // current untouched until relaxation
    assert_eq!(store.current.iterations, RenderParams::default().iterations);
}

#[test]
fn drift_is_deterministic_and_periodic() {
    for wave in &DRIFT_WAVES {
        let period = drift_period_ms(wave);
        for t in [0.0, 123.0, 99_999.5] {
            assert_eq!(drift_value(wave, t), drift_value(wave, t));
            let a = drift_value(wave, t);
            let b = drift_value(wave, t + period);
            assert!(
                (a - b).abs() < 1e-4,
                "{:?} not periodic: {a} vs {b}",
                wave.field
            );
        }
    }
}

#[test]
fn drift_stays_within_base_plus_minus_amplitude() {
    for wave in &DRIFT_WAVES {
        for i in 0..1000 {
            let v = drift_value(wave, i as f64 * 37.0);
            assert!(v >= wave.base - wave.amplitude - 1e-4);
            assert!(v <= wave.base + wave.amplitude + 1e-4);
        }
    }
}

#[test]
fn drift_never_touches_speed() {
    let mut target = RenderParams {
        speed: 3.7,
        ..Default::default()
    };
    apply_drift(&mut target, 12_345.0);
    assert_eq!(target.speed, 3.7);
    assert!(DRIFT_WAVES.iter().all(|w| w.field != ParamField::Speed));
}

#[test]
fn drift_overwrites_pending_user_edit() {
    let mut store = ParamStore::new();
    store.set_target(ParamField::Zoom, 42.0);
    apply_drift(&mut store.target, 777.0);
    // drift reclaims the field: value back inside base +/- amplitude
    assert!(store.target.zoom >= 0.5 && store.target.zoom <= 1.5);
}

#[test]
fn drift_cadence_thresholds() {
    assert!(!drift_due(0.0, 50.0));
    assert!(!drift_due(0.0, DRIFT_INTERVAL_MS));
    assert!(drift_due(0.0, 150.0));

    // both due ticks overwrite target
    let mut target = RenderParams::default();
    apply_drift(&mut target, 0.0);
    let at_zero = target;
    apply_drift(&mut target, 150.0);
    assert_ne!(target.iterations, at_zero.iterations);
}

#[test]
fn param_field_ids_round_trip() {
    for field in ParamField::ALL {
        assert_eq!(ParamField::from_id(field.id()), Some(field));
    }
    assert_eq!(ParamField::from_id("nonsense"), None);
}
