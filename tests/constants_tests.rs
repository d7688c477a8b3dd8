// Sanity checks on the pipeline constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod params {
    include!("../src/core/params.rs");
}

use constants::*;
use params::{DriftWave, ParamField, DRIFT_WAVES};

#[test]
fn relaxation_alpha_is_a_valid_smoothing_coefficient() {
    assert!(TRANSITION_ALPHA > 0.0 && TRANSITION_ALPHA < 1.0);
    assert_eq!(TRANSITION_ALPHA, 0.05);
}

#[test]
fn band_boundaries_are_ordered_and_adjacent() {
    assert!(BASS_BAND_END < MID_BAND_END);
    assert!(MID_BAND_END < HIGH_BAND_END);
    // half the fft window covers the banded range
    assert!(HIGH_BAND_END <= 128);
    assert_eq!(MAX_BIN_MAGNITUDE, u8::MAX as f32);
}

#[test]
fn iteration_loop_is_hard_capped() {
    assert_eq!(MAX_ITERATIONS, 1000.0);
    assert!(DEFAULT_ITERATIONS < MAX_ITERATIONS);
}

#[test]
fn defaults_are_sane() {
    assert!(DEFAULT_ITERATIONS > 0.0);
    assert!(DEFAULT_ZOOM > 0.0);
    assert!(DEFAULT_SPEED > 0.0);
    assert!(DEFAULT_AUDIO_REACTIVITY >= 0.0);
    assert!(DEFAULT_SEGMENTS >= 1.0);
}

#[test]
fn drift_table_covers_exactly_the_autonomous_fields() {
    assert_eq!(DRIFT_WAVES.len(), 4);
    for field in [
        ParamField::Iterations,
        ParamField::Zoom,
        ParamField::AudioReactivity,
        ParamField::Segments,
    ] {
        assert!(
            DRIFT_WAVES.iter().any(|w| w.field == field),
            "missing drift wave for {field:?}"
        );
    }
    assert!(DRIFT_WAVES.iter().all(|w| w.field != ParamField::Speed));
}

#[test]
fn drift_waves_keep_parameters_positive() {
    for DriftWave {
        field,
        base,
        amplitude,
        frequency,
    } in DRIFT_WAVES
    {
        assert!(frequency > 0.0, "{field:?}");
        assert!(amplitude >= 0.0, "{field:?}");
        assert!(
            base - amplitude > 0.0,
            "{field:?} can drift to a non-positive value"
        );
    }
}

#[test]
fn drift_cadence_is_decoupled_from_frame_rate() {
    // ~6 rendered frames at 60fps between drift updates
    assert_eq!(DRIFT_INTERVAL_MS, 100.0);
}
