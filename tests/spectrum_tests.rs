// Host-side tests for spectrum banding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod spectrum {
    include!("../src/core/spectrum.rs");
}

use constants::{BASS_BAND_END, HIGH_BAND_END, MID_BAND_END};
use spectrum::*;

#[test]
fn silent_buffer_is_exactly_zero() {
    let bins = [0u8; 128];
    assert_eq!(bands_from_bytes(&bins), SpectrumSample::ZERO);
}

#[test]
fn empty_buffer_is_exactly_zero() {
    // No source attached yet behaves like an all-zero buffer
    assert_eq!(bands_from_bytes(&[]), SpectrumSample::ZERO);
}

#[test]
fn full_scale_buffer_saturates_every_band_at_one() {
    let bins = [255u8; 128];
    let s = bands_from_bytes(&bins);
    assert!((s.bass - 1.0).abs() < 1e-6);
    assert!((s.mid - 1.0).abs() < 1e-6);
    assert!((s.high - 1.0).abs() < 1e-6);
}

#[test]
fn bands_stay_within_unit_interval() {
    let mut bins = [0u8; 128];
    for (i, b) in bins.iter_mut().enumerate() {
        *b = ((i * 89 + 13) % 256) as u8;
    }
    let s = bands_from_bytes(&bins);
    for v in [s.bass, s.mid, s.high] {
        assert!((0.0..=1.0).contains(&v), "band {v} out of range");
    }
}

#[test]
fn band_boundaries_are_disjoint() {
    let mut bins = [0u8; 64];
    for b in bins.iter_mut().take(BASS_BAND_END) {
        *b = 255;
    }
    let s = bands_from_bytes(&bins);
    assert!((s.bass - 1.0).abs() < 1e-6);
    assert_eq!(s.mid, 0.0);
    assert_eq!(s.high, 0.0);

    let mut bins = [0u8; 64];
    for b in bins
        .iter_mut()
        .take(MID_BAND_END)
        .skip(BASS_BAND_END)
    {
        *b = 255;
    }
    let s = bands_from_bytes(&bins);
    assert_eq!(s.bass, 0.0);
    assert!((s.mid - 1.0).abs() < 1e-6);
    assert_eq!(s.high, 0.0);

    let mut bins = [0u8; 64];
    for b in bins
        .iter_mut()
        .take(HIGH_BAND_END)
        .skip(MID_BAND_END)
    {
        *b = 255;
    }
    let s = bands_from_bytes(&bins);
    assert_eq!(s.bass, 0.0);
    assert_eq!(s.mid, 0.0);
    assert!((s.high - 1.0).abs() < 1e-6);
}

#[test]
fn short_buffer_counts_missing_bins_as_zero() {
    // 8 bins of full scale: bass fully covered, mid half covered, high empty
    let bins = [255u8; 8];
    let s = bands_from_bytes(&bins);
    assert!((s.bass - 1.0).abs() < 1e-6);
    assert!((s.mid - 0.5).abs() < 1e-6);
    assert_eq!(s.high, 0.0);
}

#[test]
fn band_means_average_not_sum() {
    // One loud bin in the bass range averages down, not up
    let mut bins = [0u8; 32];
    bins[0] = 255;
    let s = bands_from_bytes(&bins);
    assert!((s.bass - 1.0 / BASS_BAND_END as f32).abs() < 1e-6);
}
