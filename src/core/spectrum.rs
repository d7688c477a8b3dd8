// Frequency-spectrum banding.
//
// The analyser hands us byte magnitudes per frequency bin; we reduce them
// to three band intensities in [0, 1]. Band boundaries are fixed constants,
// not configurable. Samples are ephemeral: recomputed once per render tick,
// never persisted.

use super::constants::*;

/// Normalized band intensities for one render tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpectrumSample {
    pub bass: f32,
    pub mid: f32,
    pub high: f32,
}

impl SpectrumSample {
    /// The sample reported while no analysis source is attached.
    pub const ZERO: SpectrumSample = SpectrumSample {
        bass: 0.0,
        mid: 0.0,
        high: 0.0,
    };
}

/// Mean magnitude of `bins[start..end)` normalized by the maximum bin value.
/// Bins past the end of the buffer count as zero magnitude, so the divisor
/// is always the nominal band width.
fn band_mean(bins: &[u8], start: usize, end: usize) -> f32 {
    let width = (end - start) as f32;
    let sum: f32 = bins
        .iter()
        .skip(start)
        .take(end - start)
        .map(|&b| b as f32)
        .sum();
    sum / (width * MAX_BIN_MAGNITUDE)
}

/// Reduce raw byte frequency data to bass/mid/high band intensities.
pub fn bands_from_bytes(bins: &[u8]) -> SpectrumSample {
    SpectrumSample {
        bass: band_mean(bins, 0, BASS_BAND_END),
        mid: band_mean(bins, BASS_BAND_END, MID_BAND_END),
        high: band_mean(bins, MID_BAND_END, HIGH_BAND_END),
    }
}
