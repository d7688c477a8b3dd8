// Parameter store and autonomous drift.
//
// `ParamStore` holds two parallel records: `current` is what the renderer
// reads, `target` is authoritative and may jump discontinuously (slider
// input) or move continuously (drift). `relax()` pulls `current` a fixed
// fraction of the remaining distance toward `target` each tick, which
// converges without overshoot for arbitrarily spaced calls.
//
// This file is included directly by the host-side tests, so it must stay
// free of platform-specific imports.

use super::constants::*;

/// The full set of render parameters, one value per shader-facing control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    /// Escape-iteration budget for the Julia loop.
    pub iterations: f32,
    /// Scale applied to the fractal plane.
    pub zoom: f32,
    /// Playback speed of animation time.
    pub speed: f32,
    /// Scales audio-driven color modulation.
    pub audio_reactivity: f32,
    /// Radial mirror count for the kaleidoscope fold.
    pub segments: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            zoom: DEFAULT_ZOOM,
            speed: DEFAULT_SPEED,
            audio_reactivity: DEFAULT_AUDIO_REACTIVITY,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Named handle for one field of [`RenderParams`].
///
/// The ids match the DOM input elements so slider events can be routed
/// without string tables at the call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Iterations,
    Zoom,
    Speed,
    AudioReactivity,
    Segments,
}

impl ParamField {
    pub const ALL: [ParamField; 5] = [
        ParamField::Iterations,
        ParamField::Zoom,
        ParamField::Speed,
        ParamField::AudioReactivity,
        ParamField::Segments,
    ];

    /// DOM element id of the slider controlling this field.
    pub fn id(self) -> &'static str {
        match self {
            ParamField::Iterations => "iterations",
            ParamField::Zoom => "zoom",
            ParamField::Speed => "speed",
            ParamField::AudioReactivity => "audioReactivity",
            ParamField::Segments => "kaleidoscopeSegments",
        }
    }

    pub fn from_id(id: &str) -> Option<ParamField> {
        ParamField::ALL.into_iter().find(|f| f.id() == id)
    }
}

impl RenderParams {
    pub fn get(&self, field: ParamField) -> f32 {
        match field {
            ParamField::Iterations => self.iterations,
            ParamField::Zoom => self.zoom,
            ParamField::Speed => self.speed,
            ParamField::AudioReactivity => self.audio_reactivity,
            ParamField::Segments => self.segments,
        }
    }

    pub fn set(&mut self, field: ParamField, value: f32) {
        match field {
            ParamField::Iterations => self.iterations = value,
            ParamField::Zoom => self.zoom = value,
            ParamField::Speed => self.speed = value,
            ParamField::AudioReactivity => self.audio_reactivity = value,
            ParamField::Segments => self.segments = value,
        }
    }
}

/// Smoothed/authoritative parameter pair. Created once at startup and
/// mutated in place for the lifetime of the page.
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    pub current: RenderParams,
    pub target: RenderParams,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one target field unconditionally. No range validation:
    /// out-of-range values drive `current` toward implausible but not unsafe
    /// states; the shader's iteration cap is the only clamp downstream.
    pub fn set_target(&mut self, field: ParamField, value: f32) {
        self.target.set(field, value);
    }

    /// One exponential-smoothing step of every field toward its target.
    pub fn relax(&mut self) {
        for field in ParamField::ALL {
            let cur = self.current.get(field);
            let tgt = self.target.get(field);
            if cur != tgt {
                self.current.set(field, cur + (tgt - cur) * TRANSITION_ALPHA);
            }
        }
    }
}

/// One sinusoidal oscillation feeding the drift generator.
#[derive(Clone, Copy, Debug)]
pub struct DriftWave {
    pub field: ParamField,
    pub base: f32,
    pub amplitude: f32,
    /// Radians per wall-clock millisecond.
    pub frequency: f64,
}

/// Autonomous oscillations for every field not pinned to direct user input.
/// `speed` is deliberately absent: it is a user-only control.
pub const DRIFT_WAVES: [DriftWave; 4] = [
    DriftWave {
        field: ParamField::Iterations,
        base: 200.0,
        amplitude: 100.0,
        frequency: 0.001,
    },
    DriftWave {
        field: ParamField::Zoom,
        base: 1.0,
        amplitude: 0.5,
        frequency: 0.0005,
    },
    DriftWave {
        field: ParamField::AudioReactivity,
        base: 1.0,
        amplitude: 0.5,
        frequency: 0.0007,
    },
    DriftWave {
        field: ParamField::Segments,
        base: 6.0,
        amplitude: 3.0,
        frequency: 0.0002,
    },
];

/// Pure function of wall-clock time; deterministic and periodic per wave.
pub fn drift_value(wave: &DriftWave, now_ms: f64) -> f32 {
    wave.base + wave.amplitude * (now_ms * wave.frequency).sin() as f32
}

/// Write the drift oscillations into `target`, unconditionally overwriting
/// any pending slider edit to the same fields. Direct input and drift are
/// mutually overwriting by design: sliders give a momentary override, drift
/// reclaims those fields on its next tick.
pub fn apply_drift(target: &mut RenderParams, now_ms: f64) {
    for wave in &DRIFT_WAVES {
        target.set(wave.field, drift_value(wave, now_ms));
    }
}

/// Whether a drift tick is due, given the wall-clock time of the last one.
pub fn drift_due(last_ms: f64, now_ms: f64) -> bool {
    now_ms - last_ms > DRIFT_INTERVAL_MS
}

/// Wall-clock period after which a wave's drift value repeats.
pub fn drift_period_ms(wave: &DriftWave) -> f64 {
    std::f64::consts::TAU / wave.frequency
}
