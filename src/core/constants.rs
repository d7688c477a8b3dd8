/// Tuning constants for the parameter pipeline and spectrum banding.
///
/// Everything here is platform-free so the host-side tests can include this
/// file directly alongside the modules that use it.
// Fraction of the remaining distance `current` covers toward `target` per tick
pub const TRANSITION_ALPHA: f32 = 0.05;

// Autonomous drift is recomputed at most once per this interval, decoupled
// from the render cadence
pub const DRIFT_INTERVAL_MS: f64 = 100.0;

// Hard bound on the fractal escape loop; the shader enforces this regardless
// of the requested iteration budget
pub const MAX_ITERATIONS: f32 = 1000.0;

// Parameter defaults
pub const DEFAULT_ITERATIONS: f32 = 200.0;
pub const DEFAULT_ZOOM: f32 = 1.0;
pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_AUDIO_REACTIVITY: f32 = 1.0;
pub const DEFAULT_SEGMENTS: f32 = 6.0;

// Frequency band boundaries (analyser bin indices, half-open ranges)
pub const BASS_BAND_END: usize = 4;
pub const MID_BAND_END: usize = 12;
pub const HIGH_BAND_END: usize = 32;

// Byte frequency data peaks at u8::MAX
pub const MAX_BIN_MAGNITUDE: f32 = 255.0;
