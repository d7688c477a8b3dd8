/// UI-side tuning constants. The parameter-pipeline constants live in
/// `core::constants` so the host tests can include them.
// Controls fade out after this much pointer inactivity
pub const CONTROLS_FADE_MS: i32 = 3000;

// Transient message lifetimes
pub const MESSAGE_DURATION_MS: i32 = 3000;
pub const INITIAL_MESSAGE_DURATION_MS: i32 = 5000;

// Analyser window; 128 frequency bins, of which the bottom 32 are banded
pub const ANALYSER_FFT_SIZE: u32 = 256;
