pub mod constants;
pub mod params;
pub mod spectrum;

pub use params::*;
pub use spectrum::*;

// Shader bundled as a string constant
pub static FRACTAL_WGSL: &str = include_str!("../../shaders/fractal.wgsl");
