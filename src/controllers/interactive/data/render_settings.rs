use std::ops::RangeInclusive;

pub const DEFAULT_ANTI_ALIASING: u32 = 2;
pub const DEFAULT_MAX_ITERATIONS: u32 = 512;
pub const DEFAULT_SCALING: f64 = 0.02;

pub const ANTI_ALIASING_RANGE: RangeInclusive<u32> = 1..=4;
pub const MAX_ITERATIONS_RANGE: RangeInclusive<u32> = 256..=768;
pub const SCALING_RANGE: RangeInclusive<f64> = 0.001..=0.2;

/// Inputs to the renderer owned by the inspector panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Samples per axis for each pixel.
    pub anti_aliasing: u32,
    pub max_iterations: u32,
    /// Palette cycles per smooth iteration.
    pub scaling: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            anti_aliasing: DEFAULT_ANTI_ALIASING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            scaling: DEFAULT_SCALING,
        }
    }
}
