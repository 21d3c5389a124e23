pub mod ascii;
pub mod buffer;
pub mod renderer;

pub use ascii::AsciiMapper;
pub use buffer::FrameBuffer;
pub use renderer::{FrameStats, Renderer};

use crate::core::Pixel;

/// Knobs for how a frame is sampled and shaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    /// Color multiplier for unlit surfaces, see [`AsciiMapper`].
    pub min_color_brightness: f64,
    /// Distance between samples in a face's normalized [-1, 1] coordinates. Smaller is
    /// sharper and slower.
    pub sampling_step: f64,
    /// Sample faces on the rayon pool, then merge in face order.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_color_brightness: 0.5,
            sampling_step: 0.025,
            parallel: false,
        }
    }
}

/// A shaded sample that survived projection, waiting for the depth test.
#[derive(Clone, Copy, Debug)]
pub struct Fragment {
    pub x: usize,
    pub y: usize,
    pub depth: f64,
    pub pixel: Pixel,
}
