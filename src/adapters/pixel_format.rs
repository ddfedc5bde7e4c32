//! Conversion from rendered RGB frames to the RGBA surfaces the window uses.

use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("surface holds {actual} bytes but a {width}x{height} RGBA frame needs {expected}")]
pub struct SurfaceSizeMismatch {
    pub width: u32,
    pub height: u32,
    pub expected: usize,
    pub actual: usize,
}

/// Copies `frame` into an RGBA surface, forcing every alpha byte to opaque.
pub fn copy_frame_to_rgba(frame: &PixelBuffer, surface: &mut [u8]) -> Result<(), SurfaceSizeMismatch> {
    let size = frame.size();
    let expected = size.pixel_count() * 4;
    if surface.len() != expected {
        return Err(SurfaceSizeMismatch {
            width: size.width,
            height: size.height,
            expected,
            actual: surface.len(),
        });
    }

    for (rgb, rgba) in frame.buffer().chunks_exact(3).zip(surface.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}
