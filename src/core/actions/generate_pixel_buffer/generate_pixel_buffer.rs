use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Packs row-major colours into an RGB pixel buffer.
pub fn generate_pixel_buffer(
    colours: &[Colour],
    canvas: CanvasSize,
) -> Result<PixelBuffer, PixelBufferError> {
    let data: PixelBufferData = colours
        .iter()
        .flat_map(|colour| [colour.r, colour.g, colour.b])
        .collect();

    PixelBuffer::from_data(canvas, data)
}
