use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use thiserror::Error;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * 3
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} canvas")]
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("canvas size {canvas_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB frame, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            buffer: vec![0; canvas_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(size);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.size.contains(x, y) {
            return None;
        }

        let index = self.index(x, y);
        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.size.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }

        let index = self.index(x, y);
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_allocates_three_bytes_per_pixel() {
        let buffer = PixelBuffer::new(CanvasSize::new(4, 3));

        assert_eq!(buffer.buffer().len(), 36);
        assert!(buffer.buffer().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn from_data_rejects_mismatched_length() {
        let result = PixelBuffer::from_data(CanvasSize::new(2, 2), vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                canvas_size: 12,
                buffer_size: 11
            })
        );
    }

    #[test]
    fn set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 2));
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(1, 1, colour).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[1, 2, 3]);
        assert_eq!(buffer.pixel(1, 1), Some(colour));
    }

    #[test]
    fn set_pixel_outside_bounds_fails() {
        let mut buffer = PixelBuffer::new(CanvasSize::new(3, 2));

        let result = buffer.set_pixel(3, 0, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert_eq!(buffer.pixel(0, 2), None);
    }
}
