use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;

/// Maps a canvas pixel to the complex plane.
///
/// The pixel is normalised to `[-0.5, 0.5]` on both axes with the vertical axis
/// flipped, the imaginary axis is scaled by `height / width` so that
/// `zoom_size` always measures the visible width of the plane, and the result
/// is scaled by `zoom_size` and translated by `zoom_center`.
///
/// Every gesture and the renderer go through this function. Callers must not
/// pass an empty canvas.
#[must_use]
pub fn screen_to_plane(
    pixel: ScreenPoint,
    canvas: CanvasSize,
    zoom_center: Complex,
    zoom_size: f64,
) -> Complex {
    let width = f64::from(canvas.width);
    let height = f64::from(canvas.height);

    let x = pixel.x / width - 0.5;
    let y = ((height - 1.0 - pixel.y) / height - 0.5) * (height / width);

    Complex {
        real: x * zoom_size + zoom_center.real,
        imag: y * zoom_size + zoom_center.imag,
    }
}
