use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::view::coordinate_mapper::screen_to_plane;

/// Smallest visible plane width. Below this the transform and the per-pixel
/// iteration lose precision.
pub const MIN_ZOOM_SIZE: f64 = 2e-4;

pub const DEFAULT_FOCUS: Complex = Complex::new(-0.76, 0.22);
pub const DEFAULT_ZOOM_CENTER: Complex = Complex::ZERO;
pub const DEFAULT_ZOOM_SIZE: f64 = 4.0;

/// The authoritative view: Julia constant, pan center and zoom width.
///
/// `zoom_size` never drops below [`MIN_ZOOM_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    focus: Complex,
    zoom_center: Complex,
    zoom_size: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            focus: DEFAULT_FOCUS,
            zoom_center: DEFAULT_ZOOM_CENTER,
            zoom_size: DEFAULT_ZOOM_SIZE,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(focus: Complex, zoom_center: Complex, zoom_size: f64) -> Self {
        Self {
            focus,
            zoom_center,
            zoom_size: zoom_size.max(MIN_ZOOM_SIZE),
        }
    }

    #[must_use]
    pub fn focus(&self) -> Complex {
        self.focus
    }

    #[must_use]
    pub fn zoom_center(&self) -> Complex {
        self.zoom_center
    }

    #[must_use]
    pub fn zoom_size(&self) -> f64 {
        self.zoom_size
    }

    #[must_use]
    pub fn to_plane(&self, pixel: ScreenPoint, canvas: CanvasSize) -> Complex {
        screen_to_plane(pixel, canvas, self.zoom_center, self.zoom_size)
    }

    pub(crate) fn set_focus(&mut self, focus: Complex) {
        self.focus = focus;
    }

    /// Shifts the view so that content moves by `offset` in the plane.
    ///
    /// Returns whether the zoom center changed.
    pub(crate) fn translate(&mut self, offset: Complex) -> bool {
        let moved = self.zoom_center - offset;
        if !moved.is_finite() || moved == self.zoom_center {
            return false;
        }

        self.zoom_center = moved;
        true
    }

    /// Scales the window about `anchor`, keeping the plane point under the
    /// anchor fixed.
    ///
    /// `scale` is clamped so the window cannot shrink below
    /// [`MIN_ZOOM_SIZE`]. Returns `false` when the clamped scale is a no-op.
    pub(crate) fn zoom_about(&mut self, anchor: Complex, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }

        let min_scale = MIN_ZOOM_SIZE / self.zoom_size;
        let scale = scale.max(min_scale);
        if scale == 1.0 {
            return false;
        }

        let zoom_size = if scale == min_scale {
            MIN_ZOOM_SIZE
        } else {
            (self.zoom_size * scale).max(MIN_ZOOM_SIZE)
        };
        if !zoom_size.is_finite() {
            return false;
        }

        self.zoom_size = zoom_size;
        self.zoom_center = (self.zoom_center - anchor).scale(scale) + anchor;
        true
    }

    /// Restores the default pan and zoom. The Julia constant is kept.
    pub(crate) fn reset_view(&mut self) {
        self.zoom_center = DEFAULT_ZOOM_CENTER;
        self.zoom_size = DEFAULT_ZOOM_SIZE;
    }
}
