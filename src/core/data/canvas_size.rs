use crate::core::data::screen_point::ScreenPoint;

/// Current pixel dimensions of the host canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel the coordinate mapper sends exactly onto the zoom center.
    ///
    /// Rows are flipped as `height - 1 - y`, so the vertical center sits one
    /// row above `height / 2`.
    #[must_use]
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint {
            x: f64::from(self.width) / 2.0,
            y: f64::from(self.height) / 2.0 - 1.0,
        }
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_when_either_dimension_is_zero() {
        assert!(CanvasSize::new(0, 10).is_empty());
        assert!(CanvasSize::new(10, 0).is_empty());
        assert!(!CanvasSize::new(1, 1).is_empty());
    }

    #[test]
    fn contains_excludes_far_edges() {
        let canvas = CanvasSize::new(4, 3);

        assert!(canvas.contains(3, 2));
        assert!(!canvas.contains(4, 0));
        assert!(!canvas.contains(0, 3));
    }

    #[test]
    fn pixel_count_multiplies_dimensions() {
        assert_eq!(CanvasSize::new(800, 600).pixel_count(), 480_000);
    }
}
