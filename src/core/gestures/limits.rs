use std::time::Duration;

/// Tunable constants for gesture recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureLimits {
    /// Taps arriving this soon after pinch activity are treated as synthetic.
    pub pinch_tap_debounce: Duration,
    /// Taps only move the Julia constant while `zoom_size` exceeds this.
    pub tap_focus_min_zoom_size: f64,
    /// Wheel delta that halves or doubles the zoom.
    pub wheel_delta_per_octave: f64,
}

impl Default for GestureLimits {
    fn default() -> Self {
        Self {
            pinch_tap_debounce: Duration::from_millis(500),
            tap_focus_min_zoom_size: 1.0,
            wheel_delta_per_octave: 2000.0,
        }
    }
}

impl GestureLimits {
    /// Zoom factor for a wheel step, `2^(-delta_y / wheel_delta_per_octave)`.
    #[must_use]
    pub fn wheel_scale(&self, delta_y: f64) -> f64 {
        if self.wheel_delta_per_octave == 0.0 {
            return 1.0;
        }

        (-delta_y / self.wheel_delta_per_octave).exp2()
    }
}
