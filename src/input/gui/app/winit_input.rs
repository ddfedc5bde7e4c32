//! Translation of raw winit input into gesture events.

use winit::dpi::PhysicalPosition;
use winit::event::{MouseScrollDelta, TouchPhase};

use crate::core::data::screen_point::ScreenPoint;
use crate::core::gestures::events::GestureEvent;
use crate::core::gestures::touch::TouchTracker;

/// Pixels scrolled per wheel notch when the platform reports line deltas.
pub const PIXELS_PER_LINE: f64 = 100.0;

#[must_use]
pub fn screen_point(position: PhysicalPosition<f64>) -> ScreenPoint {
    ScreenPoint::new(position.x, position.y)
}

/// Vertical scroll in browser convention: positive scrolls down.
///
/// winit reports scrolling up as positive, so the sign is flipped.
#[must_use]
pub fn wheel_delta_y(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, lines) => -f64::from(lines) * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}

pub fn touch_event(
    tracker: &mut TouchTracker,
    phase: TouchPhase,
    id: u64,
    position: PhysicalPosition<f64>,
) -> Option<GestureEvent> {
    let position = screen_point(position);

    match phase {
        TouchPhase::Started => tracker.touch_started(id, position),
        TouchPhase::Moved => tracker.touch_moved(id, position),
        TouchPhase::Ended => tracker.touch_ended(id, position, false),
        TouchPhase::Cancelled => tracker.touch_ended(id, position, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scroll_up_zooms_out() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 1.0)), -100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -2.0)), 200.0);
    }

    #[test]
    fn pixel_scroll_flips_sign() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(3.0, -40.0));

        assert_eq!(wheel_delta_y(delta), 40.0);
    }

    #[test]
    fn quick_touch_becomes_tap() {
        let mut tracker = TouchTracker::new();
        let at = PhysicalPosition::new(10.0, 20.0);

        assert_eq!(touch_event(&mut tracker, TouchPhase::Started, 1, at), None);
        assert_eq!(
            touch_event(&mut tracker, TouchPhase::Ended, 1, at),
            Some(GestureEvent::Tap {
                position: ScreenPoint::new(10.0, 20.0)
            })
        );
    }

    #[test]
    fn cancelled_touch_is_not_a_tap() {
        let mut tracker = TouchTracker::new();
        let at = PhysicalPosition::new(10.0, 20.0);

        touch_event(&mut tracker, TouchPhase::Started, 1, at);

        assert_eq!(touch_event(&mut tracker, TouchPhase::Cancelled, 1, at), None);
    }
}
