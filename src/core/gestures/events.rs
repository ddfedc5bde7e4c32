use crate::core::data::screen_point::ScreenPoint;

/// Input delivered by the host canvas, already in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    PrimaryPress { position: ScreenPoint },
    PointerMove { position: ScreenPoint },
    PrimaryRelease,
    /// Browser convention: positive `delta_y` scrolls down, which zooms in.
    Wheel { delta_y: f64 },
    PinchStart { centroid: ScreenPoint },
    /// `scale` is the finger spread relative to the start of the pinch.
    PinchMove { centroid: ScreenPoint, scale: f64 },
    PinchEnd,
    Tap { position: ScreenPoint },
    /// Single-finger drag on a touch surface.
    TouchPan { position: ScreenPoint },
}
