use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::gestures::events::GestureEvent;
use crate::core::gestures::limits::GestureLimits;
use crate::core::view::view_state::ViewState;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Pinching,
}

/// Pinch bookkeeping, alive from pinch start to pinch end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// Inverse of the last reported pinch scale.
    pub last_scale: f64,
    pub last_centroid: ScreenPoint,
}

/// Turns input events into view mutations.
///
/// Every handler maps screen positions through [`ViewState::to_plane`]; there
/// is no other transform.
#[derive(Debug, Clone, Default)]
pub struct GestureReducer {
    limits: GestureLimits,
    phase: GesturePhase,
    pointer: Option<ScreenPoint>,
    session: Option<GestureSession>,
    last_pinched: Option<Instant>,
}

impl GestureReducer {
    #[must_use]
    pub fn new(limits: GestureLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[must_use]
    pub fn limits(&self) -> &GestureLimits {
        &self.limits
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Applies `event` to `view`. Returns whether the view changed.
    pub fn reduce(
        &mut self,
        event: GestureEvent,
        now: Instant,
        view: &mut ViewState,
        canvas: CanvasSize,
    ) -> bool {
        if canvas.is_empty() {
            trace!(?event, "ignoring gesture on empty canvas");
            return false;
        }

        match (self.phase, event) {
            (GesturePhase::Idle, GestureEvent::PrimaryPress { position }) => {
                self.pointer = Some(position);
                self.phase = GesturePhase::Dragging;
                self.set_focus(position, view, canvas)
            }
            (GesturePhase::Dragging, GestureEvent::PrimaryPress { position })
            | (GesturePhase::Dragging, GestureEvent::PointerMove { position }) => {
                self.pointer = Some(position);
                self.set_focus(position, view, canvas)
            }
            (_, GestureEvent::PointerMove { position }) => {
                self.pointer = Some(position);
                false
            }
            (GesturePhase::Dragging, GestureEvent::PrimaryRelease) => {
                self.phase = GesturePhase::Idle;
                false
            }
            (GesturePhase::Idle | GesturePhase::Dragging, GestureEvent::Wheel { delta_y }) => {
                self.wheel(delta_y, view, canvas)
            }
            (GesturePhase::Idle | GesturePhase::Dragging, GestureEvent::PinchStart { centroid }) => {
                self.phase = GesturePhase::Pinching;
                self.session = Some(GestureSession {
                    last_scale: 1.0,
                    last_centroid: centroid,
                });
                false
            }
            (GesturePhase::Pinching, GestureEvent::PinchMove { centroid, scale }) => {
                self.pinch(centroid, scale, now, view, canvas)
            }
            (GesturePhase::Pinching, GestureEvent::PinchEnd) => {
                self.phase = GesturePhase::Idle;
                self.session = None;
                self.last_pinched = Some(now);
                false
            }
            (GesturePhase::Idle, GestureEvent::Tap { position })
            | (GesturePhase::Idle, GestureEvent::TouchPan { position }) => {
                if self.accepts_tap(now, view) {
                    self.set_focus(position, view, canvas)
                } else {
                    debug!(?event, "suppressed touch focus change");
                    false
                }
            }
            (phase, event) => {
                trace!(?phase, ?event, "gesture ignored in current phase");
                false
            }
        }
    }

    fn set_focus(&self, position: ScreenPoint, view: &mut ViewState, canvas: CanvasSize) -> bool {
        let focus = view.to_plane(position, canvas);
        if focus == view.focus() {
            return false;
        }

        view.set_focus(focus);
        true
    }

    fn wheel(&self, delta_y: f64, view: &mut ViewState, canvas: CanvasSize) -> bool {
        let scale = self.limits.wheel_scale(delta_y);
        let cursor = self.pointer.unwrap_or_else(|| canvas.center());
        let anchor = view.to_plane(cursor, canvas);

        let zoomed = view.zoom_about(anchor, scale);
        if zoomed {
            debug!(scale, zoom_size = view.zoom_size(), "wheel zoom");
        }
        zoomed
    }

    fn pinch(
        &mut self,
        centroid: ScreenPoint,
        pinch_scale: f64,
        now: Instant,
        view: &mut ViewState,
        canvas: CanvasSize,
    ) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        // Mapping the raw delta and subtracting the origin's image isolates
        // the translation part of the transform.
        let delta = centroid.offset_from(session.last_centroid);
        let shift = view.to_plane(delta, canvas) - view.to_plane(ScreenPoint::ORIGIN, canvas);
        let panned = view.translate(shift);
        session.last_centroid = centroid;

        let mut zoomed = false;
        let inverse = 1.0 / pinch_scale;
        if inverse.is_finite() && inverse > 0.0 {
            let step = inverse / session.last_scale;
            session.last_scale = inverse;

            let anchor = view.to_plane(centroid, canvas);
            zoomed = view.zoom_about(anchor, step);
        }

        self.last_pinched = Some(now);

        if panned || zoomed {
            debug!(panned, zoomed, zoom_size = view.zoom_size(), "pinch");
        }
        panned || zoomed
    }

    fn accepts_tap(&self, now: Instant, view: &ViewState) -> bool {
        let debounced = self.last_pinched.is_none_or(|last| {
            now.saturating_duration_since(last) > self.limits.pinch_tap_debounce
        });

        debounced && view.zoom_size() > self.limits.tap_focus_min_zoom_size
    }
}
