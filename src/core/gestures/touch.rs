use crate::core::data::screen_point::ScreenPoint;
use crate::core::gestures::events::GestureEvent;
use std::collections::BTreeMap;

/// Distance a single finger must travel before a touch becomes a pan.
pub const PAN_THRESHOLD_PX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TapCandidate {
    id: u64,
    start: ScreenPoint,
    panning: bool,
}

/// The two fingers driving a pinch and their spread when it began.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchPair {
    first: u64,
    second: u64,
    start_distance: f64,
}

impl PinchPair {
    fn contains(&self, id: u64) -> bool {
        id == self.first || id == self.second
    }
}

/// Recognizes taps, single-finger pans and two-finger pinches from raw
/// touch points.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    touches: BTreeMap<u64, ScreenPoint>,
    candidate: Option<TapCandidate>,
    pinch: Option<PinchPair>,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    pub fn touch_started(&mut self, id: u64, position: ScreenPoint) -> Option<GestureEvent> {
        self.touches.insert(id, position);

        match self.touches.len() {
            1 => {
                self.candidate = Some(TapCandidate {
                    id,
                    start: position,
                    panning: false,
                });
                None
            }
            2 if !self.is_pinching() => {
                self.candidate = None;
                let mut ids = self.touches.keys().copied();
                let (first, second) = (ids.next()?, ids.next()?);
                let a = *self.touches.get(&first)?;
                let b = *self.touches.get(&second)?;
                self.pinch = Some(PinchPair {
                    first,
                    second,
                    start_distance: a.distance(b),
                });
                Some(GestureEvent::PinchStart {
                    centroid: a.midpoint(b),
                })
            }
            _ => None,
        }
    }

    pub fn touch_moved(&mut self, id: u64, position: ScreenPoint) -> Option<GestureEvent> {
        let slot = self.touches.get_mut(&id)?;
        *slot = position;

        if let Some(pinch) = self.pinch {
            // extra fingers do not steer the pinch
            if !pinch.contains(id) {
                return None;
            }

            let a = *self.touches.get(&pinch.first)?;
            let b = *self.touches.get(&pinch.second)?;
            let scale = if pinch.start_distance > 0.0 {
                a.distance(b) / pinch.start_distance
            } else {
                1.0
            };

            return Some(GestureEvent::PinchMove {
                centroid: a.midpoint(b),
                scale,
            });
        }

        let candidate = self.candidate.as_mut().filter(|c| c.id == id)?;
        if !candidate.panning && position.distance(candidate.start) >= PAN_THRESHOLD_PX {
            candidate.panning = true;
        }

        candidate
            .panning
            .then_some(GestureEvent::TouchPan { position })
    }

    pub fn touch_ended(
        &mut self,
        id: u64,
        position: ScreenPoint,
        cancelled: bool,
    ) -> Option<GestureEvent> {
        self.touches.remove(&id)?;

        if let Some(pinch) = self.pinch {
            if !pinch.contains(id) {
                return None;
            }

            // the fingers left behind must not turn into a tap, pan or new pinch
            self.pinch = None;
            self.candidate = None;
            return Some(GestureEvent::PinchEnd);
        }

        let candidate = self.candidate.take_if(|c| c.id == id)?;
        if cancelled || candidate.panning {
            None
        } else {
            Some(GestureEvent::Tap { position })
        }
    }

}
