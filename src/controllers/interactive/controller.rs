use crate::controllers::interactive::capture::{CaptureError, CaptureSlot, CaptureTicket};
use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::controllers::interactive::ports::renderer::RendererPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::gestures::events::GestureEvent;
use crate::core::gestures::limits::GestureLimits;
use crate::core::gestures::reducer::GestureReducer;
use crate::core::view::share_link::ShareState;
use crate::core::view::view_state::ViewState;
use std::time::Instant;
use tracing::{debug, error, info, trace};

/// What a single [`RenderLoopController::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub drew: bool,
    pub captured: bool,
}

/// Owns the view and decides, once per display refresh, whether the renderer
/// has to run.
///
/// All mutation happens between ticks on the host's event loop. A tick draws
/// only when the frame is dirty and services a pending capture after the draw
/// step, so a capture always observes the state of the frame it completes on.
pub struct RenderLoopController<R: RendererPort> {
    renderer: R,
    view: ViewState,
    settings: RenderSettings,
    gestures: GestureReducer,
    dirty: bool,
    capture: CaptureSlot,
    frames_drawn: u64,
}

impl<R: RendererPort> RenderLoopController<R> {
    /// The first tick always draws.
    pub fn new(
        renderer: R,
        view: ViewState,
        settings: RenderSettings,
        limits: GestureLimits,
    ) -> Self {
        Self {
            renderer,
            view,
            settings,
            gestures: GestureReducer::new(limits),
            dirty: true,
            capture: CaptureSlot::default(),
            frames_drawn: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureReducer {
        &self.gestures
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn is_capture_pending(&self) -> bool {
        self.capture.is_pending()
    }

    /// Whether the next tick has work to do.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.dirty || self.capture.is_pending()
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replaces the render settings, marking the frame dirty if they changed.
    pub fn set_settings(&mut self, settings: RenderSettings) {
        if settings != self.settings {
            debug!(?settings, "render settings changed");
            self.settings = settings;
            self.mark_dirty();
        }
    }

    pub fn handle_gesture(&mut self, event: GestureEvent, now: Instant, canvas: CanvasSize) {
        if self.gestures.reduce(event, now, &mut self.view, canvas) {
            self.mark_dirty();
        }
    }

    /// Restores the default pan and zoom, keeping the Julia constant.
    pub fn reset_view(&mut self) {
        self.view.reset_view();
        self.mark_dirty();
    }

    /// Asks for the next completed frame.
    ///
    /// Fails with [`CaptureError::InProgress`] while another capture is
    /// outstanding. Marks the frame dirty so a capture issued on an idle view
    /// still gets a fresh draw.
    pub fn request_capture(&mut self) -> Result<CaptureTicket, CaptureError> {
        let ticket = self.capture.open()?;
        self.mark_dirty();
        info!("capture requested");
        Ok(ticket)
    }

    #[must_use]
    pub fn share_state(&self) -> ShareState {
        ShareState::from(&self.view)
    }

    #[must_use]
    pub fn share_link(&self, base_url: &str) -> String {
        self.share_state().to_link(base_url)
    }

    /// Runs one frame.
    ///
    /// An empty canvas skips the frame entirely: the dirty flag and any
    /// pending capture carry over to the next tick.
    pub fn tick(&mut self, canvas: CanvasSize) -> TickReport {
        let mut report = TickReport::default();
        let mut draw_error = None;

        if canvas.is_empty() {
            trace!(?canvas, "skipping frame for empty canvas");
            return report;
        }

        if self.dirty {
            self.dirty = false;
            let view = self.view;
            let settings = self.settings;

            let started = Instant::now();
            match self.renderer.draw(&view, &settings, canvas) {
                Ok(()) => {
                    self.frames_drawn += 1;
                    report.drew = true;
                    debug!(
                        frame = self.frames_drawn,
                        elapsed_ms = started.elapsed().as_millis(),
                        zoom_size = view.zoom_size(),
                        "frame drawn"
                    );
                }
                Err(err) => {
                    error!(%err, "draw failed");
                    draw_error = Some(err);
                }
            }
        }

        if self.capture.is_pending() {
            // a failed draw leaves the previous frame in the renderer
            let result = match draw_error {
                Some(err) => Err(CaptureError::Readback(err)),
                None => self.renderer.read_pixels().map_err(CaptureError::from),
            };
            if let Err(err) = &result {
                error!(%err, "capture readback failed");
            }
            report.captured = self.capture.fulfil(result);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::ports::renderer::RendererError;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::screen_point::ScreenPoint;

    const CANVAS: CanvasSize = CanvasSize::new(40, 30);

    /// Records every draw and hands back a frame tagged with the draw count.
    #[derive(Default)]
    struct MockRenderer {
        draws: Vec<(ViewState, RenderSettings, CanvasSize)>,
        fail_draws: bool,
    }

    impl RendererPort for MockRenderer {
        fn draw(
            &mut self,
            view: &ViewState,
            settings: &RenderSettings,
            canvas: CanvasSize,
        ) -> Result<(), RendererError> {
            if self.fail_draws {
                return Err(RendererError::Draw("mock failure".to_owned()));
            }
            self.draws.push((*view, *settings, canvas));
            Ok(())
        }

        fn read_pixels(&self) -> Result<PixelBuffer, RendererError> {
            let (_, _, canvas) = self.draws.last().ok_or(RendererError::NoFrame)?;
            let mut buffer = PixelBuffer::new(*canvas);
            let tag = u8::try_from(self.draws.len()).unwrap_or(u8::MAX);
            buffer
                .set_pixel(0, 0, crate::core::data::colour::Colour { r: tag, g: 0, b: 0 })
                .map_err(|err| RendererError::Draw(err.to_string()))?;
            Ok(buffer)
        }
    }

    fn controller() -> RenderLoopController<MockRenderer> {
        RenderLoopController::new(
            MockRenderer::default(),
            ViewState::default(),
            RenderSettings::default(),
            GestureLimits::default(),
        )
    }

    fn settled() -> RenderLoopController<MockRenderer> {
        let mut controller = controller();
        controller.tick(CANVAS);
        controller
    }

    #[test]
    fn first_tick_draws_then_idles() {
        let mut controller = controller();

        assert!(controller.tick(CANVAS).drew);
        assert!(!controller.is_dirty());
        assert_eq!(controller.tick(CANVAS), TickReport::default());
        assert_eq!(controller.renderer().draws.len(), 1);
    }

    #[test]
    fn mark_dirty_is_idempotent() {
        let mut controller = settled();

        controller.mark_dirty();
        controller.mark_dirty();

        assert!(controller.tick(CANVAS).drew);
        assert!(!controller.tick(CANVAS).drew);
        assert_eq!(controller.frames_drawn(), 2);
    }

    #[test]
    fn gesture_mutation_is_visible_to_next_draw() {
        let mut controller = settled();
        let position = ScreenPoint::new(5.0, 5.0);

        controller.handle_gesture(GestureEvent::PrimaryPress { position }, Instant::now(), CANVAS);
        let expected = controller.view().focus();
        controller.tick(CANVAS);

        let (drawn_view, _, _) = controller.renderer().draws.last().copied().unwrap();
        assert_eq!(drawn_view.focus(), expected);
    }

    #[test]
    fn zero_delta_wheel_does_not_dirty() {
        let mut controller = settled();

        controller.handle_gesture(GestureEvent::Wheel { delta_y: 0.0 }, Instant::now(), CANVAS);

        assert!(!controller.is_dirty());
        assert!(!controller.needs_frame());
    }

    #[test]
    fn settings_change_marks_dirty_only_when_different() {
        let mut controller = settled();

        controller.set_settings(RenderSettings::default());
        assert!(!controller.is_dirty());

        controller.set_settings(RenderSettings {
            max_iterations: 300,
            ..RenderSettings::default()
        });
        assert!(controller.is_dirty());
        controller.tick(CANVAS);

        let (_, drawn_settings, _) = controller.renderer().draws.last().copied().unwrap();
        assert_eq!(drawn_settings.max_iterations, 300);
    }

    #[test]
    fn reset_view_restores_defaults_and_keeps_focus() {
        let mut controller = settled();
        let now = Instant::now();
        controller.handle_gesture(
            GestureEvent::PrimaryPress {
                position: ScreenPoint::new(3.0, 4.0),
            },
            now,
            CANVAS,
        );
        controller.handle_gesture(GestureEvent::PrimaryRelease, now, CANVAS);
        controller.handle_gesture(GestureEvent::Wheel { delta_y: 1500.0 }, now, CANVAS);
        controller.tick(CANVAS);
        let focus = controller.view().focus();

        controller.reset_view();

        assert_eq!(controller.view().zoom_center(), Complex::ZERO);
        assert_eq!(controller.view().zoom_size(), 4.0);
        assert_eq!(controller.view().focus(), focus);
        assert!(controller.is_dirty());
    }

    #[test]
    fn capture_on_idle_view_forces_a_draw() {
        let mut controller = settled();
        let mut ticket = controller.request_capture().unwrap();

        assert!(controller.is_dirty());
        let report = controller.tick(CANVAS);

        assert_eq!(
            report,
            TickReport {
                drew: true,
                captured: true
            }
        );
        let frame = ticket.try_take().unwrap().unwrap();
        assert_eq!(frame.pixel(0, 0).map(|c| c.r), Some(2));
    }

    #[test]
    fn concurrent_capture_fails_and_first_resolves_once() {
        let mut controller = settled();
        let mut first = controller.request_capture().unwrap();

        assert_eq!(
            controller.request_capture().unwrap_err(),
            CaptureError::InProgress
        );

        assert!(first.try_take().is_none());
        assert!(controller.tick(CANVAS).captured);
        assert!(first.try_take().unwrap().is_ok());
        assert!(!controller.tick(CANVAS).captured);
        assert!(!controller.is_capture_pending());
    }

    #[test]
    fn capture_observes_state_mutated_before_its_frame() {
        let mut controller = settled();
        let mut ticket = controller.request_capture().unwrap();
        controller.handle_gesture(GestureEvent::Wheel { delta_y: -500.0 }, Instant::now(), CANVAS);
        let expected_zoom = controller.view().zoom_size();

        controller.tick(CANVAS);

        assert!(ticket.try_take().unwrap().is_ok());
        let (drawn_view, _, _) = controller.renderer().draws.last().copied().unwrap();
        assert_eq!(drawn_view.zoom_size(), expected_zoom);
    }

    #[test]
    fn empty_canvas_defers_draw_and_capture() {
        let mut controller = controller();
        let mut ticket = controller.request_capture().unwrap();

        assert_eq!(controller.tick(CanvasSize::new(0, 0)), TickReport::default());
        assert!(controller.is_dirty());
        assert!(ticket.try_take().is_none());

        assert!(controller.tick(CANVAS).captured);
        assert!(ticket.try_take().unwrap().is_ok());
    }

    #[test]
    fn failed_draw_still_resolves_capture() {
        let mut controller = RenderLoopController::new(
            MockRenderer {
                fail_draws: true,
                ..MockRenderer::default()
            },
            ViewState::default(),
            RenderSettings::default(),
            GestureLimits::default(),
        );
        let mut ticket = controller.request_capture().unwrap();

        let report = controller.tick(CANVAS);

        assert!(!report.drew);
        assert!(report.captured);
        assert_eq!(
            ticket.try_take(),
            Some(Err(CaptureError::Readback(RendererError::Draw(
                "mock failure".to_owned()
            ))))
        );
    }

    #[test]
    fn failed_draw_does_not_capture_previous_frame() {
        let mut controller = settled();
        controller.handle_gesture(
            GestureEvent::PrimaryPress {
                position: ScreenPoint::new(5.0, 5.0),
            },
            Instant::now(),
            CANVAS,
        );
        controller.renderer.fail_draws = true;
        let mut ticket = controller.request_capture().unwrap();

        let report = controller.tick(CANVAS);

        assert!(!report.drew);
        assert!(report.captured);
        assert!(matches!(
            ticket.try_take(),
            Some(Err(CaptureError::Readback(RendererError::Draw(_))))
        ));
        assert_eq!(controller.renderer().draws.len(), 1);
    }

    #[test]
    fn share_link_round_trips_through_parse() {
        let mut controller = settled();
        let now = Instant::now();
        controller.handle_gesture(
            GestureEvent::PointerMove {
                position: ScreenPoint::new(31.0, 7.0),
            },
            now,
            CANVAS,
        );
        controller.handle_gesture(GestureEvent::Wheel { delta_y: 777.0 }, now, CANVAS);

        let link = controller.share_link("http://localhost/");
        let parsed = ViewState::from(ShareState::parse(&link));

        assert_eq!(&parsed, controller.view());
    }
}
