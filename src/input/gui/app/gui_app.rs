use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, info, warn};
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::controllers::interactive::capture::CaptureTicket;
use crate::controllers::interactive::controller::RenderLoopController;
use crate::controllers::interactive::ports::renderer::RendererPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::screen_point::ScreenPoint;
use crate::core::gestures::events::GestureEvent;
use crate::core::gestures::touch::TouchTracker;
use crate::input::gui::app::errors::GuiError;
use crate::input::gui::app::inspector::{Inspector, InspectorActions};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::winit_input::{screen_point, touch_event, wheel_delta_y};
use crate::storage::ppm::write_ppm;

pub const SCREENSHOT_PATH: &str = "julia.ppm";

pub struct GuiApp<P: GuiPresenterPort, R: RendererPort> {
    window: &'static Window,
    presenter: P,
    controller: RenderLoopController<R>,
    inspector: Inspector,
    touches: TouchTracker,
    cursor: Option<ScreenPoint>,
    canvas: CanvasSize,
    pending_capture: Option<CaptureTicket>,
    repaint_ui: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort, R: RendererPort> GuiApp<P, R> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        controller: RenderLoopController<R>,
    ) -> Self {
        let size = window.inner_size();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            window,
            presenter,
            inspector: Inspector::new(*controller.settings()),
            controller,
            touches: TouchTracker::new(),
            cursor: None,
            canvas: CanvasSize::new(size.width, size.height),
            pending_capture: None,
            repaint_ui: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window closes or presenting fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        let mut failure = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(event, elwt) {
                    error!(%err, "stopping event loop");
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                if self.needs_redraw() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }

    fn needs_redraw(&self) -> bool {
        self.repaint_ui || self.controller.needs_frame()
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<()>,
    ) -> Result<(), GuiError> {
        let response = self.egui_state.on_window_event(self.window, event);
        self.repaint_ui |= response.repaint;
        let consumed = response.consumed;

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height)?,
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let size = self.window.inner_size();
                self.resize(size.width, size.height)?;
            }
            WindowEvent::RedrawRequested => self.redraw()?,
            WindowEvent::CursorMoved { position, .. } => {
                let position = screen_point(*position);
                self.cursor = Some(position);
                if !consumed {
                    self.gesture(GestureEvent::PointerMove { position });
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed if !consumed => {
                    if let Some(position) = self.cursor {
                        self.gesture(GestureEvent::PrimaryPress { position });
                    }
                }
                ElementState::Pressed => {}
                ElementState::Released => self.gesture(GestureEvent::PrimaryRelease),
            },
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                self.gesture(GestureEvent::Wheel {
                    delta_y: wheel_delta_y(*delta),
                });
            }
            WindowEvent::Touch(touch) if !consumed => {
                if let Some(event) = touch_event(&mut self.touches, touch.phase, touch.id, touch.location) {
                    self.gesture(event);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn gesture(&mut self, event: GestureEvent) {
        self.controller.handle_gesture(event, Instant::now(), self.canvas);

        if self.controller.needs_frame() {
            self.window.request_redraw();
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.canvas = CanvasSize::new(width, height);
        if self.canvas.is_empty() {
            return Ok(());
        }

        self.presenter.resize(width, height)?;
        self.controller.mark_dirty();

        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        self.repaint_ui = false;

        let report = self.controller.tick(self.canvas);
        if report.drew {
            match self.controller.renderer().read_pixels() {
                Ok(frame) => {
                    if let Err(err) = self.presenter.present_frame(&frame) {
                        warn!(%err, "dropping stale frame");
                    }
                }
                Err(err) => warn!(%err, "frame readback failed"),
            }
        }
        self.poll_capture();

        let mut output = self.update_ui();
        self.egui_state
            .handle_platform_output(self.window, std::mem::take(&mut output.platform_output));
        if output.viewport_output.values().any(|v| v.repaint_delay.is_zero()) {
            self.repaint_ui = true;
        }

        self.presenter.render(output, &self.egui_ctx)?;

        Ok(())
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let ctx = self.egui_ctx.clone();
        let mut actions = InspectorActions::default();

        let output = ctx.run(raw_input, |ctx| {
            actions = self.inspector.show(ctx);
        });

        self.apply(actions);
        output
    }

    fn apply(&mut self, actions: InspectorActions) {
        self.controller.set_settings(self.inspector.settings());

        if actions.reset_view {
            self.controller.reset_view();
        }

        if actions.screenshot {
            match self.controller.request_capture() {
                Ok(ticket) => {
                    self.pending_capture = Some(ticket);
                    self.inspector.set_status("Capturing…");
                }
                Err(err) => self.inspector.set_error(err.to_string()),
            }
        }

        if actions.share_link {
            let link = self.controller.share_link("");
            info!(%link, "share link");
            self.inspector.set_share_link(link);
        }
    }

    fn poll_capture(&mut self) {
        let Some(result) = self.pending_capture.as_mut().and_then(CaptureTicket::try_take) else {
            return;
        };
        self.pending_capture = None;

        match result.map_err(|err| err.to_string()).and_then(|frame| {
            write_ppm(&frame, SCREENSHOT_PATH).map_err(|err| err.to_string())
        }) {
            Ok(()) => self.inspector.set_status(format!("Saved {SCREENSHOT_PATH}")),
            Err(message) => {
                error!(%message, "screenshot failed");
                self.inspector.set_error(message);
            }
        }
    }
}
