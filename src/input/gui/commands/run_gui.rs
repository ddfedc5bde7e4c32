use std::marker::PhantomData;

use tracing::info;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::{Window, WindowBuilder}};

use crate::adapters::render::cpu_julia_renderer::CpuJuliaRenderer;
use crate::config::ExplorerConfig;
use crate::controllers::interactive::controller::RenderLoopController;
use crate::input::gui::app::errors::GuiError;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the explorer window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let renderer = CpuJuliaRenderer::new()?;
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Julia Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let presenter = self.presenter_factory.build(window)?;
        let controller = RenderLoopController::new(
            renderer,
            self.config.view,
            self.config.settings,
            self.config.gestures,
        );

        info!(link = %controller.share_link(""), "starting explorer");
        GuiApp::new(window, &event_loop, presenter, controller).run(event_loop)
    }
}
