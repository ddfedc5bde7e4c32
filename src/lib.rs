mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use adapters::render::cpu_julia_renderer::CpuJuliaRenderer;
pub use config::ExplorerConfig;
pub use controllers::interactive::{
    CaptureError, CaptureResult, CaptureTicket, RenderLoopController, RenderSettings,
    RendererError, RendererPort, TickReport,
};
pub use core::data::canvas_size::CanvasSize;
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::PixelBuffer;
pub use core::data::screen_point::ScreenPoint;
pub use core::gestures::{
    GestureEvent, GestureLimits, GesturePhase, GestureReducer, GestureSession, TouchTracker,
};
pub use core::view::{MIN_ZOOM_SIZE, ShareState, ViewState, screen_to_plane};
pub use logging::init_logging;
pub use storage::ppm::write_ppm;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
#[cfg(feature = "gui")]
pub use input::gui::app::errors::GuiError;
