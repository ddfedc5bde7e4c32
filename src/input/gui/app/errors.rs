use thiserror::Error;

use crate::controllers::interactive::ports::renderer::RendererError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("could not present frame: {0}")]
    Present(#[from] pixels::Error),
    #[error("could not resize surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
}
