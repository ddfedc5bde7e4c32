use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::view::view_state::ViewState;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RendererError {
    /// The backing graphics resources could not be acquired.
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
    #[error("no frame has been drawn yet")]
    NoFrame,
    #[error("draw failed: {0}")]
    Draw(String),
}

/// The program that turns a view into pixels.
///
/// `draw` must not yield or mutate the view; the controller hands it a
/// point-in-time copy.
pub trait RendererPort {
    fn draw(
        &mut self,
        view: &ViewState,
        settings: &RenderSettings,
        canvas: CanvasSize,
    ) -> Result<(), RendererError>;

    /// Reads back the most recently drawn frame.
    fn read_pixels(&self) -> Result<PixelBuffer, RendererError>;
}
