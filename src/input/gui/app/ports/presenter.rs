use egui::Context as EguiContext;

use crate::adapters::pixel_format::SurfaceSizeMismatch;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Window surface that shows rendered frames with the inspector on top.
pub trait GuiPresenterPort {
    /// Replaces the displayed fractal with `frame`.
    fn present_frame(&mut self, frame: &PixelBuffer) -> Result<(), SurfaceSizeMismatch>;
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
