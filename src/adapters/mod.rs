#[cfg(feature = "gui")]
pub mod pixel_format;
pub mod render;
