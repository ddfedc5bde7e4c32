use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JuliaError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterationsError,
    #[error("Anti-aliasing needs at least one sample per axis")]
    ZeroAntiAliasingError,
    #[error("cannot render an empty {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("pixel (x: {x}, y: {y}) is outside the {width}x{height} canvas")]
    PixelOutsideCanvas {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}
