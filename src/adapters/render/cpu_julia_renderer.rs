use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::controllers::interactive::data::render_settings::RenderSettings;
use crate::controllers::interactive::ports::renderer::{RendererError, RendererPort};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::view::view_state::ViewState;

/// Renders Julia frames on the CPU using a dedicated rayon pool.
///
/// The most recent frame is kept so it can be read back after the draw.
pub struct CpuJuliaRenderer {
    pool: ThreadPool,
    frame: Option<PixelBuffer>,
}

impl CpuJuliaRenderer {
    /// Builds a renderer with one worker per available core.
    pub fn new() -> Result<Self, RendererError> {
        Self::with_threads(0)
    }

    /// `threads == 0` lets rayon pick the worker count.
    pub fn with_threads(threads: usize) -> Result<Self, RendererError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("julia-render-{index}"))
            .build()
            .map_err(|err| RendererError::Unavailable(err.to_string()))?;

        info!(workers = pool.current_num_threads(), "cpu renderer ready");

        Ok(Self { pool, frame: None })
    }

    #[must_use]
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }
}

impl RendererPort for CpuJuliaRenderer {
    fn draw(
        &mut self,
        view: &ViewState,
        settings: &RenderSettings,
        canvas: CanvasSize,
    ) -> Result<(), RendererError> {
        let algorithm = JuliaAlgorithm::new(
            *view,
            canvas,
            settings.max_iterations,
            settings.anti_aliasing,
            settings.scaling,
        )
        .map_err(|err| RendererError::Draw(err.to_string()))?;

        let colours = self
            .pool
            .install(|| generate_fractal_parallel_rayon(&algorithm))
            .map_err(|err| RendererError::Draw(err.to_string()))?;

        let buffer = generate_pixel_buffer(&colours, canvas)
            .map_err(|err| RendererError::Draw(err.to_string()))?;

        debug!(width = canvas.width, height = canvas.height, "frame rendered");
        self.frame = Some(buffer);

        Ok(())
    }

    fn read_pixels(&self) -> Result<PixelBuffer, RendererError> {
        self.frame.clone().ok_or(RendererError::NoFrame)
    }
}
