use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use julia_explorer::{CanvasSize, CpuJuliaRenderer, ExplorerConfig, RenderLoopController};
use tracing::info;

/// Renders one Julia frame from a share link and saves it as PPM.
#[derive(Debug, Parser)]
#[command(name = "julia_explorer", version)]
struct Args {
    /// Share link or query string (`loc=[..]&zoomCenter=[..]&zoomSize=..`).
    #[arg(long, default_value = "")]
    link: String,
    #[arg(long, default_value_t = 800)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
    #[arg(long, default_value = "output/julia.ppm")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    julia_explorer::init_logging();
    let args = Args::parse();

    let canvas = CanvasSize::new(args.width, args.height);
    if canvas.is_empty() {
        bail!("canvas must be at least 1x1, got {}x{}", args.width, args.height);
    }

    let config = ExplorerConfig::from_query(&args.link);
    let renderer = CpuJuliaRenderer::new().context("starting renderer")?;
    let mut controller =
        RenderLoopController::new(renderer, config.view, config.settings, config.gestures);

    let mut ticket = controller.request_capture()?;
    controller.tick(canvas);
    let frame = ticket
        .try_take()
        .context("capture did not complete on the first frame")??;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    julia_explorer::write_ppm(&frame, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(link = %controller.share_link(""), "done");

    Ok(())
}
