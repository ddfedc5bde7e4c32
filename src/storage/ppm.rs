use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `frame` as a binary (P6) PPM image, top row first.
pub fn write_ppm(frame: &PixelBuffer, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    encode_ppm(frame, &mut writer)?;
    writer.flush()?;

    let size = frame.size();
    info!(path = %path.display(), width = size.width, height = size.height, "wrote ppm");

    Ok(())
}

pub fn encode_ppm(frame: &PixelBuffer, mut out: impl Write) -> std::io::Result<()> {
    let size = frame.size();

    // P6: binary RGB, 8 bits per channel
    write!(out, "P6\n{} {}\n255\n", size.width, size.height)?;
    out.write_all(frame.buffer())
}
