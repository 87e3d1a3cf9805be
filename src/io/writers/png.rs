use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::extract::FaceImage;
use crate::error::Result;

/// Encode an RGBA face as PNG, keeping every channel bit-exact.
pub fn write_rgba_png(output: &Path, face: &FaceImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new(&mut writer).write_image(
        face.as_raw(),
        face.width(),
        face.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}
