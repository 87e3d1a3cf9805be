use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::extract::FaceImage;
use crate::error::{Error, Result};

/// Encode an RGBA face as JPEG. The alpha channel is dropped by the codec.
pub fn write_rgba_jpeg(output: &Path, face: &FaceImage, quality: u8) -> Result<()> {
    let (width, height) = face.dimensions();
    let (cols, rows) = match (u16::try_from(width), u16::try_from(height)) {
        (Ok(cols), Ok(rows)) => (cols, rows),
        _ => return Err(Error::DimensionsTooLarge { width, height }),
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder.encode(face.as_raw(), cols, rows, ColorType::Rgba)?;
    // Drop would swallow a failed final write
    writer.flush()?;
    Ok(())
}
