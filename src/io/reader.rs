//! Source image loading with content-based format detection.
use std::io::{BufRead, Cursor, Seek};
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ImageEncoding;

/// Decoded skybox plus the encoding detected from its contents.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub path: Option<PathBuf>,
    pub encoding: ImageEncoding,
    pub image: RgbaImage,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Open and decode a skybox file. The format is guessed from the file contents,
/// not its extension.
pub fn open_source(path: &Path) -> Result<SourceImage> {
    let reader = ImageReader::open(path)?;
    let mut source = decode_with(reader)?;
    info!(
        "Opened {:?}: {}x{} {}",
        path,
        source.width(),
        source.height(),
        source.encoding
    );
    source.path = Some(path.to_path_buf());
    Ok(source)
}

/// Decode an in-memory skybox file.
pub fn decode_source(bytes: &[u8]) -> Result<SourceImage> {
    decode_with(ImageReader::new(Cursor::new(bytes)))
}

fn decode_with<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<SourceImage> {
    let reader = reader.with_guessed_format()?;
    let format = reader.format().ok_or_else(|| Error::UnsupportedFormat {
        format: "unknown".to_string(),
    })?;
    // Reject before decoding so unsupported inputs never reach the encoders
    let encoding = ImageEncoding::from_image_format(format)?;
    let image = reader.decode()?.to_rgba8();

    Ok(SourceImage {
        path: None,
        encoding,
        image,
    })
}
