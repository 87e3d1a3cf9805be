//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoding and serialization errors, and provides semantic
//! variants for layout validation and encoding failures.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::FaceName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JPEG encoding error: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported image format: {format}. Only JPEG and PNG skyboxes can be split")]
    UnsupportedFormat { format: String },

    #[error("Source image {width}x{height} is too small for a 4x3 cross layout (needs at least 4x3)")]
    SourceTooSmall { width: u32, height: u32 },

    #[error(
        "Region {name} at ({x}, {y}) with size {width}x{height} exceeds source bounds {source_width}x{source_height}"
    )]
    RegionOutOfBounds {
        name: FaceName,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },

    #[error("Face {width}x{height} exceeds the JPEG limit of 65535 pixels per side")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("Output directory does not exist or is not a directory: {0}")]
    OutputDirMissing(PathBuf),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Failed to write {} face(s): {}", .0.len(), join_failures(.0))]
    FacesFailed(Vec<(FaceName, String)>),
}

fn join_failures(failures: &[(FaceName, String)]) -> String {
    failures
        .iter()
        .map(|(name, reason)| format!("{name} ({reason})"))
        .collect::<Vec<_>>()
        .join(", ")
}
