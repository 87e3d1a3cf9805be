//! Shared types and enums used across the crate.
//! Includes the six cubemap `FaceName`s and the run-wide `ImageEncoding`.
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the six cubemap faces found in a horizontal cross.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum FaceName {
    #[serde(rename = "posY")]
    PosY,
    #[serde(rename = "negX")]
    NegX,
    #[serde(rename = "negZ")]
    NegZ,
    #[serde(rename = "negY")]
    NegY,
    #[serde(rename = "posX")]
    PosX,
    #[serde(rename = "posZ")]
    PosZ,
}

impl FaceName {
    /// Canonical output order.
    pub const ALL: [FaceName; 6] = [
        FaceName::PosY,
        FaceName::NegX,
        FaceName::NegZ,
        FaceName::NegY,
        FaceName::PosX,
        FaceName::PosZ,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaceName::PosY => "posY",
            FaceName::NegX => "negX",
            FaceName::NegZ => "negZ",
            FaceName::NegY => "negY",
            FaceName::PosX => "posX",
            FaceName::PosZ => "posZ",
        }
    }

    /// Cell of the 4x3 grid holding this face, as (column, row).
    pub fn grid_cell(&self) -> (u32, u32) {
        match self {
            FaceName::PosY => (1, 0),
            FaceName::NegX => (0, 1),
            FaceName::NegZ => (1, 1),
            FaceName::NegY => (1, 2),
            FaceName::PosX => (2, 1),
            FaceName::PosZ => (3, 1),
        }
    }
}

impl std::fmt::Display for FaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Encoding shared by every face of a run, detected from the input file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ImageEncoding {
    /// Lossy, written as `.jpg`
    Jpeg,
    /// Lossless, written as `.png`
    Png,
}

impl ImageEncoding {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageEncoding::Jpeg => "jpg",
            ImageEncoding::Png => "png",
        }
    }

    pub fn from_image_format(format: ImageFormat) -> Result<Self> {
        match format {
            ImageFormat::Jpeg => Ok(ImageEncoding::Jpeg),
            ImageFormat::Png => Ok(ImageEncoding::Png),
            other => Err(Error::UnsupportedFormat {
                format: format!("{:?}", other),
            }),
        }
    }
}

impl std::fmt::Display for ImageEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageEncoding::Jpeg => write!(f, "JPEG"),
            ImageEncoding::Png => write!(f, "PNG"),
        }
    }
}
