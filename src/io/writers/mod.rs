//! Face writers: one encoder per supported `ImageEncoding`, plus the optional
//! JSON manifest sidecar.
pub mod jpeg;
pub mod manifest;
pub mod png;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::extract::FaceImage;
use crate::core::params::SplitParams;
use crate::error::Result;
use crate::types::{FaceName, ImageEncoding};

impl ImageEncoding {
    /// Output path of `face` inside `out_dir`: `<faceName>.<ext>`.
    pub fn face_path(&self, out_dir: &Path, face: FaceName) -> PathBuf {
        out_dir.join(format!("{}.{}", face.as_str(), self.extension()))
    }

    /// Encode `image` to `output` with this encoding.
    pub fn encode_to(&self, output: &Path, image: &FaceImage, params: &SplitParams) -> Result<()> {
        info!("Encoding {} -> {:?}", self, output);
        match self {
            ImageEncoding::Jpeg => jpeg::write_rgba_jpeg(output, image, params.jpeg_quality),
            ImageEncoding::Png => png::write_rgba_png(output, image),
        }
    }
}
