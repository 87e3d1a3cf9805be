use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Split parameters suitable for preset files and the CLI.
///
/// The output encoding is not configurable: it always follows the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    /// JPEG quality (1-100), only used for lossy output
    pub jpeg_quality: u8,
    /// Extract and encode faces on the rayon thread pool
    pub parallel: bool,
    /// Write a `skybox.json` sidecar next to the faces
    pub write_manifest: bool,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            parallel: true,
            write_manifest: false,
        }
    }
}

impl SplitParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: SplitParams = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }
}
