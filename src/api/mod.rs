//! High-level, ergonomic library API: split a skybox file into face files, or an
//! in-memory image into face buffers. Prefer these entrypoints over the low-level
//! `core` modules when integrating skyboxer.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::extract::{FaceImage, extract_all, extract_face, map_regions};
use crate::core::layout::{CrossLayout, FaceRegion, compute_layout};
use crate::core::params::SplitParams;
use crate::error::{Error, Result};
use crate::io::reader::{SourceImage, open_source};
use crate::io::writers::manifest::write_manifest;
use crate::types::{FaceName, ImageEncoding};

/// One face written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFace {
    pub name: FaceName,
    pub file: PathBuf,
    pub origin_x: u32,
    pub origin_y: u32,
}

/// Summary of a completed split
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub source: Option<PathBuf>,
    pub source_width: u32,
    pub source_height: u32,
    pub face_width: u32,
    pub face_height: u32,
    pub encoding: ImageEncoding,
    /// Source columns right of the cross that no face covers
    pub excluded_columns: u32,
    /// Source rows below the cross that no face covers
    pub excluded_rows: u32,
    pub faces: Vec<WrittenFace>,
}

/// Compute and validate the cross layout for a source of the given size.
///
/// Sizes not divisible by the 4x3 grid are accepted; the leftover pixels are
/// excluded from every face and reported with a warning.
pub fn plan_layout(source_width: u32, source_height: u32) -> Result<CrossLayout> {
    let layout = compute_layout(source_width, source_height);
    layout.validate(source_width, source_height)?;

    let (cols, rows) = layout.remainder(source_width, source_height);
    if cols > 0 || rows > 0 {
        warn!(
            "Source {}x{} is not a multiple of 4x3; ignoring {} column(s) and {} row(s)",
            source_width, source_height, cols, rows
        );
    }
    info!("Face size: {}x{}", layout.face_width, layout.face_height);
    Ok(layout)
}

/// Split an in-memory cross image into its six faces (no disk I/O).
pub fn split_image(
    image: &RgbaImage,
    params: &SplitParams,
) -> Result<Vec<(FaceName, FaceImage)>> {
    let layout = plan_layout(image.width(), image.height())?;
    extract_all(image, &layout, params.parallel)
}

/// Open `input`, then write its six faces into `out_dir`.
pub fn split_skybox_to_dir(
    input: &Path,
    out_dir: &Path,
    params: &SplitParams,
) -> Result<SplitReport> {
    let source = open_source(input)?;
    split_source_to_dir(&source, out_dir, params)
}

/// Write the six faces of an already decoded source into `out_dir`, as
/// `<faceName>.<ext>` using the source's own encoding.
///
/// Every face is attempted even if another one fails; the call then returns
/// [`Error::FacesFailed`] naming the faces that could not be written.
pub fn split_source_to_dir(
    source: &SourceImage,
    out_dir: &Path,
    params: &SplitParams,
) -> Result<SplitReport> {
    params.validate()?;
    if !out_dir.is_dir() {
        return Err(Error::OutputDirMissing(out_dir.to_path_buf()));
    }

    let layout = plan_layout(source.width(), source.height())?;
    let encoding = source.encoding;

    // Each face buffer lives only until its file is written
    let outcomes = map_regions(&layout, params.parallel, |region: &FaceRegion| {
        let face = extract_face(&source.image, region)?;
        let file = encoding.face_path(out_dir, region.name);
        encoding.encode_to(&file, &face, params)?;
        Ok::<_, Error>(WrittenFace {
            name: region.name,
            file,
            origin_x: region.origin_x,
            origin_y: region.origin_y,
        })
    });

    let mut faces = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (region, outcome) in layout.regions.iter().zip(outcomes) {
        match outcome {
            Ok(face) => faces.push(face),
            Err(e) => {
                warn!("Failed to write {}: {}", region.name, e);
                failures.push((region.name, e.to_string()));
            }
        }
    }
    if !failures.is_empty() {
        return Err(Error::FacesFailed(failures));
    }

    let (excluded_columns, excluded_rows) = layout.remainder(source.width(), source.height());
    let report = SplitReport {
        source: source.path.clone(),
        source_width: source.width(),
        source_height: source.height(),
        face_width: layout.face_width,
        face_height: layout.face_height,
        encoding,
        excluded_columns,
        excluded_rows,
        faces,
    };

    if params.write_manifest {
        write_manifest(out_dir, &report)?;
    }

    info!("Wrote {} faces to {:?}", report.faces.len(), out_dir);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn split_image_returns_six_faces_in_order() {
        let image = RgbaImage::from_fn(80, 60, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let faces = split_image(&image, &SplitParams::default()).unwrap();
        let names: Vec<FaceName> = faces.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, FaceName::ALL.to_vec());
        for (_, face) in &faces {
            assert_eq!(face.dimensions(), (20, 20));
        }
        // negY starts at (20, 40)
        assert_eq!(*faces[3].1.get_pixel(0, 0), Rgba([20, 40, 0, 255]));
    }

    #[test]
    fn split_image_rejects_tiny_source() {
        let image = RgbaImage::new(3, 2);
        assert!(matches!(
            split_image(&image, &SplitParams::default()),
            Err(Error::SourceTooSmall { width: 3, height: 2 })
        ));
    }

    #[test]
    fn missing_output_dir_is_reported() {
        let source = SourceImage {
            path: None,
            encoding: ImageEncoding::Png,
            image: RgbaImage::new(8, 6),
        };
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            split_source_to_dir(&source, &missing, &SplitParams::default()),
            Err(Error::OutputDirMissing(_))
        ));
    }
}
