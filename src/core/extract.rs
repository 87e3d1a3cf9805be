//! Face extraction: an identity crop of one layout region into its own buffer.
use image::{GenericImageView, ImageBuffer, Pixel, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::core::layout::{CrossLayout, FaceRegion};
use crate::error::Result;
use crate::types::FaceName;

/// Standalone face buffer as produced from a decoded RGBA source.
pub type FaceImage = RgbaImage;

/// Copy the pixels of `region` out of `source` into a freshly allocated buffer.
///
/// Every pixel value is copied unchanged, alpha included. The region is checked
/// against the source bounds before any pixel is read.
pub fn extract_face<I>(
    source: &I,
    region: &FaceRegion,
) -> Result<ImageBuffer<I::Pixel, Vec<<I::Pixel as Pixel>::Subpixel>>>
where
    I: GenericImageView,
{
    let (source_width, source_height) = source.dimensions();
    if !region.fits_within(source_width, source_height) {
        return Err(region.out_of_bounds(source_width, source_height));
    }

    let mut face = ImageBuffer::new(region.width, region.height);
    for ly in 0..region.height {
        for lx in 0..region.width {
            let pixel = source.get_pixel(region.origin_x + lx, region.origin_y + ly);
            face.put_pixel(lx, ly, pixel);
        }
    }

    debug!(
        "Extracted {} from ({}, {}) size {}x{}",
        region.name, region.origin_x, region.origin_y, region.width, region.height
    );
    Ok(face)
}

/// Run `f` over every region of `layout`, in canonical order, optionally on the
/// rayon pool. Results come back in region order either way.
pub fn map_regions<R, F>(layout: &CrossLayout, parallel: bool, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(&FaceRegion) -> R + Sync + Send,
{
    if parallel {
        layout.regions[..].par_iter().map(f).collect()
    } else {
        layout.regions.iter().map(f).collect()
    }
}

/// Extract all six faces of `layout` from `source`.
pub fn extract_all(
    source: &RgbaImage,
    layout: &CrossLayout,
    parallel: bool,
) -> Result<Vec<(FaceName, FaceImage)>> {
    map_regions(layout, parallel, |region| {
        extract_face(source, region).map(|face| (region.name, face))
    })
    .into_iter()
    .collect()
}
