//! Horizontal-cross layout: where each of the six faces sits in the source image.
//!
//! The source is treated as a 4-column by 3-row grid. Face size is the source size
//! divided by the grid size with integer division, so any leftover columns on the
//! right or rows at the bottom belong to no face.
use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::FaceName;

pub const GRID_COLUMNS: u32 = 4;
pub const GRID_ROWS: u32 = 3;

/// Sub-rectangle of the source image holding one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceRegion {
    pub name: FaceName,
    pub origin_x: u32,
    pub origin_y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    /// True when the whole region lies inside a `source_width` x `source_height` image.
    pub fn fits_within(&self, source_width: u32, source_height: u32) -> bool {
        self.origin_x as u64 + self.width as u64 <= source_width as u64
            && self.origin_y as u64 + self.height as u64 <= source_height as u64
    }

    pub(crate) fn out_of_bounds(&self, source_width: u32, source_height: u32) -> Error {
        Error::RegionOutOfBounds {
            name: self.name,
            x: self.origin_x,
            y: self.origin_y,
            width: self.width,
            height: self.height,
            source_width,
            source_height,
        }
    }
}

/// The six face regions of a cross plus their shared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossLayout {
    pub face_width: u32,
    pub face_height: u32,
    pub regions: [FaceRegion; 6],
}

/// Compute the six face regions for a source of the given size.
///
/// Pure arithmetic; never fails. Use [`CrossLayout::validate`] before extracting.
pub fn compute_layout(source_width: u32, source_height: u32) -> CrossLayout {
    let face_width = source_width / GRID_COLUMNS;
    let face_height = source_height / GRID_ROWS;

    let regions = FaceName::ALL.map(|name| {
        let (col, row) = name.grid_cell();
        FaceRegion {
            name,
            origin_x: face_width * col,
            origin_y: face_height * row,
            width: face_width,
            height: face_height,
        }
    });

    CrossLayout {
        face_width,
        face_height,
        regions,
    }
}

impl CrossLayout {
    /// Reject layouts that would produce empty faces or read outside the source.
    pub fn validate(&self, source_width: u32, source_height: u32) -> Result<()> {
        if self.face_width == 0 || self.face_height == 0 {
            return Err(Error::SourceTooSmall {
                width: source_width,
                height: source_height,
            });
        }
        match self
            .regions
            .iter()
            .find(|r| !r.fits_within(source_width, source_height))
        {
            Some(region) => Err(region.out_of_bounds(source_width, source_height)),
            None => Ok(()),
        }
    }

    /// Columns and rows of the source that no face covers.
    pub fn remainder(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        (
            source_width.saturating_sub(self.face_width * GRID_COLUMNS),
            source_height.saturating_sub(self.face_height * GRID_ROWS),
        )
    }

    pub fn region(&self, name: FaceName) -> Option<&FaceRegion> {
        self.regions.iter().find(|r| r.name == name)
    }
}
