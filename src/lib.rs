#![doc = r#"
skyboxer — cut a horizontal-cross skybox into six cubemap face textures.

Many free skyboxes ship as a single image laid out as a cross on a 4-column by
3-row grid: four faces across the middle row, one above and one below the second
column. This crate computes where each face sits, copies it into its own buffer
without resampling, and writes it back out in the same encoding as the input.

Add dependency
--------------
```toml
[dependencies]
skyboxer = "0.1"
```

Quick start: split a file into a directory
------------------------------------------
```rust,no_run
use std::path::Path;
use skyboxer::{split_skybox_to_dir, SplitParams};

fn main() -> skyboxer::Result<()> {
    let report = split_skybox_to_dir(
        Path::new("skybox.png"),
        Path::new("assets/skybox"),
        &SplitParams::default(),
    )?;

    for face in &report.faces {
        println!("{} -> {:?}", face.name, face.file);
    }
    Ok(())
}
```

In-memory split
---------------
```rust
use image::RgbaImage;
use skyboxer::{split_image, FaceName, SplitParams};

fn main() -> skyboxer::Result<()> {
    let cross = RgbaImage::new(800, 600);
    let faces = split_image(&cross, &SplitParams::default())?;

    assert_eq!(faces.len(), 6);
    assert_eq!(faces[0].0, FaceName::PosY);
    assert_eq!(faces[0].1.dimensions(), (200, 200));
    Ok(())
}
```

Layout only
-----------
```rust
use skyboxer::{compute_layout, FaceName};

let layout = compute_layout(801, 600);
assert_eq!((layout.face_width, layout.face_height), (200, 200));
let pos_x = layout.region(FaceName::PosX).unwrap();
assert_eq!((pos_x.origin_x, pos_x.origin_y), (400, 200));
```

Error handling
--------------
All public functions return `skyboxer::Result<T>`; match on `skyboxer::Error` to
handle specific cases such as an unsupported input format or an undersized source.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — layout calculation and face extraction.
- [`io`] — source decoding and JPEG/PNG/manifest writers.
- [`types`] — `FaceName` and `ImageEncoding`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::SplitParams;
pub use error::{Error, Result};
pub use types::{FaceName, ImageEncoding};

// Layout and extraction
pub use crate::core::extract::{FaceImage, extract_all, extract_face};
pub use crate::core::layout::{CrossLayout, FaceRegion, compute_layout};

// Readers
pub use io::reader::{SourceImage, decode_source, open_source};

// High-level API re-exports
pub use api::{
    SplitReport, WrittenFace, plan_layout, split_image, split_skybox_to_dir,
    split_source_to_dir,
};
