//! I/O layer: the skybox `reader` with format detection, and `writers` for
//! JPEG/PNG faces and the JSON manifest sidecar.
pub mod reader;
pub use reader::{SourceImage, decode_source, open_source};

pub mod writers;
