//! Core building blocks: the cross layout calculator, the face extractor, and
//! the run parameters. These are pure, I/O-free primitives consumed by the
//! high-level `api` module.
pub mod extract;
pub mod layout;
pub mod params;
