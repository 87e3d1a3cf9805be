//! Command Line Interface (CLI) layer for skyboxer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`). It wires user-provided options to
//! the underlying library functionality exposed via `skyboxer::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
