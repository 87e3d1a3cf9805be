use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not resolve path {path:?}: {source}")]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Skybox(#[from] skyboxer::Error),
}
