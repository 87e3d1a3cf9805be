use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::api::SplitReport;
use crate::error::Result;

pub const MANIFEST_FILE_NAME: &str = "skybox.json";

#[derive(Serialize)]
struct Manifest<'a> {
    generated: String,
    #[serde(flatten)]
    report: &'a SplitReport,
}

/// Write a JSON sidecar describing the split into `out_dir`.
pub fn write_manifest(out_dir: &Path, report: &SplitReport) -> Result<PathBuf> {
    let manifest = Manifest {
        generated: chrono::Utc::now().to_rfc3339(),
        report,
    };
    let path = out_dir.join(MANIFEST_FILE_NAME);
    let json_string = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&path, json_string)?;
    info!("Manifest written: {:?}", path);
    Ok(path)
}
