use std::path::{Path, PathBuf};

use tracing::info;

use skyboxer::{SplitParams, split_skybox_to_dir};

use super::args::CliArgs;
use super::errors::AppError;

fn absolute(path: &Path) -> Result<PathBuf, AppError> {
    std::path::absolute(path).map_err(|source| AppError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })
}

/// Build split parameters from an optional preset, then apply CLI overrides.
fn resolve_params(args: &CliArgs) -> Result<SplitParams, AppError> {
    let mut params = match &args.config {
        Some(path) => SplitParams::from_json_file(&absolute(path)?)?,
        None => SplitParams::default(),
    };
    if let Some(quality) = args.quality {
        params.jpeg_quality = quality;
    }
    if args.sequential {
        params.parallel = false;
    }
    if args.manifest {
        params.write_manifest = true;
    }
    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    let input = absolute(&args.file)?;
    let out_dir = absolute(&args.out_dir)?;

    info!("Splitting {:?} into {:?}", input, out_dir);
    let report = split_skybox_to_dir(&input, &out_dir, &params).map_err(AppError::from)?;

    for face in &report.faces {
        info!("Wrote {} -> {:?}", face.name, face.file);
    }
    info!(
        "Successfully split {:?}: {} {}x{} faces",
        input,
        report.faces.len(),
        report.face_width,
        report.face_height
    );

    Ok(())
}
