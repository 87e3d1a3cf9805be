use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skyboxer",
    version,
    arg_required_else_help = true,
    about = "Skyboxer is a simple tool to cut up free skybox jpgs or pngs into usable textures.",
    after_help = "Example usage:\n  skyboxer -f ~/Downloads/skybox.jpg -o ./game/assets/skybox"
)]
pub struct CliArgs {
    /// Path to the horizontal-cross skybox image to slice up
    #[arg(short, long)]
    pub file: PathBuf,

    /// Existing directory to write the six faces into
    #[arg(short, long)]
    pub out_dir: PathBuf,

    /// JSON preset with split parameters; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JPEG quality (1-100) for lossy inputs
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Extract faces one after another instead of in parallel
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Write a skybox.json manifest next to the faces
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
