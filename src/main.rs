//! skyboxer CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, split the skybox,
//! and exit with appropriate status. For programmatic use, prefer the library
//! API (`skyboxer::api`).

use clap::Parser;
use clap::error::ErrorKind;

mod cli;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        // Bare invocation prints usage and is not a failure
        Err(err) if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
