//! nodetune - render performance profiles into node configuration
//!
//! # Usage
//!
//! ```bash
//! # Full machine config as YAML
//! nodetune render --profile profile.yaml --assets-dir assets
//!
//! # Same, as JSON
//! nodetune render --profile profile.yaml --format json
//!
//! # Kernel arguments only
//! nodetune kargs --profile profile.yaml
//!
//! # Rendered systemd units
//! nodetune units --profile profile.yaml
//! ```

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.debug);

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Kargs(args) => commands::kargs::execute(args),
        Commands::Units(args) => commands::units::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries only the rendered artifact.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
