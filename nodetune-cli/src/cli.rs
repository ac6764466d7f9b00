use crate::commands::{kargs::KargsArgs, render::RenderArgs, units::UnitsArgs};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nodetune")]
#[command(author, version, about = "Render performance profiles into node configuration", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full machine config for a profile
    Render(RenderArgs),

    /// Print the kernel arguments for a profile, one per line
    Kargs(KargsArgs),

    /// Print the systemd units generated for a profile
    Units(UnitsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["nodetune", "render", "--profile", "p.yaml"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.profile.profile.to_str(), Some("p.yaml"));
                assert!(!cli.global.debug);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_profile_required() {
        assert!(Cli::try_parse_from(["nodetune", "kargs"]).is_err());
    }
}
