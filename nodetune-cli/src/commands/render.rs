use super::ProfileArgs;
use anyhow::Context;
use clap::{Args, ValueEnum};
use nodetune::MachineConfig;
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Directory holding scripts/pre-boot-tuning.sh and scripts/reboot.sh
    #[arg(long, env = "NODETUNE_ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn execute(args: RenderArgs) -> anyhow::Result<()> {
    let profile = args.profile.load()?;
    let mc = nodetune::machineconfig::new(&args.assets_dir, &profile).with_context(|| {
        format!(
            "Failed to render profile '{}' with assets from {}",
            profile.name(),
            args.assets_dir.display()
        )
    })?;

    let rendered = format_machine_config(&mc, args.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn format_machine_config(mc: &MachineConfig, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(mc)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(mc)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
