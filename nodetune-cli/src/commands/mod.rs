pub mod kargs;
pub mod render;
pub mod units;

use clap::Args;
use nodetune::{NodetuneError, NodetuneResult, PerformanceProfile};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Performance profile document (YAML or JSON)
    #[arg(short, long)]
    pub profile: PathBuf,
}

impl ProfileArgs {
    pub fn load(&self) -> NodetuneResult<PerformanceProfile> {
        load_profile(&self.profile)
    }
}

/// Read a profile document. YAML is a superset of the JSON we accept, so one
/// parser covers both.
pub fn load_profile(path: &Path) -> NodetuneResult<PerformanceProfile> {
    let raw = std::fs::read_to_string(path)?;
    let profile: PerformanceProfile = serde_yaml::from_str(&raw)
        .map_err(|e| NodetuneError::Profile(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(
        profile = profile.name(),
        path = %path.display(),
        "Loaded performance profile"
    );

    Ok(profile)
}
