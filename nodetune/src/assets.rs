//! Script asset loading.
//!
//! Tuning scripts live under `<assets_dir>/scripts/<name>.sh`. A missing
//! script is an error: a node that gets only half of its tuning sequence
//! never finishes booting into a usable state.

use nodetune_shared::constants::scripts as const_scripts;
use nodetune_shared::{NodetuneError, NodetuneResult};
use std::path::{Path, PathBuf};

/// Raw content of one script asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptAsset {
    pub name: &'static str,
    pub content: Vec<u8>,
}

/// Path of a script inside the asset directory.
pub fn script_path(assets_dir: &Path, name: &str) -> PathBuf {
    assets_dir
        .join(const_scripts::ASSET_SUBDIR)
        .join(format!("{}.{}", name, const_scripts::EXTENSION))
}

/// Read a script's raw bytes.
pub fn load_script(assets_dir: &Path, name: &str) -> NodetuneResult<Vec<u8>> {
    let path = script_path(assets_dir, name);
    let content = std::fs::read(&path).map_err(|e| NodetuneError::asset(name, &path, e))?;

    tracing::debug!(
        script = name,
        path = %path.display(),
        bytes = content.len(),
        "Loaded script asset"
    );

    Ok(content)
}

/// Load every script in the catalog, in catalog order.
///
/// Stops at the first failure; no partial set is returned.
pub fn load_all(assets_dir: &Path) -> NodetuneResult<Vec<ScriptAsset>> {
    const_scripts::ALL
        .iter()
        .map(|&name| {
            Ok(ScriptAsset {
                name,
                content: load_script(assets_dir, name)?,
            })
        })
        .collect()
}
