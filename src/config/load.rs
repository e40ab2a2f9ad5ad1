use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::ScriptConfig;

/// Highest script version this build understands
const SUPPORTED_VERSION: u32 = 1;

/// A parsed script together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedScript {
    /// The parsed script
    pub script: ScriptConfig,
    /// Where the script was read from
    pub path: PathBuf,
}

impl LoadedScript {
    /// Load a script file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script file: {}", path.display()))?;

        let script = parse_script(&content)
            .with_context(|| format!("failed to parse script file: {}", path.display()))?;

        Ok(Self {
            script,
            path: path.to_path_buf(),
        })
    }
}

/// Parse script JSON and check its version.
pub fn parse_script(content: &str) -> Result<ScriptConfig> {
    let script: ScriptConfig = serde_json::from_str(content)?;
    if script.version == 0 || script.version > SUPPORTED_VERSION {
        bail!(
            "unsupported script version {} (expected {})",
            script.version,
            SUPPORTED_VERSION
        );
    }
    Ok(script)
}
