use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use saju_core::EngineConfig;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SAJU_CONFIG";

/// `--config`, then `$SAJU_CONFIG`, then `None` for built-in defaults.
pub fn resolve_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
}

pub fn load(flag: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = resolve_path(flag) else {
        tracing::debug!("no config file, using defaults");
        return Ok(EngineConfig::default());
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = EngineConfig::from_toml_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
