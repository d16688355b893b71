//! CLI commands.

pub mod config;
pub mod scan;

use std::path::{Path, PathBuf};

use gaceta_core::ScanConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gaceta")
        .join("config.json")
}

/// The `--config` path when given, the default location otherwise.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when the file is missing.
pub fn load_config(path: &Path) -> anyhow::Result<ScanConfig> {
    if path.exists() {
        Ok(ScanConfig::from_file(path)?)
    } else {
        Ok(ScanConfig::default())
    }
}
