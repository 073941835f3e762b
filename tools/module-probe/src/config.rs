//! Configuration management (<config dir>/module-probe/config.toml)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nether_module::LoadConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print file sizes next to detected formats
    #[serde(default = "default_true")]
    pub show_size: bool,
}

fn default_true() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_size: true }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io", "nethercore", "module-probe")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the config file at `path`, or the default location when `None`
///
/// A missing default config file is not an error; an explicit path that
/// cannot be read or parsed is.
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {:?}", path))?;
            toml::from_str(&content).with_context(|| format!("Failed to parse config: {:?}", path))
        }
        None => Ok(config_dir()
            .and_then(|dir| std::fs::read_to_string(dir.join("config.toml")).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()),
    }
}
