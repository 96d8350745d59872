//! Configuration file (pragma.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// Host a tree is translated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Record construction calls as JSON
    Trace,
    /// Render static HTML
    #[default]
    Markup,
}

impl HostKind {
    /// Extension of files written for this host.
    pub fn output_extension(self) -> &'static str {
        match self {
            Self::Trace => "trace.json",
            Self::Markup => "html",
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub host: HostKind,
    /// Pretty-print trace JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            host: HostKind::default(),
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            output: default_output(),
        }
    }
}

fn default_pretty() -> bool {
    true
}
fn default_extension() -> String {
    "json".to_string()
}
fn default_output() -> String {
    "out".to_string()
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}
