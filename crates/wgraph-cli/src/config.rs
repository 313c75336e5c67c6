//! User configuration (`<config_dir>/wgraph/config.toml`).
//!
//! ```toml
//! output = "json"
//!
//! [analysis]
//! degree_mode = "out"
//! ```
//!
//! Every field is optional; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wgraph_core::DegreeMode;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_degree_mode")]
    pub degree_mode: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            degree_mode: default_degree_mode(),
        }
    }
}

impl AnalysisConfig {
    /// The configured degree mode, validated.
    pub fn degree_mode(&self) -> Result<DegreeMode> {
        self.degree_mode
            .parse()
            .context("invalid [analysis] degree_mode in config")
    }
}

/// Default location of the user config file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wgraph/config.toml"))
}

/// Load the user config from `explicit`, or from the default location.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_user_config(explicit: Option<&Path>) -> Result<UserConfig> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(UserConfig::default());
    };
    if !path.exists() {
        return Ok(UserConfig::default());
    }
    read_config(&path)
}

fn read_config(path: &Path) -> Result<UserConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn default_degree_mode() -> String {
    DegreeMode::default().as_str().to_string()
}
