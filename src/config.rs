use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RulesConfig {
    /// Alternate rules payload; the embedded one is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Analyze,
    Compare,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_markdown")]
    pub markdown: bool,
    #[serde(default)]
    pub default_mode: Mode,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            markdown: default_markdown(),
            default_mode: Mode::default(),
            wrap_width: default_wrap_width(),
        }
    }
}

fn default_markdown() -> bool {
    true
}

fn default_wrap_width() -> usize {
    80
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("qualia").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Reads `path`, falling back to defaults when the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// The rules file to load: `override_path` wins over the config file.
    pub fn rules_path<'a>(&'a self, override_path: Option<&'a Path>) -> Option<&'a Path> {
        override_path.or(self.rules.path.as_deref())
    }
}
