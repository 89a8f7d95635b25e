//! Configuration types and loading
//!
//! Settings layer, lowest priority first: built-in defaults, config file,
//! `FILLIN_*` environment variables, command-line flags.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::{DEFAULT_KEY_PATTERN, DEFAULT_LEFT_DELIMITER, DEFAULT_RIGHT_DELIMITER};

/// Placeholder syntax and prompting behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Literal text opening a placeholder
    #[serde(rename = "left-delimiter")]
    pub left_delimiter: String,

    /// Literal text closing a placeholder
    #[serde(rename = "right-delimiter")]
    pub right_delimiter: String,

    /// Regex fragment matched as the placeholder key
    #[serde(rename = "key-pattern")]
    pub key_pattern: String,

    /// Prompt even when a stored value exists
    #[serde(rename = "prompt-default")]
    pub prompt_default: bool,

    /// Print the source line before prompting
    #[serde(rename = "prompt-echo")]
    pub prompt_echo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_delimiter: DEFAULT_LEFT_DELIMITER.to_string(),
            right_delimiter: DEFAULT_RIGHT_DELIMITER.to_string(),
            key_pattern: DEFAULT_KEY_PATTERN.to_string(),
            prompt_default: true,
            prompt_echo: true,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .fillin.yml
        let local_config = PathBuf::from(".fillin.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/fillin/config.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("fillin").join("config.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply `FILLIN_*` environment overrides
    pub fn with_env(mut self) -> Self {
        if let Ok(left) = env::var("FILLIN_LEFT_DELIMITER") {
            self.left_delimiter = left;
        }
        if let Ok(right) = env::var("FILLIN_RIGHT_DELIMITER") {
            self.right_delimiter = right;
        }
        if let Ok(pattern) = env::var("FILLIN_KEY_PATTERN") {
            self.key_pattern = pattern;
        }
        self
    }

    /// Apply command-line overrides, which win over everything
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(left) = &cli.left {
            self.left_delimiter = left.clone();
        }
        if let Some(right) = &cli.right {
            self.right_delimiter = right.clone();
        }
        if let Some(pattern) = &cli.pattern {
            self.key_pattern = pattern.clone();
        }
        if cli.use_defaults {
            self.prompt_default = false;
        }
        if cli.no_echo {
            self.prompt_echo = false;
        }
        self
    }
}
