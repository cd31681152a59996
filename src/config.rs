use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CreditsError;
use crate::exclude::ExcludeRule;
use crate::license::fetcher::DEFAULT_TIMEOUT_SECS;
use crate::output::{DocumentStyle, DEFAULT_FONT_SIZE, DEFAULT_TITLE_FONT_SIZE};

pub const CONFIG_FILE_NAME: &str = "credits.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Title font size in points
    pub title_font_size: Option<u32>,

    /// Body font size in points
    pub font_size: Option<u32>,

    /// Repository names left out of the document
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns matched against repository names
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Don't open the document after writing it
    pub no_open: Option<bool>,

    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title_font_size: Some(DEFAULT_TITLE_FONT_SIZE),
            font_size: Some(DEFAULT_FONT_SIZE),
            exclude: Vec::new(),
            exclude_patterns: Vec::new(),
            no_open: Some(false),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn style(&self) -> DocumentStyle {
        DocumentStyle {
            title_font_size: self.title_font_size.unwrap_or(DEFAULT_TITLE_FONT_SIZE),
            font_size: self.font_size.unwrap_or(DEFAULT_FONT_SIZE),
        }
    }

    pub fn excludes(&self) -> ExcludeRule {
        ExcludeRule::new(self.exclude.clone(), self.exclude_patterns.clone())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Load `credits.toml` from the current directory, or defaults if absent.
pub fn load_config() -> Result<Config, CreditsError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_in(&dir)
}

pub fn load_config_in(dir: &Path) -> Result<Config, CreditsError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from(&path)
}

/// Load an explicit config file; unlike the implicit one it must exist.
pub fn load_config_from(path: &Path) -> Result<Config, CreditsError> {
    let config_error = |message: String| CreditsError::Config {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    let config: Config = toml::from_str(&content).map_err(|e| config_error(e.to_string()))?;

    if config.title_font_size == Some(0) || config.font_size == Some(0) {
        return Err(config_error("font sizes must be greater than zero".to_string()));
    }

    Ok(config)
}
