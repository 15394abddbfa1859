use crate::errors::{AppError, AppResult};
use crate::export::DEFAULT_REPORT_FILE;
use crate::source::gitlab::DEFAULT_API_URL;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings file (YAML). Every field falls back to a built-in
/// default, so a partial or missing file is fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_output_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            output_file: default_output_file(),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.timereport`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timereport")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timereport.conf")
    }

    /// Load configuration from `custom` (must exist) or from the default
    /// location (optional).
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
