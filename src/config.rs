use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::{Clip2KmlError, Result};
use crate::geocode::DEFAULT_ENDPOINT;
use crate::utils::paths::{get_config_path, get_default_api_key_path, get_default_output_dir};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_path: Option<PathBuf>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// No timeout unless set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// XML-escape the canonical name in `<name>`.
    #[serde(default)]
    pub escape_name: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            api_key_path: None,
            endpoint: default_endpoint(),
            timeout_secs: None,
            escape_name: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            Clip2KmlError::config(format!("failed to read {}: {e}", config_path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            Clip2KmlError::config(format!("invalid config {}: {e}", config_path.display()))
        })
    }

    pub fn output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_default_output_dir(),
        }
    }

    pub fn api_key_path(&self) -> Result<PathBuf> {
        match &self.api_key_path {
            Some(path) => Ok(path.clone()),
            None => get_default_api_key_path(),
        }
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| {
            Clip2KmlError::config(format!("invalid geocoder endpoint '{}': {e}", self.endpoint))
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
