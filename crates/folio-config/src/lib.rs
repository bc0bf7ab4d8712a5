use folio_engine::{RenderMode, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `base_url` for share links.
pub const BASE_URL_ENV: &str = "FOLIO_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub content_path: PathBuf,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub theme: Theme,
    /// Mode for posts whose front matter does not pick one.
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl Config {
    pub fn new(content_path: PathBuf) -> Self {
        Self {
            content_path,
            base_url: default_base_url(),
            theme: Theme::default(),
            render_mode: RenderMode::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the content path
        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/folio");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Base URL for share links, with `FOLIO_BASE_URL` taking precedence.
    pub fn effective_base_url(&self) -> String {
        self.base_url_with_override(std::env::var(BASE_URL_ENV).ok())
    }

    fn base_url_with_override(&self, env_value: Option<String>) -> String {
        match env_value {
            Some(url) if !url.trim().is_empty() => {
                log::debug!("Using base URL from {BASE_URL_ENV}");
                url.trim().to_string()
            }
            _ => self.base_url.clone(),
        }
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
