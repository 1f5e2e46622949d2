// ABOUTME: Configuration loading for toast defaults and the demo application
// Reads an optional TOML file; anything missing falls back to built-in defaults

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::components::DEFAULT_TOAST_WIDTH;
use crate::models::{ToastKind, ToastPosition, ToastRequest, DEFAULT_DURATION};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Defaults applied to toasts built through [`ToastConfig::request`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
    pub position: ToastPosition,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    pub width: u16,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: u64::try_from(DEFAULT_DURATION.as_millis()).unwrap_or(3000),
            position: ToastPosition::default(),
            kind: ToastKind::default(),
            width: DEFAULT_TOAST_WIDTH,
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// A request for `message` carrying the configured defaults.
    pub fn request(&self, message: impl Into<String>) -> ToastRequest {
        ToastRequest::new(message)
            .with_duration(self.duration())
            .with_position(self.position)
            .with_kind(self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interval between UI ticks.
    pub tick_rate_ms: u64,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub toast: ToastConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log_filter: "toast_box=info".to_string(),
            toast: ToastConfig::default(),
        }
    }
}

impl AppConfig {
    /// Location of the user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "toast-box").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.toast.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "toast.duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
