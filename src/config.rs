//! Application configuration
//!
//! Every field has a default, so a missing file or a partial TOML document is
//! fine. Lookup order: an explicit path, then `config.toml` in the platform
//! config directory, then built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::*;
use crate::error::ConfigError;
use crate::flow::PortWindow;

/// Smallest frame that can carry Ethernet, IPv4 and UDP headers
const MIN_SNAP_LEN: usize = ETHERNET_HEADER_LEN + IPV4_MIN_HEADER_LEN + UDP_HEADER_LEN;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    pub filter: FilterConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// Raw capture socket settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Bounded wait for each frame read; also the input poll cadence
    pub read_timeout_ms: u64,
    /// Receive buffer size; longer frames are truncated
    pub snap_len: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            snap_len: DEFAULT_SNAP_LEN,
        }
    }
}

impl CaptureConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

/// RTP port window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub port_min: u16,
    pub port_max: u16,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            port_min: DEFAULT_RTP_PORT_MIN,
            port_max: DEFAULT_RTP_PORT_MAX,
        }
    }
}

impl FilterConfig {
    pub fn window(&self) -> PortWindow {
        PortWindow::new(self.port_min, self.port_max)
    }
}

/// Dashboard refresh settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sample_interval_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
        }
    }
}

impl DashboardConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log file; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve the effective configuration
    ///
    /// An explicit path must exist. The default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let FilterConfig { port_min, port_max } = self.filter;
        if port_min == 0 || port_min > port_max {
            return Err(ConfigError::InvalidPortWindow {
                min: port_min,
                max: port_max,
            });
        }

        if !(10..=1000).contains(&self.capture.read_timeout_ms) {
            return Err(ConfigError::InvalidReadTimeout(self.capture.read_timeout_ms));
        }

        if self.capture.snap_len < MIN_SNAP_LEN {
            return Err(ConfigError::InvalidSnapLen(self.capture.snap_len));
        }

        if self.dashboard.sample_interval_ms == 0 {
            return Err(ConfigError::InvalidSampleInterval);
        }

        Ok(())
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "rtp-monitor")
}

/// `config.toml` in the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// `rtp-monitor.log` in the platform data directory
pub fn default_log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("rtp-monitor.log"))
}
