//! Error types for the RTP monitor

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Screen error: {0}")]
    Screen(#[from] ScreenError),
}

/// Capture source and address resolution errors
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Interface name is empty")]
    EmptyInterface,

    #[error("Unknown interface: {0}")]
    UnknownInterface(String),

    #[error("Failed to open capture on {interface}: {source}")]
    Open {
        interface: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Read failed: {0}")]
    Read(#[source] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid port window: {min}..={max}")]
    InvalidPortWindow { min: u16, max: u16 },

    #[error("Read timeout must be within 10..=1000 ms, got {0} ms")]
    InvalidReadTimeout(u64),

    #[error("Sample interval must be non-zero")]
    InvalidSampleInterval,

    #[error("Snap length {0} cannot hold Ethernet/IPv4/UDP headers")]
    InvalidSnapLen(usize),
}

/// Terminal errors
#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Terminal setup failed: {0}")]
    Setup(#[source] std::io::Error),

    #[error("Terminal write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("Terminal input failed: {0}")]
    Input(#[source] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, Error>;
