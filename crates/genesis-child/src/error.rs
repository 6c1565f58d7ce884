//! Error types for configuration loading and stylesheet registration.

use std::path::PathBuf;

use thiserror::Error;

/// Error building a stylesheet registration.
#[derive(Debug, Error)]
pub enum EnqueueError {
    /// The stylesheet file could not be inspected for its version token.
    #[error("cannot read stylesheet metadata for {}: {source}", path.display())]
    Stylesheet {
        /// Path of the stylesheet that was probed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error loading extension configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid YAML or is missing required fields.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
