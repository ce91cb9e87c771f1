use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    /// The selector was asked to move in a position without legal moves.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for option `{name}`: {value}")]
    InvalidOption { name: String, value: String },
}
