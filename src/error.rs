//! Error types for config loading and token formatting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or querying a [`crate::ConfigStore`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("no config file names in '{0}'")]
    NoFiles(String),

    #[error("could not read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Valid YAML, but not profile -> section -> parameters
    #[error("invalid YAML config '{}': {reason}", .path.display())]
    Shape { path: PathBuf, reason: String },

    /// Document parsed to nothing useful (empty file, `~`, `{}`, `false`, ...)
    #[error("could not load from '{}': empty config", .path.display())]
    Empty { path: PathBuf },

    #[error("default profile ('{}') never loaded", crate::config::DEFAULT_PROFILE)]
    DefaultProfileMissing,

    #[error("profile '{0}' never loaded")]
    ProfileNotLoaded(String),
}

/// Errors raised by [`crate::replace_tokens`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("token '{token}' not found in supplied values")]
    MissingToken { token: String },
}
