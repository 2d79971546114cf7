//! pltform: layered configuration and small helpers for prediction tooling
//!
//! Loads YAML config files into named profiles (with `default` as the base
//! layer) and provides the general-purpose helpers the prediction code leans
//! on: rank assignment, argv-style keyword parsing and `<TOKEN>` substitution.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{ConfigStore, FileList, Params, DEFAULT_PROFILE};
pub use error::{ConfigError, FormatError};
pub use utils::{parse_argv, rankdata, replace_tokens, ArgValue, RankMethod, RankOrder, Ranks};
