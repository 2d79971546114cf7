//! Profile-indexed config store
//!
//! File structure:
//!
//! ```yaml
//! default:
//!   my_section:
//!     my_param: value
//!
//! alt_profile:
//!   my_section:
//!     my_param: alt_value  # overrides value from 'default' profile
//! ```

use crate::config::loader::{read_document, resolve_path};
use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Base profile every other profile overrides.
pub const DEFAULT_PROFILE: &str = "default";

/// Parameters of one section, in file order.
pub type Params = serde_yaml::Mapping;

/// Config file names handed to [`ConfigStore::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileList {
    /// Comma-separated names, e.g. `"base.yml,local.yml"`
    Delimited(String),
    /// Names given one by one
    Explicit(Vec<String>),
}

impl FileList {
    /// Normalise to the ordered list of names to load.
    pub fn into_names(self) -> Result<Vec<String>, ConfigError> {
        match self {
            FileList::Delimited(s) => {
                let names: Vec<String> = s
                    .split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(|part| part.to_string())
                    .collect();
                if names.is_empty() {
                    return Err(ConfigError::NoFiles(s));
                }
                Ok(names)
            }
            FileList::Explicit(names) => {
                if let Some(pos) = names.iter().position(|name| name.trim().is_empty()) {
                    return Err(ConfigError::BadArgument(format!(
                        "empty file name at position {pos} in file list"
                    )));
                }
                Ok(names)
            }
        }
    }
}

impl From<&str> for FileList {
    fn from(s: &str) -> Self {
        FileList::Delimited(s.to_string())
    }
}

impl From<String> for FileList {
    fn from(s: String) -> Self {
        FileList::Delimited(s)
    }
}

impl From<Vec<String>> for FileList {
    fn from(names: Vec<String>) -> Self {
        FileList::Explicit(names)
    }
}

impl From<&[&str]> for FileList {
    fn from(names: &[&str]) -> Self {
        FileList::Explicit(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Aggregated config from any number of files, indexed by profile.
///
/// Loading merges at the section level: a parameter from a later file
/// replaces the same parameter from an earlier one, other parameters in the
/// section are kept. Values below the parameter level are never merged.
#[derive(Debug, Default)]
pub struct ConfigStore {
    config_dir: Option<PathBuf>,
    loaded_paths: Vec<PathBuf>,
    profile_data: BTreeMap<String, BTreeMap<String, Params>>,
}

impl ConfigStore {
    /// Build a store and load `files` in order.
    pub fn new(
        files: impl Into<FileList>,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let names = files.into().into_names()?;

        let mut store = ConfigStore { config_dir, ..Default::default() };
        for name in &names {
            store.load(name)?;
        }
        Ok(store)
    }

    /// An empty store; files are added later with [`ConfigStore::load`].
    pub fn with_config_dir(config_dir: Option<PathBuf>) -> Self {
        ConfigStore { config_dir, ..Default::default() }
    }

    /// Load another config file.
    ///
    /// Returns `Ok(false)` without changing anything if the file (by
    /// canonical path) was already loaded. The document is parsed in full
    /// before any merging, so a failed load leaves the store untouched.
    pub fn load(&mut self, file: impl AsRef<Path>) -> Result<bool, ConfigError> {
        let path = resolve_path(file.as_ref(), self.config_dir.as_deref())?;
        if self.loaded_paths.contains(&path) {
            tracing::debug!("Config file already loaded, skipping: {}", path.display());
            return Ok(false);
        }

        let doc = read_document(&path)?;

        for (profile, sections) in doc {
            let profile_entry = self.profile_data.entry(profile).or_default();
            for (section, params) in sections {
                let section_entry = profile_entry.entry(section).or_default();
                for (key, value) in params {
                    section_entry.insert(key, value);
                }
            }
        }

        tracing::debug!("Loaded config file: {}", path.display());
        self.loaded_paths.push(path);
        Ok(true)
    }

    /// Effective parameters for `section`.
    ///
    /// Starts from the `default` profile (an absent section gives an empty
    /// mapping) and overlays `profile` when given. The result is a copy; the
    /// store is never modified.
    pub fn config(&self, section: &str, profile: Option<&str>) -> Result<Params, ConfigError> {
        let default_data =
            self.profile_data.get(DEFAULT_PROFILE).ok_or(ConfigError::DefaultProfileMissing)?;
        let mut params = default_data.get(section).cloned().unwrap_or_default();

        // an empty profile name means no override
        if let Some(profile) = profile.filter(|p| !p.is_empty()) {
            let profile_data = self
                .profile_data
                .get(profile)
                .ok_or_else(|| ConfigError::ProfileNotLoaded(profile.to_string()))?;
            if let Some(overrides) = profile_data.get(section) {
                tracing::debug!(
                    "Applying {} override(s) from profile '{}' to section '{}'",
                    overrides.len(),
                    profile,
                    section
                );
                for (key, value) in overrides {
                    params.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(params)
    }

    /// Canonical paths of loaded files, in load order.
    pub fn loaded_paths(&self) -> &[PathBuf] {
        &self.loaded_paths
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Names of all loaded profiles, sorted.
    pub fn profiles(&self) -> impl Iterator<Item = &str> {
        self.profile_data.keys().map(String::as_str)
    }

    pub fn has_profile(&self, profile: &str) -> bool {
        self.profile_data.contains_key(profile)
    }

    /// Section names under `profile`, sorted; `None` if it was never loaded.
    pub fn sections(&self, profile: &str) -> Option<Vec<&str>> {
        self.profile_data.get(profile).map(|sections| sections.keys().map(String::as_str).collect())
    }
}
