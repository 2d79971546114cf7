//! Config file loading

use crate::config::Params;
use crate::error::ConfigError;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Sections of a single profile as parsed from one file.
pub type ProfileDoc = BTreeMap<String, Params>;

/// A parsed config file: profile name -> section name -> parameters.
///
/// Scalar profile and section keys (`2023:`, `true:`) are stored in their
/// string form. Null profiles and sections (e.g. `alt:` with nothing under
/// it) come out empty.
pub type Document = BTreeMap<String, ProfileDoc>;

/// Resolve a config file name to an absolute, canonical path.
///
/// Relative names are joined onto `config_dir` when one is given, otherwise
/// they resolve against the current working directory. The file must exist.
pub fn resolve_path(file: &Path, config_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let joined = match config_dir {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    };

    fs::canonicalize(&joined).map_err(|source| ConfigError::Read { path: joined, source })
}

/// Read and fully validate a config file without touching any store state.
pub fn read_document(path: &Path) -> Result<Document, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    parse_document(&content, path)
}

fn parse_document(content: &str, path: &Path) -> Result<Document, ConfigError> {
    if content.trim().is_empty() {
        return Err(ConfigError::Empty { path: path.to_path_buf() });
    }

    // Parse to generic value first so an empty document can be told apart
    // from one with the wrong shape
    let raw: Value = serde_yaml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    if is_falsy(&raw) {
        return Err(ConfigError::Empty { path: path.to_path_buf() });
    }

    let shape_err = |reason: String| ConfigError::Shape { path: path.to_path_buf(), reason };

    let Value::Mapping(profiles) = raw else {
        return Err(shape_err("top level must be a mapping of profiles".to_string()));
    };

    let mut doc = Document::new();
    for (profile_key, sections) in profiles {
        let profile = key_string(&profile_key)
            .ok_or_else(|| shape_err(format!("unsupported profile key {profile_key:?}")))?;
        let profile_entry: &mut ProfileDoc = doc.entry(profile.clone()).or_default();

        let sections = match sections {
            Value::Null => continue,
            Value::Mapping(sections) => sections,
            _ => return Err(shape_err(format!("profile '{profile}' must be a mapping of sections"))),
        };

        for (section_key, params) in sections {
            let section = key_string(&section_key).ok_or_else(|| {
                shape_err(format!("unsupported section key {section_key:?} in profile '{profile}'"))
            })?;
            let params = match params {
                Value::Null => Params::new(),
                Value::Mapping(params) => params,
                _ => {
                    return Err(shape_err(format!(
                        "section '{section}' in profile '{profile}' must be a mapping"
                    )))
                }
            };
            profile_entry.insert(section, params);
        }
    }

    Ok(doc)
}

/// String form of a scalar profile/section key; `None` for anything else.
fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}
