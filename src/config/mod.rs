//! Layered configuration
//!
//! Config files are YAML documents keyed by profile, then section, then
//! parameter. Any number of files can be loaded; the `default` profile is
//! the base layer and every other profile overrides it section by section.

pub mod loader;
pub mod store;

pub use loader::{read_document, resolve_path};
pub use store::{ConfigStore, FileList, Params, DEFAULT_PROFILE};
