//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use pltform::{ConfigStore, FileList};
use std::path::PathBuf;

/// Where to load config files from.
#[derive(Args)]
pub struct SourceArgs {
    /// Config files to load, comma-separated (later files win)
    #[arg(long, value_name = "FILES", env = "PLTFORM_CONFIG_FILES", conflicts_with = "file")]
    pub files: Option<String>,

    /// Config file to load (repeatable, later files win)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Vec<String>,

    /// Directory relative file names are resolved against
    #[arg(short = 'd', long, value_name = "DIR", env = "PLTFORM_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

impl SourceArgs {
    fn file_list(&self) -> Result<FileList> {
        match &self.files {
            Some(files) => Ok(FileList::Delimited(files.clone())),
            None if !self.file.is_empty() => Ok(FileList::Explicit(self.file.clone())),
            None => anyhow::bail!("No config files given (use --files, --file or PLTFORM_CONFIG_FILES)"),
        }
    }

    pub fn load_store(&self) -> Result<ConfigStore> {
        let files = self.file_list()?;
        let store = ConfigStore::new(files, self.config_dir.clone())
            .context("Failed loading config files")?;
        tracing::debug!("Loaded {} config file(s)", store.loaded_paths().len());
        Ok(store)
    }
}
