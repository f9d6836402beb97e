//! Persistence for the single piece of state that survives restarts: the
//! root location the user last picked. The format is deliberately dumb, one
//! absolute path on one line, so there is nothing to migrate or version.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;
use thiserror::Error;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".songlist";
/// File name of the saved-location record inside the data directory.
const LOCATION_FILE_NAME: &str = "location.dat";

/// Failure to persist the chosen location. Recoverable by design: callers
/// warn the user and keep operating with the in-memory location.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write saved location: {0}")]
    Write(#[from] io::Error),
}

/// Reads and writes the saved root location. The data directory is injected
/// rather than resolved internally so tests can point the store at a
/// temporary directory.
pub struct LocationStore {
    location_file: PathBuf,
}

impl LocationStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            location_file: data_dir.into().join(LOCATION_FILE_NAME),
        }
    }

    /// Resolve the production data directory inside the user's home.
    pub fn default_data_dir() -> Result<PathBuf> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
    }

    /// Read the saved location, if any. A missing, unreadable, or blank file
    /// all mean the same thing to callers: nothing was saved.
    pub fn load(&self) -> Option<PathBuf> {
        let contents = fs::read_to_string(&self.location_file).ok()?;
        let line = contents.lines().next()?.trim();
        if line.is_empty() {
            return None;
        }
        Some(PathBuf::from(line))
    }

    /// Overwrite the saved location with the absolute form of `root`.
    pub fn save(&self, root: &Path) -> Result<(), StoreError> {
        let absolute = std::path::absolute(root)?;
        if let Some(parent) = self.location_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.location_file, absolute.to_string_lossy().as_bytes())?;
        Ok(())
    }
}
