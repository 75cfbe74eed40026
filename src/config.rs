//! Filesystem layout for the note store
//!
//! Everything lives under one data directory: the SQLite file, the managed
//! photo directory, and the blob directory holding the pin set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

// Environment variable names
pub const ENV_HOME: &str = "GEONOTES_HOME";
pub const ENV_LOG: &str = "GEONOTES_LOG";

const APP_DIR: &str = "geonotes";
const DATABASE_FILE: &str = "geonotes.db";
const PHOTOS_DIR: &str = "photos";
const STATE_DIR: &str = "state";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub database_path: PathBuf,
    pub photos_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory from `GEONOTES_HOME`, falling back to the
    /// platform data directory.
    pub fn load() -> Result<Self> {
        if let Some(home) = env::var_os(ENV_HOME).filter(|v| !v.is_empty()) {
            return Ok(Self::at(PathBuf::from(home)));
        }

        let base = dirs::data_dir().ok_or_else(|| {
            Error::io(
                PathBuf::new(),
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not find a data directory",
                ),
            )
        })?;
        Ok(Self::at(base.join(APP_DIR)))
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            database_path: data_dir.join(DATABASE_FILE),
            photos_dir: data_dir.join(PHOTOS_DIR),
            state_dir: data_dir.join(STATE_DIR),
            data_dir,
        }
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.data_dir, &self.photos_dir, &self.state_dir] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}
