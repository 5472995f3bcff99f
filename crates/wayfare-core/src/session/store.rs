//! JSON snapshot of the current configuration.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    error::{BookingError, FsResultExt, Result},
    models::Configuration,
};

const SESSION_FILE_NAME: &str = "session.json";

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by `path`; parent directories are created on save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at `path`, or at the XDG default when `None`.
    ///
    /// The default is `$XDG_DATA_HOME/wayfare/session.json` or
    /// `~/.local/share/wayfare/session.json`.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfare")
            .place_data_file(SESSION_FILE_NAME)
            .map_err(|e| BookingError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored configuration; `None` when no session is in progress.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files and on configurations that break
    /// an invariant.
    pub fn load(&self) -> Result<Option<Configuration>> {
        if !self.path.exists() {
            debug!("No session file at {}", self.path.display());
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path).fs_context(&self.path)?;
        let config: Configuration = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Write the configuration, replacing any previous snapshot.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, json).fs_context(&self.path)?;
        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// End the session by removing the snapshot. Missing files are fine.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).fs_context(&self.path),
        }
    }
}
