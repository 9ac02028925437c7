//! Directory openers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use moddy_core::{
    application::{ApplicationError, ports::DirectoryOpener},
    error::ModdyResult,
};
use tracing::debug;

/// Opens directories with the platform file browser
/// (`explorer`, `open`, or `xdg-open`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl DirectoryOpener for SystemOpener {
    fn open(&self, path: &Path) -> ModdyResult<()> {
        debug!(path = %path.display(), "Opening in file browser");
        open::that(path).map_err(|e| {
            ApplicationError::OpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// Remembers opened paths instead of launching anything.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

impl DirectoryOpener for RecordingOpener {
    fn open(&self, path: &Path) -> ModdyResult<()> {
        self.opened
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?
            .push(path.to_path_buf());
        Ok(())
    }
}
