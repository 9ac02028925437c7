//! Self Updater - downloads the published release and swaps it in.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    VERSION,
    application::{
        ApplicationError,
        ports::{Filesystem, HttpClient},
    },
    domain::marker_version,
    error::ModdyResult,
};

/// Result of comparing the published release with the running one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    pub current: String,
    pub remote: String,
    pub payload: Vec<u8>,
}

impl UpdateCheck {
    pub fn is_up_to_date(&self) -> bool {
        self.remote == self.current
    }
}

/// Where an install left things.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub target: PathBuf,
    pub backup: PathBuf,
}

pub struct SelfUpdater {
    http: Box<dyn HttpClient>,
    filesystem: Box<dyn Filesystem>,
    current: String,
}

impl SelfUpdater {
    pub fn new(http: Box<dyn HttpClient>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            http,
            filesystem,
            current: VERSION.to_string(),
        }
    }

    /// Compare against `current` instead of the compiled-in version.
    pub fn with_current_version(mut self, current: impl Into<String>) -> Self {
        self.current = current.into();
        self
    }

    /// Download `url` and read its version marker.
    #[instrument(skip(self))]
    pub fn check(&self, url: &str) -> ModdyResult<UpdateCheck> {
        let payload = self.http.get_bytes(url)?;
        let remote = marker_version(&payload);
        info!(current = %self.current, %remote, bytes = payload.len(), "Fetched release");
        Ok(UpdateCheck {
            current: self.current.clone(),
            remote,
            payload,
        })
    }

    /// Move `target` to `<target>.bak`, then put `payload` in its place.
    ///
    /// The backup is moved back if the new release cannot be written.
    #[instrument(skip(self, payload), fields(target = %target.display()))]
    pub fn install(&self, target: &Path, payload: &[u8]) -> ModdyResult<InstallOutcome> {
        if payload.is_empty() {
            return Err(ApplicationError::UpdateFailed {
                reason: "downloaded release is empty".into(),
            }
            .into());
        }
        if !self.filesystem.exists(target) {
            return Err(ApplicationError::FileNotFound {
                path: target.to_path_buf(),
            }
            .into());
        }

        let backup = backup_path(target);
        self.filesystem.rename(target, &backup)?;
        if let Err(e) = self.filesystem.replace_file(target, payload, true) {
            if let Err(restore) = self.filesystem.rename(&backup, target) {
                warn!(error = %restore, backup = %backup.display(), "Could not restore backup");
            }
            return Err(e);
        }

        info!(backup = %backup.display(), "Installed update");
        Ok(InstallOutcome {
            target: target.to_path_buf(),
            backup,
        })
    }
}

/// `<target>.bak`, appended rather than replacing any extension.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}
