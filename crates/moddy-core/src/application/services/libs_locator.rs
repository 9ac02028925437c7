//! Libs Locator - finds a loader's build output and opens it.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DirectoryOpener, Filesystem},
    },
    domain::Loader,
    error::ModdyResult,
};

pub struct LibsLocator {
    filesystem: Box<dyn Filesystem>,
    opener: Box<dyn DirectoryOpener>,
}

impl LibsLocator {
    pub fn new(filesystem: Box<dyn Filesystem>, opener: Box<dyn DirectoryOpener>) -> Self {
        Self { filesystem, opener }
    }

    /// `<root>/<loader>/build/libs`, which must be a directory.
    pub fn locate(&self, root: &Path, loader: Loader) -> ModdyResult<PathBuf> {
        let path = root.join(loader.module()).join("build").join("libs");
        if !self.filesystem.is_dir(&path) {
            return Err(ApplicationError::LibsNotFound { path }.into());
        }
        Ok(path)
    }

    /// Locate the libs folder and show it in the file browser.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn open(&self, root: &Path, loader: Loader) -> ModdyResult<PathBuf> {
        let path = self.locate(root, loader)?;
        self.opener.open(&path)?;
        info!(path = %path.display(), "Opened libs folder");
        Ok(path)
    }
}
