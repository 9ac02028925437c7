//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `moddy-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::IconBitmap;
use crate::error::ModdyResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `moddy_adapters::filesystem::LocalFilesystem` (production)
/// - `moddy_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `Send + Sync` so services can share it with scoped worker threads.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a UTF-8 file. Invalid UTF-8 is an error.
    fn read_to_string(&self, path: &Path) -> ModdyResult<String>;

    fn read_bytes(&self, path: &Path) -> ModdyResult<Vec<u8>>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ModdyResult<()>;

    fn write_bytes(&self, path: &Path, content: &[u8]) -> ModdyResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModdyResult<()>;

    /// Move a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> ModdyResult<()>;

    /// Put `content` at `path` through a staged sibling file.
    ///
    /// `path` itself is never opened for writing, so a running executable
    /// can be replaced.
    fn replace_file(&self, path: &Path, content: &[u8], executable: bool) -> ModdyResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Every regular file below `root`, sorted, as `root`-joined paths.
    fn walk_files(&self, root: &Path) -> ModdyResult<Vec<PathBuf>>;
}

/// Port for blocking HTTP GET requests.
///
/// Non-success statuses are errors.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` as text with extra request headers.
    fn get_text(
        &self,
        url: &str,
        headers: &[(&'static str, &'static str)],
    ) -> ModdyResult<String>;

    /// Fetch `url` as raw bytes.
    fn get_bytes(&self, url: &str) -> ModdyResult<Vec<u8>>;
}

/// Port for turning a rendered icon into PNG bytes.
#[cfg_attr(test, mockall::automock)]
pub trait IconEncoder: Send + Sync {
    fn encode_png(&self, icon: &IconBitmap) -> ModdyResult<Vec<u8>>;
}

/// Port for showing a directory to the user.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryOpener: Send + Sync {
    fn open(&self, path: &Path) -> ModdyResult<()>;
}
