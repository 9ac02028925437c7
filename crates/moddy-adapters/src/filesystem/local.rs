//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use moddy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModdyError, ModdyResult},
};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> ModdyResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn read_bytes(&self, path: &Path) -> ModdyResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ModdyResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> ModdyResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> ModdyResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn rename(&self, from: &Path, to: &Path) -> ModdyResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "move"))
    }

    fn replace_file(&self, path: &Path, content: &[u8], executable: bool) -> ModdyResult<()> {
        // Staged next to the target so the final rename stays on one filesystem.
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged =
            NamedTempFile::new_in(dir).map_err(|e| map_io_error(dir, e, "stage file"))?;
        staged
            .write_all(content)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| map_io_error(path, e, "write file"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = if executable { 0o755 } else { 0o644 };
            staged
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(mode))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        let _ = executable;

        staged
            .persist(path)
            .map(|_| ())
            .map_err(|e| map_io_error(path, e.error, "replace file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, root: &Path) -> ModdyResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                ModdyError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModdyError {
    if e.kind() == io::ErrorKind::NotFound {
        return ApplicationError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into();
    }
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryHttpClient;
    use moddy_core::{application::SelfUpdater, domain::marker_version};
    use tempfile::TempDir;

    #[test]
    fn walk_lists_nested_files_sorted() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("b/c")).unwrap();
        fs.write_file(&dir.path().join("b/c/x.txt"), "x").unwrap();
        fs.write_file(&dir.path().join("a.txt"), "a").unwrap();

        let files = fs.walk_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b/c/x.txt")]
        );
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            ModdyError::Application(ApplicationError::FileNotFound { .. })
        ));
    }

    #[test]
    fn rename_moves_directories() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("old/pkg")).unwrap();
        fs.write_file(&dir.path().join("old/pkg/A.java"), "class A {}")
            .unwrap();
        fs.rename(&dir.path().join("old"), &dir.path().join("new"))
            .unwrap();
        assert!(fs.exists(&dir.path().join("new/pkg/A.java")));
        assert!(!fs.exists(&dir.path().join("old")));
    }

    #[cfg(unix)]
    #[test]
    fn replace_file_swaps_content_and_marks_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let bin = dir.path().join("moddy");
        fs.write_bytes(&bin, b"old").unwrap();

        fs.replace_file(&bin, b"new", true).unwrap();

        let mode = std::fs::metadata(&bin).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
        assert_eq!(fs.read_bytes(&bin).unwrap(), b"new");
        // Only the target is left behind, no staging files.
        assert_eq!(fs.walk_files(dir.path()).unwrap(), vec![bin]);
    }

    #[test]
    fn self_updater_installs_over_a_real_file() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let bin = dir.path().join("moddy");
        fs.write_bytes(&bin, b"old build").unwrap();

        let updater = SelfUpdater::new(Box::new(MemoryHttpClient::new()), Box::new(fs));
        let outcome = updater
            .install(&bin, b"MODDY_VERSION = \"9.9.9\"")
            .unwrap();

        assert_eq!(outcome.backup, dir.path().join("moddy.bak"));
        assert_eq!(fs.read_bytes(&outcome.backup).unwrap(), b"old build");
        assert_eq!(
            marker_version(&fs.read_bytes(&bin).unwrap()),
            "9.9.9"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn self_updater_replaces_a_running_executable() {
        use std::process::Command;

        let Some(sleep) = ["/bin/sleep", "/usr/bin/sleep"]
            .into_iter()
            .map(Path::new)
            .find(|p| p.is_file())
        else {
            return;
        };

        let dir = TempDir::new().unwrap();
        let bin = dir.path().join("moddy");
        std::fs::copy(sleep, &bin).unwrap();
        let original = std::fs::read(&bin).unwrap();

        // A freshly written file can still be busy for a moment while another
        // test thread forks.
        let mut child = None;
        for _ in 0..20 {
            match Command::new(&bin).arg("30").spawn() {
                Ok(c) => {
                    child = Some(c);
                    break;
                }
                Err(e) if e.raw_os_error() == Some(26) => {
                    std::thread::sleep(std::time::Duration::from_millis(50));
                }
                Err(e) => panic!("spawn failed: {e}"),
            }
        }
        let mut child = child.expect("running copy");

        let fs = LocalFilesystem::new();
        let updater = SelfUpdater::new(Box::new(MemoryHttpClient::new()), Box::new(fs));
        let result = updater.install(&bin, b"MODDY_VERSION = \"9.9.9\"");

        let _ = child.kill();
        let _ = child.wait();

        let outcome = result.unwrap();
        assert_eq!(fs.read_bytes(&bin).unwrap(), b"MODDY_VERSION = \"9.9.9\"");
        assert_eq!(fs.read_bytes(&outcome.backup).unwrap(), original);
    }
}
