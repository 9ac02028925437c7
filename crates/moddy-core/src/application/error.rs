//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the command needs does not exist.
    #[error("Required file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// `add-service` would overwrite existing files.
    #[error("Refusing to overwrite {} existing file(s)", paths.len())]
    FilesExist { paths: Vec<PathBuf> },

    /// No build output for a loader.
    #[error("No libs folder found at {}", path.display())]
    LibsNotFound { path: PathBuf },

    /// HTTP request failed or returned a non-success status.
    #[error("Request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    /// Downloaded data could not be understood.
    #[error("Could not parse response from {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// Opening a directory in the system file browser failed.
    #[error("Could not open {}: {reason}", path.display())]
    OpenFailed { path: PathBuf, reason: String },

    /// Encoding the generated icon failed.
    #[error("Icon encoding failed: {reason}")]
    IconEncoding { reason: String },

    /// Replacing the running executable failed.
    #[error("Update failed: {reason}")]
    UpdateFailed { reason: String },

    /// In-memory adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected file: {}", path.display()),
                "Run moddy from the template root, or pass --project-dir".into(),
            ],
            Self::FilesExist { paths } => {
                let mut out: Vec<String> = paths
                    .iter()
                    .map(|p| format!("Already exists: {}", p.display()))
                    .collect();
                out.push("Choose a different service name or remove the files".into());
                out
            }
            Self::LibsNotFound { .. } => vec![
                "Build the project first: ./gradlew build".into(),
            ],
            Self::Http { .. } => vec![
                "Check your internet connection".into(),
                "Raise http.timeout_secs in the config if the server is slow".into(),
            ],
            Self::Parse { .. } => vec![
                "The remote format may have changed; look the value up by hand".into(),
            ],
            Self::OpenFailed { path, .. } => vec![
                format!("Open the folder manually: {}", path.display()),
            ],
            Self::UpdateFailed { .. } => vec![
                "Check write permissions on the moddy executable".into(),
                "Pass --path to update a copy elsewhere".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesExist { .. } => ErrorCategory::Validation,
            Self::FileNotFound { .. } | Self::LibsNotFound { .. } => ErrorCategory::NotFound,
            Self::Http { .. } | Self::Parse { .. } => ErrorCategory::Network,
            Self::FilesystemError { .. }
            | Self::OpenFailed { .. }
            | Self::IconEncoding { .. }
            | Self::UpdateFailed { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
