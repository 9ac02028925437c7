//! Unified error handling for Moddy Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Moddy Core operations.
#[derive(Debug, Error, Clone)]
pub enum ModdyError {
    /// Errors from the domain layer (invalid names, malformed project files).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O, network, existing files).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ModdyError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Moddy".into(),
                "Please report this issue at: https://github.com/iamkaf/modresources/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type ModdyResult<T> = Result<T, ModdyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_pass_through() {
        let err: ModdyError = ApplicationError::Http {
            url: "https://example.invalid".into(),
            reason: "timeout".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Network);

        let err: ModdyError = DomainError::InvalidServiceName {
            name: "1abc".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn internal_errors_ask_for_a_report() {
        let err = ModdyError::Internal {
            message: "lookup thread vanished".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }

    #[test]
    fn display_passes_through_inner_message() {
        let err: ModdyError = ApplicationError::LibsNotFound {
            path: PathBuf::from("fabric/build/libs"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "No libs folder found at fabric/build/libs"
        );
    }
}
