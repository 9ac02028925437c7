use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so reports can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Illegal characters in service name '{name}'")]
    InvalidServiceName { name: String },

    #[error("Invalid Java package '{package}'")]
    InvalidPackage { package: String },

    #[error("Invalid mod id '{mod_id}'")]
    InvalidModId { mod_id: String },

    #[error("Invalid Minecraft version '{version}'")]
    InvalidMinecraftVersion { version: String },

    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    // ========================================================================
    // Project file problems
    // ========================================================================
    #[error("Could not determine {key} property in gradle.properties")]
    MissingProperty { key: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { .. } => vec![
                "Service names must be valid Java identifiers".into(),
                "Start with a letter or underscore, then letters, digits or underscores".into(),
                "Example: moddy add-service IExampleService".into(),
            ],
            Self::InvalidPackage { package } => vec![
                format!("'{package}' is not a dotted Java package name"),
                "Example: com.yourname.coolmod".into(),
            ],
            Self::InvalidModId { .. } => vec![
                "Mod ids are 2-64 characters: lowercase letters, digits and underscores".into(),
                "They must start with a letter, e.g. coolmod or cool_mod".into(),
            ],
            Self::InvalidMinecraftVersion { .. } => vec![
                "Pass a Minecraft version such as 1.21.5".into(),
            ],
            Self::EmptyValue { field } => vec![format!("Provide a non-empty {field}")],
            Self::MissingProperty { key } => vec![
                format!("Add a '{key}=...' line to gradle.properties"),
                "Run Moddy from the root of the template project (or pass -C <dir>)".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProperty { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}
