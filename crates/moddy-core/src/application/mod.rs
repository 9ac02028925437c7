//! Application layer for Moddy.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ServiceGenerator, VersionResolver, ...)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    InstallOutcome, LibsLocator, SelfUpdater, ServiceGenerator, SetupEvent, SetupReport,
    TemplateInitializer, UpdateCheck, VersionResolver,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DirectoryOpener, Filesystem, HttpClient, IconEncoder};

pub use error::ApplicationError;
