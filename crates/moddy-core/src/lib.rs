//! Moddy Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Moddy, the
//! helper tool that ships with the multiloader mod template.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            moddy-cli (CLI)              │
//! │   (prompts, output, config, logging)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ServiceGenerator, VersionResolver,    │
//! │   TemplateInitializer, SelfUpdater)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, HttpClient, IconEncoder,   │
//! │  DirectoryOpener)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    moddy-adapters (Infrastructure)      │
//! │ (LocalFilesystem, ReqwestClient, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GradleProperties, ServicePlan, Icon,   │
//! │  version selection, placeholders)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use moddy_core::application::ServiceGenerator;
//! # fn fs() -> Box<dyn moddy_core::application::ports::Filesystem> { unimplemented!() }
//!
//! let generator = ServiceGenerator::new(fs());
//! let plan = generator.plan(Path::new("."), "IExampleService").unwrap();
//! generator.apply(&plan).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        LibsLocator, SelfUpdater, ServiceGenerator, TemplateInitializer, VersionResolver,
        ports::{DirectoryOpener, Filesystem, HttpClient, IconEncoder},
    };
    pub use crate::domain::{
        DependencyVersions, GradleProperties, Loader, ServiceName, ServicePlan, SetupAnswers,
    };
    pub use crate::error::{ModdyError, ModdyResult};
}

/// Version of the running tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version marker embedded in every release so `update` can read it back out
/// of a downloaded payload.
pub const VERSION_MARKER: &str = concat!("MODDY_VERSION = \"", env!("CARGO_PKG_VERSION"), "\"");
