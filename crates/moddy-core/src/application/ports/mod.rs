//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `moddy-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations on the mod project
//!   - `HttpClient`: Version metadata and release downloads
//!   - `IconEncoder`: PNG encoding for the generated icon
//!   - `DirectoryOpener`: The platform file browser
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DirectoryOpener, Filesystem, HttpClient, IconEncoder};

#[cfg(test)]
pub use output::{MockDirectoryOpener, MockFilesystem, MockHttpClient, MockIconEncoder};
