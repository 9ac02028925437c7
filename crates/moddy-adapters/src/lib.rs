//! Infrastructure adapters for Moddy.
//!
//! This crate implements the ports defined in `moddy-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod http;
pub mod icon;
pub mod opener;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use http::{MemoryHttpClient, ReqwestClient};
pub use icon::PngEncoder;
pub use opener::{RecordingOpener, SystemOpener};
