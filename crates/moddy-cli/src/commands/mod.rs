//! One module per subcommand.
//!
//! Handlers translate arguments into core service calls and render the
//! results. No business logic lives here.

pub mod add_service;
pub mod completions;
pub mod config;
pub mod open_libs;
pub mod set_minecraft_version;
pub mod setup;
pub mod update;
pub mod version;
