//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! commands `moddy` offers: add a service, open build output, bump the
//! Minecraft version, initialise the template, and update itself.

pub mod libs_locator;
pub mod self_updater;
pub mod service_generator;
pub mod template_initializer;
pub mod version_resolver;

pub use libs_locator::LibsLocator;
pub use self_updater::{InstallOutcome, SelfUpdater, UpdateCheck};
pub use service_generator::ServiceGenerator;
pub use template_initializer::{SetupEvent, SetupReport, TemplateInitializer};
pub use version_resolver::VersionResolver;
