//! Core domain layer for Moddy.
//!
//! Pure rules about a multiloader mod project: which files a service needs,
//! how `gradle.properties` is edited, which dependency versions fit a
//! Minecraft release, and what `setup` rewrites. No I/O happens here; the
//! application layer reaches the outside world through ports.

pub mod error;
pub mod icon;
pub mod loader;
pub mod placeholders;
pub mod properties;
pub mod release;
pub mod service;
pub mod versions;

pub use error::DomainError;
pub use icon::{ICON_PATH, ICON_SIZE, IconBitmap};
pub use loader::{ALL_MODULES, COMMON_MODULE, Loader};
pub use placeholders::{
    DEFAULT_VERSION, OLD_AUTHOR, OLD_MOD_ID, OLD_MOD_NAME, OLD_PACKAGE, Replacements,
    SetupAnswers, default_version, to_camel, update_changelog,
};
pub use properties::{GRADLE_PROPERTIES, GradleProperties};
pub use release::{UNKNOWN_VERSION, marker_version};
pub use service::{PlannedFile, ServiceName, ServicePlan};
pub use versions::{
    DependencyVersions, FabricLoaderEntry, MANUAL_LOOKUP_URLS, MavenMetadata, ModrinthVersion,
    neoforge_prefix, select_fabric_loader, select_forge, select_latest_published,
    select_neoforge, select_prefixed, validate_minecraft_version, version_range,
};
