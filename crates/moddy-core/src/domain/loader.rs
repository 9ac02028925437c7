//! Loader variants of the multiloader template.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sub-project holding code shared by every loader.
pub const COMMON_MODULE: &str = "common";

/// Every Gradle sub-project that carries Java sources.
pub const ALL_MODULES: [&str; 4] = [COMMON_MODULE, "fabric", "forge", "neoforge"];

/// A mod loader the template builds for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loader {
    Fabric,
    Forge,
    NeoForge,
}

impl Loader {
    pub const ALL: [Loader; 3] = [Loader::Fabric, Loader::Forge, Loader::NeoForge];

    /// Gradle sub-project directory.
    pub const fn module(&self) -> &'static str {
        match self {
            Self::Fabric => "fabric",
            Self::Forge => "forge",
            Self::NeoForge => "neoforge",
        }
    }

    /// Prefix used for loader-specific class names.
    pub const fn class_prefix(&self) -> &'static str {
        match self {
            Self::Fabric => "Fabric",
            Self::Forge => "Forge",
            Self::NeoForge => "NeoForge",
        }
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.module())
    }
}
