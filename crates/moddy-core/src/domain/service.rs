//! Platform service skeletons.
//!
//! A "service" is a Java interface in `common` with one implementation per
//! loader, discovered at runtime through `META-INF/services` descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    loader::{COMMON_MODULE, Loader},
};

const JAVA_ROOT: &str = "src/main/java";
const SERVICES_ROOT: &str = "src/main/resources/META-INF/services";

/// A validated Java identifier used as the service interface name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Trim and validate `raw` as a Java identifier
    /// (`^[A-Za-z_][A-Za-z0-9_]*$`).
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if !is_java_identifier(name) {
            return Err(DomainError::InvalidServiceName { name: name.into() });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ASCII-only Java identifier check shared with package validation.
pub(crate) fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// One file the generator wants to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
}

/// Every file needed to add a service across all loaders.
///
/// Pure data; writing happens in the application layer.
#[derive(Debug, Clone)]
pub struct ServicePlan {
    pub(crate) name: ServiceName,
    pub(crate) group: String,
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<PlannedFile>,
}

impl ServicePlan {
    /// Build the plan for service `name` in a project whose Maven group is
    /// `group`. Paths are joined onto `root`.
    pub fn new(root: impl Into<PathBuf>, group: &str, name: ServiceName) -> Self {
        let pkg_path = group.replace('.', "/");
        let fqn = format!("{group}.platform.services.{name}");

        let mut files = Vec::with_capacity(1 + 2 * Loader::ALL.len());

        files.push(PlannedFile {
            path: Path::new(COMMON_MODULE)
                .join(JAVA_ROOT)
                .join(&pkg_path)
                .join("platform/services")
                .join(format!("{name}.java")),
            content: format!("package {group}.platform.services;\n\npublic interface {name} {{\n}}\n"),
        });

        for loader in Loader::ALL {
            let prefix = loader.class_prefix();
            files.push(PlannedFile {
                path: Path::new(loader.module())
                    .join(JAVA_ROOT)
                    .join(&pkg_path)
                    .join("platform")
                    .join(format!("{prefix}{name}.java")),
                content: format!(
                    "package {group}.platform;\n\nimport {fqn};\n\npublic class {prefix}{name} implements {name} {{\n}}\n"
                ),
            });
        }

        for loader in Loader::ALL {
            files.push(PlannedFile {
                path: Path::new(loader.module()).join(SERVICES_ROOT).join(&fqn),
                content: format!("{group}.platform.{}{name}\n", loader.class_prefix()),
            });
        }

        Self {
            name,
            group: group.to_string(),
            root: root.into(),
            files,
        }
    }

    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Planned files with project-relative paths.
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Absolute (root-joined) path of a planned file.
    pub fn resolve(&self, file: &PlannedFile) -> PathBuf {
        self.root.join(&file.path)
    }

    /// Fully qualified interface name.
    pub fn fqn(&self) -> String {
        format!("{}.platform.services.{}", self.group, self.name)
    }
}
