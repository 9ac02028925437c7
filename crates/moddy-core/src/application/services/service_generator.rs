//! Service Generator - adds a platform service to every loader.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{GRADLE_PROPERTIES, GradleProperties, ServiceName, ServicePlan},
    error::ModdyResult,
};

/// Generates the interface, per-loader implementations, and service
/// descriptors for a new platform service.
pub struct ServiceGenerator {
    filesystem: Box<dyn Filesystem>,
}

impl ServiceGenerator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Validate `name`, read the project group, and build the plan.
    ///
    /// Nothing is written.
    #[instrument(skip_all, fields(root = %root.display(), name = %name))]
    pub fn plan(&self, root: &Path, name: &str) -> ModdyResult<ServicePlan> {
        let name = ServiceName::parse(name)?;
        let group = read_properties(self.filesystem.as_ref(), root)?.group()?;
        debug!(%group, "Project group resolved");
        Ok(ServicePlan::new(root, &group, name))
    }

    /// Planned files that are already on disk.
    pub fn existing(&self, plan: &ServicePlan) -> Vec<PathBuf> {
        plan.files()
            .iter()
            .map(|f| plan.resolve(f))
            .filter(|p| self.filesystem.exists(p))
            .collect()
    }

    /// Write every planned file.
    ///
    /// Fails without touching anything when any target exists.
    #[instrument(skip_all, fields(service = %plan.name()))]
    pub fn apply(&self, plan: &ServicePlan) -> ModdyResult<Vec<PathBuf>> {
        let existing = self.existing(plan);
        if !existing.is_empty() {
            return Err(ApplicationError::FilesExist { paths: existing }.into());
        }

        let mut written = Vec::with_capacity(plan.files().len());
        for file in plan.files() {
            let path = plan.resolve(file);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), "Wrote service file");
            written.push(path);
        }

        info!(files = written.len(), "Service {} created", plan.fqn());
        Ok(written)
    }
}

/// Load `gradle.properties` under `root`, which every command needs.
pub(crate) fn read_properties(fs: &dyn Filesystem, root: &Path) -> ModdyResult<GradleProperties> {
    let path = root.join(GRADLE_PROPERTIES);
    if !fs.exists(&path) {
        return Err(ApplicationError::FileNotFound { path }.into());
    }
    Ok(GradleProperties::parse(fs.read_to_string(&path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;
    use crate::error::ModdyError;

    fn fs_with_group() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("proj/gradle.properties"))
            .returning(|_| true);
        fs.expect_read_to_string()
            .returning(|_| Ok("group=dev.kaf.coolmod\nversion=1.0.0\n".into()));
        fs
    }

    #[test]
    fn plan_reads_group() {
        let generator = ServiceGenerator::new(Box::new(fs_with_group()));
        let plan = generator.plan(Path::new("proj"), " IFoo ").unwrap();
        assert_eq!(plan.fqn(), "dev.kaf.coolmod.platform.services.IFoo");
        assert!(plan.resolve(&plan.files()[0]).starts_with("proj/common"));
    }

    #[test]
    fn invalid_name_fails_before_reading() {
        let generator = ServiceGenerator::new(Box::new(MockFilesystem::new()));
        let err = generator.plan(Path::new("proj"), "bad name").unwrap_err();
        assert!(matches!(
            err,
            ModdyError::Domain(DomainError::InvalidServiceName { .. })
        ));
    }

    #[test]
    fn missing_properties_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let generator = ServiceGenerator::new(Box::new(fs));
        let err = generator.plan(Path::new("proj"), "IFoo").unwrap_err();
        assert!(matches!(
            err,
            ModdyError::Application(ApplicationError::FileNotFound { .. })
        ));
    }

    #[test]
    fn apply_refuses_when_any_file_exists() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.to_string_lossy().contains("ForgeIFoo.java"));
        fs.expect_write_file().never();
        let generator = ServiceGenerator::new(Box::new(fs));
        let plan = ServicePlan::new("proj", "a.b", ServiceName::parse("IFoo").unwrap());

        let err = generator.apply(&plan).unwrap_err();
        match err {
            ModdyError::Application(ApplicationError::FilesExist { paths }) => {
                assert_eq!(paths.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn apply_writes_all_seven_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(7).returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(|_, _| Ok(()));
        let generator = ServiceGenerator::new(Box::new(fs));
        let plan = ServicePlan::new("proj", "a.b", ServiceName::parse("IFoo").unwrap());

        let written = generator.apply(&plan).unwrap();
        assert_eq!(written.len(), 7);
    }
}
