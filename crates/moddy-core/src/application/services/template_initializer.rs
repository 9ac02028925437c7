//! Template Initializer - turns the freshly cloned template into a named mod.
//!
//! Steps run in a fixed order:
//! 1. Rewrite placeholder text in every file
//! 2. Move the Java package directories
//! 3. Rename files carrying placeholders
//! 4. Set `version=` in `gradle.properties`
//! 5. Update `changelog.md`
//! 6. Generate the icon if the project has none

use std::fmt;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, IconEncoder},
        services::service_generator::read_properties,
    },
    domain::{
        ALL_MODULES, GRADLE_PROPERTIES, ICON_PATH, IconBitmap, SetupAnswers, default_version,
        update_changelog,
    },
    error::ModdyResult,
};

pub const CHANGELOG: &str = "changelog.md";
const JAVA_ROOT: &str = "src/main/java";

/// One observable effect of `setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupEvent {
    Modified(PathBuf),
    Moved { from: PathBuf, to: PathBuf },
    Renamed { from: PathBuf, to: PathBuf },
    VersionSet(String),
    /// `gradle.properties` has no `version=` line.
    VersionLineMissing,
    ChangelogUpdated,
    ChangelogSkipped,
    IconCreated(PathBuf),
    IconSkipped(PathBuf),
}

impl fmt::Display for SetupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modified(p) => write!(f, "Modified {}", p.display()),
            Self::Moved { from, to } => write!(f, "Moved {} -> {}", from.display(), to.display()),
            Self::Renamed { from, to } => {
                write!(f, "Renamed {} -> {}", from.display(), to.display())
            }
            Self::VersionSet(v) => write!(f, "Set version to {v}"),
            Self::VersionLineMissing => write!(f, "No version= line in {GRADLE_PROPERTIES}"),
            Self::ChangelogUpdated => write!(f, "Updated changelog"),
            Self::ChangelogSkipped => write!(f, "No {CHANGELOG} found, skipped"),
            Self::IconCreated(p) => write!(f, "Created {}", p.display()),
            Self::IconSkipped(_) => write!(f, "Skipped icon generation"),
        }
    }
}

/// Everything `setup` did, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub events: Vec<SetupEvent>,
}

impl SetupReport {
    fn push(&mut self, event: SetupEvent) {
        debug!(%event, "Setup step");
        self.events.push(event);
    }

    /// Number of files whose contents changed.
    pub fn modified_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SetupEvent::Modified(_)))
            .count()
    }
}

pub struct TemplateInitializer {
    filesystem: Box<dyn Filesystem>,
    encoder: Box<dyn IconEncoder>,
}

impl TemplateInitializer {
    pub fn new(filesystem: Box<dyn Filesystem>, encoder: Box<dyn IconEncoder>) -> Self {
        Self {
            filesystem,
            encoder,
        }
    }

    /// Answers offered when the user accepts every default.
    pub fn defaults(&self, root: &Path) -> SetupAnswers {
        let props = read_properties(self.filesystem.as_ref(), root).ok();
        SetupAnswers::defaults(default_version(props.as_ref()))
    }

    #[instrument(skip_all, fields(root = %root.display(), mod_id = %answers.mod_id))]
    pub fn initialize(&self, root: &Path, answers: &SetupAnswers) -> ModdyResult<SetupReport> {
        answers.validate()?;
        // Fail before touching anything when this is not a template root.
        read_properties(self.filesystem.as_ref(), root)?;
        let mut report = SetupReport::default();

        self.replace_contents(root, answers, &mut report)?;
        self.move_packages(root, answers, &mut report)?;
        self.rename_files(root, answers, &mut report)?;
        self.set_version(root, &answers.version, &mut report)?;
        self.update_changelog(root, &answers.version, &mut report)?;
        self.create_icon(root, answers, &mut report)?;

        info!(steps = report.events.len(), "Template initialized");
        Ok(report)
    }

    fn project_files(&self, root: &Path) -> ModdyResult<Vec<PathBuf>> {
        Ok(self
            .filesystem
            .walk_files(root)?
            .into_iter()
            .filter(|p| !in_git_dir(root, p))
            .collect())
    }

    fn replace_contents(
        &self,
        root: &Path,
        answers: &SetupAnswers,
        report: &mut SetupReport,
    ) -> ModdyResult<()> {
        let replacements = answers.replacements();
        for path in self.project_files(root)? {
            let Ok(text) = String::from_utf8(self.filesystem.read_bytes(&path)?) else {
                debug!(path = %path.display(), "Skipping non-UTF-8 file");
                continue;
            };
            if let Some(updated) = replacements.apply(&text).filter(|u| *u != text) {
                self.filesystem.write_file(&path, &updated)?;
                report.push(SetupEvent::Modified(path));
            }
        }
        Ok(())
    }

    fn move_packages(
        &self,
        root: &Path,
        answers: &SetupAnswers,
        report: &mut SetupReport,
    ) -> ModdyResult<()> {
        let (old_dir, new_dir) = answers.package_dirs();
        if old_dir == new_dir {
            return Ok(());
        }
        for module in ALL_MODULES {
            let src = root.join(module).join(JAVA_ROOT);
            let from = src.join(&old_dir);
            if !self.filesystem.is_dir(&from) {
                continue;
            }
            let to = src.join(&new_dir);
            if let Some(parent) = to.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.rename(&from, &to)?;
            report.push(SetupEvent::Moved { from, to });
        }
        Ok(())
    }

    fn rename_files(
        &self,
        root: &Path,
        answers: &SetupAnswers,
        report: &mut SetupReport,
    ) -> ModdyResult<()> {
        for from in self.project_files(root)? {
            let Some(name) = from.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(new_name) = answers.rename_file_name(name) {
                let to = from.with_file_name(new_name);
                self.filesystem.rename(&from, &to)?;
                report.push(SetupEvent::Renamed { from, to });
            }
        }
        Ok(())
    }

    fn set_version(&self, root: &Path, version: &str, report: &mut SetupReport) -> ModdyResult<()> {
        let mut props = read_properties(self.filesystem.as_ref(), root)?;
        if props.set("version", version) {
            self.filesystem
                .write_file(&root.join(GRADLE_PROPERTIES), props.as_str())?;
            report.push(SetupEvent::VersionSet(version.to_string()));
        } else {
            warn!("{GRADLE_PROPERTIES} has no version line");
            report.push(SetupEvent::VersionLineMissing);
        }
        Ok(())
    }

    fn update_changelog(
        &self,
        root: &Path,
        version: &str,
        report: &mut SetupReport,
    ) -> ModdyResult<()> {
        let path = root.join(CHANGELOG);
        if !self.filesystem.exists(&path) {
            report.push(SetupEvent::ChangelogSkipped);
            return Ok(());
        }
        let text = self.filesystem.read_to_string(&path)?;
        self.filesystem
            .write_file(&path, &update_changelog(&text, version))?;
        report.push(SetupEvent::ChangelogUpdated);
        Ok(())
    }

    fn create_icon(
        &self,
        root: &Path,
        answers: &SetupAnswers,
        report: &mut SetupReport,
    ) -> ModdyResult<()> {
        let path = root.join(ICON_PATH);
        if self.filesystem.exists(&path) {
            report.push(SetupEvent::IconSkipped(path));
            return Ok(());
        }
        let png = self
            .encoder
            .encode_png(&IconBitmap::render(answers.icon_letter()))?;
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_bytes(&path, &png)?;
        report.push(SetupEvent::IconCreated(path));
        Ok(())
    }
}

/// True when `path` sits inside a `.git` directory below `root`.
fn in_git_dir(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| c == Component::Normal(".git".as_ref()))
}
