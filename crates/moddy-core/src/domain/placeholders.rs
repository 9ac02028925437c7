//! Placeholder identifiers shipped in the template and how `setup`
//! replaces them.

use std::path::PathBuf;

use crate::domain::{error::DomainError, properties::GradleProperties, service::is_java_identifier};

pub const OLD_PACKAGE: &str = "com.example.modtemplate";
pub const OLD_MOD_ID: &str = "examplemod";
pub const OLD_MOD_NAME: &str = "Example Mod";
pub const OLD_AUTHOR: &str = "yourname";
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Class-name stem used by the template's entrypoints.
const OLD_CLASS_STEM: &str = "Template";

/// Changelog heading the template ships with.
const TEMPLATE_CHANGELOG_HEADING: &str = "## 1.0.0";
/// Changelog section new entries are inserted above.
const CHANGELOG_ANCHOR: &str = "## Types of changes";

/// Version offered by default: the template's current `version=`.
pub fn default_version(props: Option<&GradleProperties>) -> String {
    props
        .and_then(GradleProperties::version)
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Values collected from the user for `setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub base_package: String,
    pub mod_id: String,
    pub mod_name: String,
    pub author: String,
    pub version: String,
}

impl SetupAnswers {
    /// Answers that keep every placeholder as-is.
    pub fn defaults(version: impl Into<String>) -> Self {
        Self {
            base_package: OLD_PACKAGE.into(),
            mod_id: OLD_MOD_ID.into(),
            mod_name: OLD_MOD_NAME.into(),
            author: OLD_AUTHOR.into(),
            version: version.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.base_package.split('.').all(is_java_identifier) {
            return Err(DomainError::InvalidPackage {
                package: self.base_package.clone(),
            });
        }
        if !is_mod_id(&self.mod_id) {
            return Err(DomainError::InvalidModId {
                mod_id: self.mod_id.clone(),
            });
        }
        if self.mod_name.trim().is_empty() {
            return Err(DomainError::EmptyValue { field: "mod name" });
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::EmptyValue { field: "author" });
        }
        if self.version.trim().is_empty() {
            return Err(DomainError::EmptyValue { field: "version" });
        }
        Ok(())
    }

    /// Prefix replacing `Template` in class names, e.g. `CoolMod` for
    /// "cool mod".
    pub fn class_prefix(&self) -> String {
        to_camel(&self.mod_name)
    }

    /// Character drawn on the generated icon.
    pub fn icon_letter(&self) -> Option<char> {
        self.mod_name.trim().chars().next()
    }

    /// Content substitutions, applied in order.
    pub fn replacements(&self) -> Replacements {
        let prefix = self.class_prefix();
        Replacements(vec![
            (OLD_PACKAGE.into(), self.base_package.clone()),
            (OLD_MOD_ID.into(), self.mod_id.clone()),
            (OLD_MOD_NAME.into(), self.mod_name.clone()),
            (OLD_AUTHOR.into(), self.author.clone()),
            ("TemplateMod".into(), format!("{prefix}Mod")),
            ("TemplateFabric".into(), format!("{prefix}Fabric")),
            ("TemplateForge".into(), format!("{prefix}Forge")),
            ("TemplateNeoForge".into(), format!("{prefix}NeoForge")),
        ])
    }

    /// New file name if `name` carries a placeholder.
    pub fn rename_file_name(&self, name: &str) -> Option<String> {
        let renamed = name
            .replace(OLD_MOD_ID, &self.mod_id)
            .replace(OLD_PACKAGE, &self.base_package)
            .replace(OLD_CLASS_STEM, &self.class_prefix());
        (renamed != name).then_some(renamed)
    }

    /// Package directory relative to `src/main/java`, before and after.
    pub fn package_dirs(&self) -> (PathBuf, PathBuf) {
        (package_dir(OLD_PACKAGE), package_dir(&self.base_package))
    }
}

fn package_dir(package: &str) -> PathBuf {
    package.split('.').collect()
}

fn is_mod_id(id: &str) -> bool {
    let mut chars = id.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && (2..=64).contains(&id.len())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Ordered plain-text substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements(Vec<(String, String)>);

impl Replacements {
    /// Apply every substitution; `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        let mut out = text.to_string();
        let mut changed = false;
        for (old, new) in &self.0 {
            if out.contains(old.as_str()) {
                out = out.replace(old.as_str(), new);
                changed = true;
            }
        }
        changed.then_some(out)
    }
}

/// CamelCase a mod name without lowering existing capitals.
///
/// `"my cool-mod_name"` becomes `"MyCoolModName"`; `"JEI addon"` becomes
/// `"JEIAddon"`.
pub fn to_camel(value: &str) -> String {
    value
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Replace the template's `## 1.0.0` section with an entry for `version`.
///
/// The entry goes right above `## Types of changes`, or at the end when that
/// heading is missing. Output always ends with a single newline.
pub fn update_changelog(text: &str, version: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();

    if let Some(start) = lines.iter().position(|l| *l == TEMPLATE_CHANGELOG_HEADING) {
        let end = lines[start + 1..]
            .iter()
            .position(|l| l.starts_with("## "))
            .map_or(lines.len(), |offset| start + 1 + offset);
        lines.drain(start..end);
    }

    let heading = format!("## {version}");
    let entry = [heading.as_str(), "", "Initial Implementation", ""];
    let at = lines
        .iter()
        .position(|l| *l == CHANGELOG_ANCHOR)
        .unwrap_or(lines.len());
    lines.splice(at..at, entry);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
