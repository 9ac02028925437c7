//! Line-preserving editor for `gradle.properties`.

use regex::{NoExpand, Regex};

use crate::domain::error::DomainError;

/// File name of the Gradle properties file at the project root.
pub const GRADLE_PROPERTIES: &str = "gradle.properties";

/// The text of a `gradle.properties` file.
///
/// Only lines of the exact form `key=value` are understood. Everything else,
/// comments and blank lines included, passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleProperties {
    text: String,
}

impl GradleProperties {
    pub fn parse(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Value of the first `key=` line, trimmed.
    pub fn get(&self, key: &str) -> Option<String> {
        line_pattern(key, "(.*)")
            .captures(&self.text)
            .map(|c| c[1].trim().to_string())
    }

    /// The Maven `group`, which doubles as the base Java package.
    pub fn group(&self) -> Result<String, DomainError> {
        self.get("group")
            .filter(|g| !g.is_empty())
            .ok_or_else(|| DomainError::MissingProperty {
                key: "group".into(),
            })
    }

    pub fn version(&self) -> Option<String> {
        self.get("version").filter(|v| !v.is_empty())
    }

    /// Replace every `key=` line with `key=value`.
    ///
    /// Missing keys are not added. Returns `true` when at least one line
    /// matched.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let re = line_pattern(key, ".*");
        if !re.is_match(&self.text) {
            return false;
        }
        let replacement = format!("{key}={value}");
        self.text = re
            .replace_all(&self.text, NoExpand(&replacement))
            .into_owned();
        true
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn line_pattern(key: &str, value: &str) -> Regex {
    Regex::new(&format!(r"(?mR)^{}={value}$", regex::escape(key)))
        .expect("escaped key is always a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Project
group=com.example.modtemplate
version=1.0.0
minecraft_version=1.21.4
minecraft_version_range=[1.21.4, 1.22)
";

    #[test]
    fn reads_group_and_version() {
        let props = GradleProperties::parse(SAMPLE);
        assert_eq!(props.group().unwrap(), "com.example.modtemplate");
        assert_eq!(props.version().as_deref(), Some("1.0.0"));
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn missing_group_is_an_error() {
        let props = GradleProperties::parse("version=1\n");
        assert_eq!(
            props.group().unwrap_err(),
            DomainError::MissingProperty {
                key: "group".into()
            }
        );
    }

    #[test]
    fn values_are_trimmed() {
        let props = GradleProperties::parse("group= a.b.c  \r\n");
        assert_eq!(props.group().unwrap(), "a.b.c");
    }

    #[test]
    fn set_only_touches_exact_key() {
        let mut props = GradleProperties::parse(SAMPLE);
        assert!(props.set("minecraft_version", "1.21.5"));
        assert!(props.as_str().contains("minecraft_version=1.21.5\n"));
        assert!(props.as_str().contains("minecraft_version_range=[1.21.4, 1.22)\n"));
        assert!(props.as_str().starts_with("# Project\n"));
    }

    #[test]
    fn set_does_not_insert_missing_keys() {
        let mut props = GradleProperties::parse(SAMPLE);
        assert!(!props.set("forge_version", "55.0.1"));
        assert_eq!(props.as_str(), SAMPLE);
    }

    #[test]
    fn set_keeps_crlf_line_endings() {
        let mut props = GradleProperties::parse("version=1\r\ngroup=a\r\n");
        props.set("version", "2");
        assert_eq!(props.as_str(), "version=2\r\ngroup=a\r\n");
    }

    #[test]
    fn set_inserts_value_literally() {
        let mut props = GradleProperties::parse("version=1\n");
        props.set("version", "$1-${x}");
        assert_eq!(props.as_str(), "version=$1-${x}\n");
    }
}
