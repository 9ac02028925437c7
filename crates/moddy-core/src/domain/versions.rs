//! Dependency version selection for a target Minecraft version.
//!
//! Every function here works on already-downloaded metadata. Fetching lives in
//! [`crate::application::VersionResolver`].

use std::cmp::Ordering;
use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, properties::GradleProperties};

// ── Minecraft version helpers ────────────────────────────────────────────────

/// Reject versions that cannot be used in a URL path segment.
pub fn validate_minecraft_version(mc: &str) -> Result<&str, DomainError> {
    let ok = !mc.is_empty()
        && mc
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'));
    if ok {
        Ok(mc)
    } else {
        Err(DomainError::InvalidMinecraftVersion {
            version: mc.to_string(),
        })
    }
}

/// Maven-style range covering `mc` up to, but excluding, the next minor.
///
/// `1.21.5` becomes `[1.21.5, 1.22)`. If the minor component is missing or
/// not a number the upper bound falls back to `mc` itself.
pub fn version_range(mc: &str) -> String {
    let parts: Vec<&str> = mc.split('.').collect();
    let upper = match parts.as_slice() {
        [major, minor, ..] => match minor.parse::<u64>() {
            Ok(minor) => format!("{major}.{}", minor + 1),
            Err(_) => mc.to_string(),
        },
        _ => mc.to_string(),
    };
    format!("[{mc}, {upper})")
}

/// NeoForge versions drop the leading `1.`: Minecraft `1.21.5` maps to
/// `21.5.x`. A missing patch is `0`, so `1.21` maps to `21.0.x`.
pub fn neoforge_prefix(mc: &str) -> Option<String> {
    let mut parts = mc.split('.').skip(1);
    let minor = parts.next().filter(|s| !s.is_empty())?;
    let patch = parts.next().filter(|s| !s.is_empty()).unwrap_or("0");
    Some(format!("{minor}.{patch}."))
}

// ── Remote metadata shapes ───────────────────────────────────────────────────

/// The parts of a Maven `maven-metadata.xml` we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MavenMetadata {
    #[serde(default)]
    pub versioning: MavenVersioning,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MavenVersioning {
    pub latest: Option<String>,
    #[serde(default)]
    pub versions: MavenVersionList,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MavenVersionList {
    #[serde(default)]
    pub version: Vec<String>,
}

impl MavenMetadata {
    pub fn versions(&self) -> &[String] {
        &self.versioning.versions.version
    }
}

/// One element of `meta.fabricmc.net/v2/versions/loader/<mc>`.
#[derive(Debug, Clone, Deserialize)]
pub struct FabricLoaderEntry {
    pub loader: FabricLoaderInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FabricLoaderInfo {
    pub version: String,
    #[serde(default)]
    pub stable: bool,
}

/// One element of Modrinth's `/v2/project/<slug>/version` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModrinthVersion {
    pub version_number: String,
    pub date_published: String,
}

// ── Selection rules ──────────────────────────────────────────────────────────

/// Newest `<mc>-*` version from a Maven listing (NeoForm style).
///
/// Release candidates and pre-releases are used only when nothing else
/// matches. Candidates are compared as plain strings.
pub fn select_prefixed(versions: &[String], mc: &str) -> Option<String> {
    let prefix = format!("{mc}-");
    let candidates: Vec<&String> = versions.iter().filter(|v| v.starts_with(&prefix)).collect();
    let mut pool = prefer(&candidates, &["-rc", "-pre"]);
    pool.sort();
    pool.last().map(|v| v.to_string())
}

/// Last NeoForge version, in listing order, built for `mc`.
pub fn select_neoforge(versions: &[String], mc: &str) -> Option<String> {
    let prefix = neoforge_prefix(mc)?;
    let candidates: Vec<&String> = versions.iter().filter(|v| v.starts_with(&prefix)).collect();
    prefer(&candidates, &["-beta", "-rc"])
        .last()
        .map(|v| v.to_string())
}

/// Highest stable Fabric loader.
pub fn select_fabric_loader(entries: &[FabricLoaderEntry]) -> Option<String> {
    entries
        .iter()
        .filter(|e| e.loader.stable)
        .map(|e| &e.loader.version)
        .max_by_key(|v| VersionKey::parse(v))
        .cloned()
}

/// Most recently published Modrinth version.
pub fn select_latest_published(versions: &[ModrinthVersion]) -> Option<String> {
    versions
        .iter()
        .max_by(|a, b| compare_published(&a.date_published, &b.date_published))
        .map(|v| v.version_number.clone())
}

static FORGE_RECOMMENDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Recommended:\s*([0-9.]+)").expect("valid regex"));
static FORGE_LATEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Latest:\s*([0-9.]+)").expect("valid regex"));

/// Forge version from the promotions page: recommended first, then latest.
pub fn select_forge(html: &str) -> Option<String> {
    [&*FORGE_RECOMMENDED, &*FORGE_LATEST]
        .into_iter()
        .find_map(|re| re.captures(html).map(|c| c[1].to_string()))
}

/// Drop entries containing any of `unstable` unless that would leave nothing.
fn prefer<'a>(candidates: &[&'a String], unstable: &[&str]) -> Vec<&'a String> {
    let stable: Vec<&String> = candidates
        .iter()
        .copied()
        .filter(|v| !unstable.iter().any(|u| v.contains(u)))
        .collect();
    if stable.is_empty() {
        candidates.to_vec()
    } else {
        stable
    }
}

fn compare_published(a: &str, b: &str) -> Ordering {
    match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Sort key splitting a version on `.` and `-`.
///
/// Numeric segments compare as numbers and sort before text segments, so
/// `0.16.10` > `0.16.9` and `1.0.0` < `1.0.0-beta` never panics on mixed
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(Vec<Segment>);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Num(u64),
    Text(String),
}

impl VersionKey {
    pub fn parse(version: &str) -> Self {
        Self(
            version
                .split(['.', '-'])
                .map(|part| match part.parse::<u64>() {
                    Ok(n) if part.bytes().all(|b| b.is_ascii_digit()) => Segment::Num(n),
                    _ => Segment::Text(part.to_string()),
                })
                .collect(),
        )
    }
}

// ── Aggregated result ────────────────────────────────────────────────────────

/// Everything `set-minecraft-version` discovers for one Minecraft version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyVersions {
    pub neoform_version: Option<String>,
    pub neoforge_version: Option<String>,
    pub parchment_minecraft: Option<String>,
    pub parchment_version: Option<String>,
    pub fabric_loader_version: Option<String>,
    pub fabric_version: Option<String>,
    pub mod_menu_version: Option<String>,
    pub forge_version: Option<String>,
}

impl DependencyVersions {
    /// `(key, value)` pairs in report order.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("neoform_version", self.neoform_version.as_deref()),
            ("neoforge_version", self.neoforge_version.as_deref()),
            ("parchment_minecraft", self.parchment_minecraft.as_deref()),
            ("parchment_version", self.parchment_version.as_deref()),
            ("fabric_loader_version", self.fabric_loader_version.as_deref()),
            ("fabric_version", self.fabric_version.as_deref()),
            ("mod_menu_version", self.mod_menu_version.as_deref()),
            ("forge_version", self.forge_version.as_deref()),
        ]
    }

    /// Keys nothing could be found for.
    pub fn missing(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| k)
            .collect()
    }

    /// Property assignments for `gradle.properties`, in write order.
    pub fn property_updates(&self, mc: &str) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("minecraft_version", Some(mc.to_string())),
            ("minecraft_version_range", Some(version_range(mc))),
            ("neo_form_version", self.neoform_version.clone()),
            ("parchment_minecraft", Some(mc.to_string())),
            ("parchment_version", self.parchment_version.clone()),
            ("fabric_loader_version", self.fabric_loader_version.clone()),
            ("fabric_version", self.fabric_version.clone()),
            ("mod_menu_version", self.mod_menu_version.clone()),
            ("forge_version", self.forge_version.clone()),
            ("neoforge_version", self.neoforge_version.clone()),
            ("game_versions", Some(mc.to_string())),
        ]
    }

    /// Write every known value into `props`. Unknown or empty values leave
    /// the existing line alone. Returns the keys that were rewritten.
    pub fn apply_to(&self, props: &mut GradleProperties, mc: &str) -> Vec<&'static str> {
        self.property_updates(mc)
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.filter(|v| !v.is_empty())?;
                props.set(key, &value).then_some(key)
            })
            .collect()
    }
}

/// Pages where versions can be looked up by hand.
pub const MANUAL_LOOKUP_URLS: [&str; 5] = [
    "https://projects.neoforged.net/neoforged/neoform",
    "https://projects.neoforged.net/neoforged/neoforge",
    "https://fabricmc.net/develop/",
    "https://files.minecraftforge.net/net/minecraftforge/forge/",
    "https://parchmentmc.org/docs/getting-started#choose-a-version",
];
