//! Version Resolver - looks up dependency versions for a Minecraft release
//! and writes them into `gradle.properties`.
//!
//! Every lookup is independent: a failure is logged and leaves that value
//! empty, it never aborts the others.

use std::path::Path;
use std::thread::{self, ScopedJoinHandle};

use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, HttpClient},
        services::service_generator::read_properties,
    },
    domain::{
        DependencyVersions, FabricLoaderEntry, GRADLE_PROPERTIES, MavenMetadata, ModrinthVersion,
        select_fabric_loader, select_forge, select_latest_published, select_neoforge,
        select_prefixed, validate_minecraft_version,
    },
    error::ModdyResult,
};

pub const NEOFORM_METADATA_URL: &str =
    "https://maven.neoforged.net/releases/net/neoforged/neoform/maven-metadata.xml";
pub const NEOFORGE_METADATA_URL: &str =
    "https://maven.neoforged.net/releases/net/neoforged/neoforge/maven-metadata.xml";

/// The Forge site rejects requests without a browser user agent.
const FORGE_HEADERS: &[(&str, &str)] = &[("User-Agent", "Mozilla/5.0")];

pub fn parchment_metadata_url(mc: &str) -> String {
    format!("https://maven.parchmentmc.org/org/parchmentmc/data/parchment-{mc}/maven-metadata.xml")
}

pub fn fabric_loader_url(mc: &str) -> String {
    format!("https://meta.fabricmc.net/v2/versions/loader/{mc}")
}

/// Modrinth listing for `slug`, filtered to `mc`.
pub fn modrinth_versions_url(slug: &str, mc: &str) -> String {
    let filter = urlencoding::encode(&format!("[\"{mc}\"]")).into_owned();
    format!("https://api.modrinth.com/v2/project/{slug}/version?game_versions={filter}")
}

pub fn forge_index_url(mc: &str) -> String {
    format!("https://files.minecraftforge.net/net/minecraftforge/forge/index_{mc}.html")
}

pub struct VersionResolver {
    http: Box<dyn HttpClient>,
    filesystem: Box<dyn Filesystem>,
}

impl VersionResolver {
    pub fn new(http: Box<dyn HttpClient>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { http, filesystem }
    }

    /// Run every lookup for `mc` in parallel.
    #[instrument(skip(self))]
    pub fn collect(&self, mc: &str) -> ModdyResult<DependencyVersions> {
        let mc = validate_minecraft_version(mc)?;
        let http = self.http.as_ref();

        let versions = thread::scope(|s| {
            let neoform = s.spawn(|| neoform_version(http, mc));
            let neoforge = s.spawn(|| neoforge_version(http, mc));
            let parchment = s.spawn(|| parchment_version(http, mc));
            let fabric_loader = s.spawn(|| fabric_loader_version(http, mc));
            let fabric_api = s.spawn(|| modrinth_version(http, "fabric-api", mc));
            let mod_menu = s.spawn(|| modrinth_version(http, "modmenu", mc));
            let forge = s.spawn(|| forge_version(http, mc));

            DependencyVersions {
                neoform_version: settle("neoform_version", neoform),
                neoforge_version: settle("neoforge_version", neoforge),
                parchment_minecraft: Some(mc.to_string()),
                parchment_version: settle("parchment_version", parchment),
                fabric_loader_version: settle("fabric_loader_version", fabric_loader),
                fabric_version: settle("fabric_version", fabric_api),
                mod_menu_version: settle("mod_menu_version", mod_menu),
                forge_version: settle("forge_version", forge),
            }
        });

        info!(missing = versions.missing().len(), "Version lookup finished");
        Ok(versions)
    }

    /// Write `versions` into `<root>/gradle.properties`.
    ///
    /// Returns the property keys that were rewritten.
    #[instrument(skip(self, versions), fields(root = %root.display()))]
    pub fn apply(
        &self,
        root: &Path,
        mc: &str,
        versions: &DependencyVersions,
    ) -> ModdyResult<Vec<&'static str>> {
        let mc = validate_minecraft_version(mc)?;
        let mut props = read_properties(self.filesystem.as_ref(), root)?;
        let updated = versions.apply_to(&mut props, mc);
        self.filesystem
            .write_file(&root.join(GRADLE_PROPERTIES), props.as_str())?;
        info!(keys = updated.len(), "Updated {GRADLE_PROPERTIES}");
        Ok(updated)
    }
}

/// Join a lookup thread, logging any failure as a missing value.
fn settle(
    key: &'static str,
    handle: ScopedJoinHandle<'_, ModdyResult<Option<String>>>,
) -> Option<String> {
    match handle.join() {
        Ok(Ok(Some(version))) => {
            debug!(key, %version, "Resolved");
            Some(version)
        }
        Ok(Ok(None)) => {
            debug!(key, "No matching version");
            None
        }
        Ok(Err(e)) => {
            warn!(key, error = %e, "Lookup failed");
            None
        }
        Err(_) => {
            warn!(key, "Lookup thread panicked");
            None
        }
    }
}

fn neoform_version(http: &dyn HttpClient, mc: &str) -> ModdyResult<Option<String>> {
    let meta = fetch_maven(http, NEOFORM_METADATA_URL)?;
    Ok(select_prefixed(meta.versions(), mc))
}

fn neoforge_version(http: &dyn HttpClient, mc: &str) -> ModdyResult<Option<String>> {
    let meta = fetch_maven(http, NEOFORGE_METADATA_URL)?;
    Ok(select_neoforge(meta.versions(), mc))
}

fn parchment_version(http: &dyn HttpClient, mc: &str) -> ModdyResult<Option<String>> {
    let meta = fetch_maven(http, &parchment_metadata_url(mc))?;
    Ok(meta.versioning.latest)
}

fn fabric_loader_version(http: &dyn HttpClient, mc: &str) -> ModdyResult<Option<String>> {
    let entries: Vec<FabricLoaderEntry> = fetch_json(http, &fabric_loader_url(mc))?;
    Ok(select_fabric_loader(&entries))
}

fn modrinth_version(http: &dyn HttpClient, slug: &str, mc: &str) -> ModdyResult<Option<String>> {
    let versions: Vec<ModrinthVersion> = fetch_json(http, &modrinth_versions_url(slug, mc))?;
    Ok(select_latest_published(&versions))
}

fn forge_version(http: &dyn HttpClient, mc: &str) -> ModdyResult<Option<String>> {
    let html = http.get_text(&forge_index_url(mc), FORGE_HEADERS)?;
    Ok(select_forge(&html))
}

fn fetch_maven(http: &dyn HttpClient, url: &str) -> ModdyResult<MavenMetadata> {
    let xml = http.get_text(url, &[])?;
    serde_xml_rs::from_str(&xml).map_err(|e| parse_error(url, e))
}

fn fetch_json<T: DeserializeOwned>(http: &dyn HttpClient, url: &str) -> ModdyResult<T> {
    let json = http.get_text(url, &[])?;
    serde_json::from_str(&json).map_err(|e| parse_error(url, e))
}

fn parse_error(url: &str, e: impl std::fmt::Display) -> crate::error::ModdyError {
    ApplicationError::Parse {
        source_name: url.to_string(),
        reason: e.to_string(),
    }
    .into()
}
