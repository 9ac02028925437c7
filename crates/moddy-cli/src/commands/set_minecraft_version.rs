//! Implementation of `moddy set-minecraft-version`.
//!
//! Looks up NeoForm, NeoForge, Parchment, Fabric Loader, Fabric API, Mod Menu
//! and Forge for one Minecraft version, reports what was found, and writes
//! the results into `gradle.properties` once confirmed.

use serde::Serialize;
use tracing::{info, instrument};

use moddy_adapters::{LocalFilesystem, ReqwestClient};
use moddy_core::{
    application::{ApplicationError, VersionResolver},
    domain::{DependencyVersions, GRADLE_PROPERTIES, MANUAL_LOOKUP_URLS, validate_minecraft_version},
    error::ModdyError,
};

use crate::{
    cli::{GlobalArgs, SetMinecraftVersionArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

/// JSON shape printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct VersionReport<'a> {
    minecraft_version: &'a str,
    versions: &'a DependencyVersions,
    missing: Vec<&'static str>,
    manual_lookup: &'static [&'static str],
    applied: bool,
}

#[instrument(skip_all, fields(mc = %args.version))]
pub fn execute(
    args: SetMinecraftVersionArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let mc = validate_minecraft_version(&args.version).map_err(ModdyError::from)?;
    let root = &global.project_dir;

    let properties = root.join(GRADLE_PROPERTIES);
    if !args.dry_run && !properties.is_file() {
        return Err(ModdyError::from(ApplicationError::FileNotFound { path: properties }).into());
    }

    let prompter = Prompter::new(global.yes);
    output.header(&format!("Fetching dependency versions for Minecraft {mc}."))?;
    if !prompter.confirm("Proceed?")? {
        output.print("Aborted")?;
        return Ok(());
    }

    let http = ReqwestClient::new(config.timeout(), &config.http.user_agent)?;
    let resolver = VersionResolver::new(Box::new(http), Box::new(LocalFilesystem::new()));

    let spinner = output.spinner("Looking up versions...");
    let versions = resolver.collect(mc);
    spinner.finish_and_clear();
    let versions = versions?;
    let missing = versions.missing();

    if !output.is_json() {
        render(&versions, &missing, output)?;
    }

    let applied = if args.dry_run {
        if !output.is_json() {
            output.info(&format!("Dry run: {GRADLE_PROPERTIES} left unchanged"))?;
        }
        false
    } else if prompter.confirm(&format!("Apply these versions to {GRADLE_PROPERTIES}?"))? {
        let updated = resolver.apply(root, mc, &versions)?;
        info!(keys = updated.len(), "Applied versions");
        if !output.is_json() {
            output.success(&format!(
                "Updated {GRADLE_PROPERTIES} ({} properties)",
                updated.len()
            ))?;
        }
        true
    } else {
        if !output.is_json() {
            output.print("No changes made")?;
        }
        false
    };

    if output.is_json() {
        output.json(&VersionReport {
            minecraft_version: mc,
            versions: &versions,
            missing,
            manual_lookup: &MANUAL_LOOKUP_URLS,
            applied,
        })?;
    }

    Ok(())
}

fn render(
    versions: &DependencyVersions,
    missing: &[&'static str],
    output: &OutputManager,
) -> CliResult<()> {
    output.print("Fetched versions:")?;
    for (key, value) in versions.entries() {
        output.print(&format!("  {key}: {}", value.unwrap_or("not found")))?;
    }

    if !missing.is_empty() {
        output.print("")?;
        output.warning(&format!("Failed to determine: {}", missing.join(", ")))?;
        output.print("You can look them up manually at:")?;
        for url in MANUAL_LOOKUP_URLS {
            output.print(&format!("  {url}"))?;
        }
    }
    output.print("")?;
    Ok(())
}
