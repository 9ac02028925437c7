//! End-to-end tests for the application services over in-memory adapters.

use std::path::{Path, PathBuf};

use moddy_adapters::{MemoryFilesystem, MemoryHttpClient, PngEncoder, RecordingOpener};
use moddy_core::application::services::version_resolver::{
    NEOFORGE_METADATA_URL, NEOFORM_METADATA_URL, fabric_loader_url, forge_index_url,
    modrinth_versions_url, parchment_metadata_url,
};
use moddy_core::application::ports::Filesystem;
use moddy_core::application::{
    ApplicationError, LibsLocator, SelfUpdater, ServiceGenerator, SetupEvent,
    TemplateInitializer, VersionResolver,
};
use moddy_core::domain::{Loader, SetupAnswers};
use moddy_core::error::ModdyError;

fn template_project() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(
            "proj/gradle.properties",
            "group=com.example.modtemplate\nversion=1.0.0\nmod_id=examplemod\n",
        )
        .with_file(
            "proj/changelog.md",
            "# Changelog\n\n## 1.0.0\n\n- template\n\n## Types of changes\n",
        )
        .with_file(
            "proj/common/src/main/java/com/example/modtemplate/TemplateMod.java",
            "package com.example.modtemplate;\npublic class TemplateMod {}\n",
        )
        .with_file(
            "proj/fabric/src/main/java/com/example/modtemplate/TemplateFabric.java",
            "package com.example.modtemplate;\nclass TemplateFabric extends TemplateMod {}\n",
        )
        .with_file(
            "proj/fabric/src/main/resources/examplemod.mixins.json",
            "{\"package\": \"com.example.modtemplate.mixin\"}\n",
        )
        .with_file("proj/.git/config", "[remote] examplemod\n")
        .with_file("proj/common/src/main/resources/blob.bin", [0xff, 0xfe, 0x00])
}

fn answers() -> SetupAnswers {
    SetupAnswers {
        base_package: "dev.kaf.coolmod".into(),
        mod_id: "coolmod".into(),
        mod_name: "Cool Mod".into(),
        author: "kaf".into(),
        version: "0.1.0".into(),
    }
}

#[test]
fn add_service_writes_every_loader() {
    let fs = template_project();
    let generator = ServiceGenerator::new(Box::new(fs.clone()));

    let plan = generator.plan(Path::new("proj"), "IPlatformHelper").unwrap();
    assert!(generator.existing(&plan).is_empty());
    let written = generator.apply(&plan).unwrap();
    assert_eq!(written.len(), 7);

    assert_eq!(
        fs.read_file(
            "proj/neoforge/src/main/resources/META-INF/services/com.example.modtemplate.platform.services.IPlatformHelper"
        )
        .as_deref(),
        Some("com.example.modtemplate.platform.NeoForgeIPlatformHelper\n")
    );

    // A second run must not overwrite anything.
    let err = generator.apply(&plan).unwrap_err();
    assert!(matches!(
        err,
        ModdyError::Application(ApplicationError::FilesExist { ref paths }) if paths.len() == 7
    ));
}

#[test]
fn open_libs_hands_folder_to_opener() {
    let fs = MemoryFilesystem::new().with_file("proj/forge/build/libs/mod-1.0.0.jar", "jar");
    let opener = RecordingOpener::new();
    let locator = LibsLocator::new(Box::new(fs), Box::new(opener.clone()));

    locator.open(Path::new("proj"), Loader::Forge).unwrap();
    assert_eq!(opener.opened(), vec![PathBuf::from("proj/forge/build/libs")]);

    let err = locator.open(Path::new("proj"), Loader::Fabric).unwrap_err();
    assert_eq!(err.to_string(), "No libs folder found at proj/fabric/build/libs");
    assert_eq!(opener.opened().len(), 1);
}

fn remote_metadata() -> MemoryHttpClient {
    MemoryHttpClient::new()
        .with_response(
            NEOFORM_METADATA_URL,
            "<metadata><groupId>net.neoforged</groupId><versioning><versions>\
             <version>1.21.4-20241203.161809</version>\
             <version>1.21.5-20250325.162830</version>\
             <version>1.21.5-20250401.000000</version>\
             </versions></versioning></metadata>",
        )
        .with_response(
            NEOFORGE_METADATA_URL,
            "<metadata><versioning><versions>\
             <version>21.5.0-beta</version><version>21.5.62</version>\
             <version>21.5.63-beta</version>\
             </versions></versioning></metadata>",
        )
        .with_response(
            parchment_metadata_url("1.21.5"),
            "<metadata><versioning><latest>2025.04.19</latest>\
             <release>2025.04.19</release>\
             <versions><version>2025.04.19</version></versions>\
             </versioning></metadata>",
        )
        .with_response(
            fabric_loader_url("1.21.5"),
            r#"[{"loader":{"version":"0.16.9","stable":true}},
                {"loader":{"version":"0.16.14","stable":true}},
                {"loader":{"version":"0.17.0-beta","stable":false}}]"#,
        )
        .with_response(
            modrinth_versions_url("fabric-api", "1.21.5"),
            r#"[{"version_number":"0.119.9+1.21.5","date_published":"2025-04-01T10:00:00Z"},
                {"version_number":"0.120.0+1.21.5","date_published":"2025-04-20T10:00:00Z"}]"#,
        )
        .with_response(
            forge_index_url("1.21.5"),
            "<div class=\"promo\"><small>Latest: 55.0.10</small></div>",
        )
}

#[test]
fn set_minecraft_version_collects_and_applies() {
    let http = remote_metadata();
    let fs = MemoryFilesystem::new().with_file(
        "proj/gradle.properties",
        "minecraft_version=1.21.4\n\
         minecraft_version_range=[1.21.4, 1.22)\n\
         neo_form_version=1.21.4-20241203.161809\n\
         parchment_minecraft=1.21.4\n\
         parchment_version=2025.03.23\n\
         fabric_loader_version=0.16.9\n\
         fabric_version=0.118.0+1.21.4\n\
         mod_menu_version=13.0.0\n\
         forge_version=54.1.0\n\
         neoforge_version=21.4.100\n\
         game_versions=1.21.4\n",
    );
    let resolver = VersionResolver::new(Box::new(http.clone()), Box::new(fs.clone()));

    let versions = resolver.collect("1.21.5").unwrap();
    assert_eq!(versions.neoform_version.as_deref(), Some("1.21.5-20250401.000000"));
    assert_eq!(versions.neoforge_version.as_deref(), Some("21.5.62"));
    assert_eq!(versions.parchment_version.as_deref(), Some("2025.04.19"));
    assert_eq!(versions.fabric_loader_version.as_deref(), Some("0.16.14"));
    assert_eq!(versions.fabric_version.as_deref(), Some("0.120.0+1.21.5"));
    assert_eq!(versions.forge_version.as_deref(), Some("55.0.10"));
    assert_eq!(versions.missing(), vec!["mod_menu_version"]);

    let forge_request = http
        .requests()
        .into_iter()
        .find(|r| r.url.contains("minecraftforge"))
        .unwrap();
    assert_eq!(
        forge_request.headers,
        vec![("User-Agent".to_string(), "Mozilla/5.0".to_string())]
    );

    resolver
        .apply(Path::new("proj"), "1.21.5", &versions)
        .unwrap();
    assert_eq!(
        fs.read_file("proj/gradle.properties").unwrap(),
        "minecraft_version=1.21.5\n\
         minecraft_version_range=[1.21.5, 1.22)\n\
         neo_form_version=1.21.5-20250401.000000\n\
         parchment_minecraft=1.21.5\n\
         parchment_version=2025.04.19\n\
         fabric_loader_version=0.16.14\n\
         fabric_version=0.120.0+1.21.5\n\
         mod_menu_version=13.0.0\n\
         forge_version=55.0.10\n\
         neoforge_version=21.5.62\n\
         game_versions=1.21.5\n"
    );
}

#[test]
fn setup_rewrites_the_template() {
    let fs = template_project();
    let initializer = TemplateInitializer::new(Box::new(fs.clone()), Box::new(PngEncoder));

    assert_eq!(initializer.defaults(Path::new("proj")).version, "1.0.0");
    let report = initializer.initialize(Path::new("proj"), &answers()).unwrap();

    assert_eq!(
        fs.read_file("proj/common/src/main/java/dev/kaf/coolmod/CoolModMod.java")
            .as_deref(),
        Some("package dev.kaf.coolmod;\npublic class CoolModMod {}\n")
    );
    assert_eq!(
        fs.read_file("proj/fabric/src/main/java/dev/kaf/coolmod/CoolModFabric.java")
            .as_deref(),
        Some("package dev.kaf.coolmod;\nclass CoolModFabric extends CoolModMod {}\n")
    );
    assert!(fs.read_file("proj/fabric/src/main/resources/coolmod.mixins.json").is_some());
    assert_eq!(
        fs.read_file("proj/gradle.properties").as_deref(),
        Some("group=dev.kaf.coolmod\nversion=0.1.0\nmod_id=coolmod\n")
    );
    assert_eq!(
        fs.read_file("proj/changelog.md").as_deref(),
        Some("# Changelog\n\n## 0.1.0\n\nInitial Implementation\n\n## Types of changes\n")
    );
    // Git metadata and binary files are left alone.
    assert_eq!(
        fs.read_file("proj/.git/config").as_deref(),
        Some("[remote] examplemod\n")
    );
    assert!(fs.list_files().contains(&PathBuf::from(
        "proj/common/src/main/resources/blob.bin"
    )));

    let icon = fs
        .read_bytes(Path::new("proj/common/src/main/resources/icon.png"))
        .unwrap();
    assert!(icon.starts_with(b"\x89PNG"));

    assert_eq!(report.modified_count(), 4);
    assert!(report.events.contains(&SetupEvent::ChangelogUpdated));
    assert!(report.events.contains(&SetupEvent::VersionSet("0.1.0".into())));
    assert_eq!(
        report
            .events
            .iter()
            .filter(|e| matches!(e, SetupEvent::Moved { .. }))
            .count(),
        2
    );
}

#[test]
fn setup_without_changelog_still_finishes() {
    let fs = MemoryFilesystem::new()
        .with_file("proj/gradle.properties", "group=a.b\nversion=1.0.0\n")
        .with_file("proj/common/src/main/resources/icon.png", "existing");
    let initializer = TemplateInitializer::new(Box::new(fs.clone()), Box::new(PngEncoder));

    let report = initializer.initialize(Path::new("proj"), &answers()).unwrap();
    assert!(report.events.contains(&SetupEvent::ChangelogSkipped));
    assert!(matches!(report.events.last(), Some(SetupEvent::IconSkipped(_))));
    assert_eq!(
        fs.read_file("proj/common/src/main/resources/icon.png").as_deref(),
        Some("existing")
    );
}

#[test]
fn setup_requires_gradle_properties() {
    let fs = MemoryFilesystem::new().with_file("proj/changelog.md", "# Changelog examplemod\n");
    let initializer = TemplateInitializer::new(Box::new(fs.clone()), Box::new(PngEncoder));
    let err = initializer
        .initialize(Path::new("proj"), &answers())
        .unwrap_err();
    assert!(matches!(
        err,
        ModdyError::Application(ApplicationError::FileNotFound { .. })
    ));
    // Nothing was rewritten.
    assert_eq!(
        fs.read_file("proj/changelog.md").as_deref(),
        Some("# Changelog examplemod\n")
    );
}

#[test]
fn update_replaces_target_and_keeps_backup() {
    let url = "https://example.invalid/moddy";
    let http = MemoryHttpClient::new().with_response(url, "#!/bin/sh\nMODDY_VERSION = \"9.9.9\"\n");
    let fs = MemoryFilesystem::new().with_file("bin/moddy", "old build");
    let updater = SelfUpdater::new(Box::new(http), Box::new(fs.clone()));

    let check = updater.check(url).unwrap();
    assert_eq!(check.remote, "9.9.9");
    assert!(!check.is_up_to_date());

    let outcome = updater
        .install(Path::new("bin/moddy"), &check.payload)
        .unwrap();
    assert_eq!(outcome.backup, PathBuf::from("bin/moddy.bak"));
    assert_eq!(fs.read_file("bin/moddy.bak").as_deref(), Some("old build"));
    assert!(fs.read_file("bin/moddy").unwrap().contains("9.9.9"));
    assert!(fs.is_executable("bin/moddy"));
}
