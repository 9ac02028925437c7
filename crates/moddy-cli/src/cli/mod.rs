//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use moddy_core::domain::Loader;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "moddy",
    bin_name = "moddy",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Helper for the multiloader mod template",
    long_about = "Moddy adds platform services, opens build output, bumps the \
                  Minecraft version, and initialises a freshly cloned template.",
    after_help = "EXAMPLES:\n\
        \x20 moddy setup\n\
        \x20 moddy add-service IPlatformHelper\n\
        \x20 moddy set-minecraft-version 1.21.5 --yes\n\
        \x20 moddy open-libs neoforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a service interface and loader-specific implementations.
    #[command(
        about = "Create a new platform service",
        after_help = "EXAMPLES:\n\
            \x20 moddy add-service IPlatformHelper\n\
            \x20 moddy add-service INetworkHelper --dry-run"
    )]
    AddService(AddServiceArgs),

    /// Open a loader's build/libs folder.
    #[command(
        about = "Open the build/libs folder for a loader",
        after_help = "EXAMPLES:\n\
            \x20 moddy open-libs fabric\n\
            \x20 moddy open-libs neoforge"
    )]
    OpenLibs(OpenLibsArgs),

    /// Look up dependency versions and write them to gradle.properties.
    #[command(
        about = "Update gradle.properties for a Minecraft version",
        after_help = "EXAMPLES:\n\
            \x20 moddy set-minecraft-version 1.21.5\n\
            \x20 moddy set-minecraft-version 1.21.5 --dry-run --output-format json"
    )]
    SetMinecraftVersion(SetMinecraftVersionArgs),

    /// Replace template placeholders with your mod's details.
    #[command(
        about = "Initialise the template after cloning",
        after_help = "EXAMPLES:\n\
            \x20 moddy setup\n\
            \x20 moddy setup --package dev.me.coolmod --mod-id coolmod --name \"Cool Mod\" --yes"
    )]
    Setup(SetupArgs),

    /// Download the latest moddy and replace the running executable.
    #[command(about = "Update moddy to the newest version")]
    Update(UpdateArgs),

    /// Print the moddy version.
    #[command(about = "Show the moddy version")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 moddy completions bash > ~/.local/share/bash-completion/completions/moddy\n\
            \x20 moddy completions zsh  > ~/.zfunc/_moddy\n\
            \x20 moddy completions fish > ~/.config/fish/completions/moddy.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or create the moddy configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 moddy config get http.timeout_secs\n\
            \x20 moddy config list\n\
            \x20 moddy config init"
    )]
    Config(ConfigCommands),
}

// ── add-service ───────────────────────────────────────────────────────────────

/// Arguments for `moddy add-service`.
#[derive(Debug, Args)]
pub struct AddServiceArgs {
    /// Java interface name, e.g. `IPlatformHelper`.
    #[arg(value_name = "NAME", help = "Service interface name")]
    pub name: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── open-libs ─────────────────────────────────────────────────────────────────

/// Arguments for `moddy open-libs`.
#[derive(Debug, Args)]
pub struct OpenLibsArgs {
    #[arg(value_enum, help = "Loader to open the output for")]
    pub loader: LoaderArg,
}

/// Loaders accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LoaderArg {
    Fabric,
    Forge,
    #[value(alias = "neo")]
    NeoForge,
}

impl From<LoaderArg> for Loader {
    fn from(arg: LoaderArg) -> Self {
        match arg {
            LoaderArg::Fabric => Loader::Fabric,
            LoaderArg::Forge => Loader::Forge,
            LoaderArg::NeoForge => Loader::NeoForge,
        }
    }
}

// ── set-minecraft-version ─────────────────────────────────────────────────────

/// Arguments for `moddy set-minecraft-version`.
#[derive(Debug, Args)]
pub struct SetMinecraftVersionArgs {
    /// Target Minecraft version.
    #[arg(value_name = "VERSION", help = "Minecraft version, e.g. 1.21.5")]
    pub version: String,

    /// Fetch and report, but leave gradle.properties untouched.
    #[arg(long = "dry-run", help = "Show the versions without applying them")]
    pub dry_run: bool,
}

// ── setup ─────────────────────────────────────────────────────────────────────

/// Arguments for `moddy setup`.
///
/// Every value left out is prompted for, or defaulted with `--yes`.
#[derive(Debug, Default, Args)]
pub struct SetupArgs {
    #[arg(long = "package", value_name = "PACKAGE", help = "Base Java package")]
    pub package: Option<String>,

    #[arg(long = "mod-id", value_name = "ID", help = "Mod id")]
    pub mod_id: Option<String>,

    #[arg(long = "name", value_name = "NAME", help = "Mod display name")]
    pub name: Option<String>,

    #[arg(long = "author", value_name = "AUTHOR", help = "Mod author")]
    pub author: Option<String>,

    #[arg(long = "mod-version", value_name = "VERSION", help = "Initial mod version")]
    pub version: Option<String>,
}

// ── update ────────────────────────────────────────────────────────────────────

/// Arguments for `moddy update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Override the configured release URL.
    #[arg(long = "url", value_name = "URL", help = "Release URL to download")]
    pub url: Option<String>,

    /// File to replace instead of the running executable.
    #[arg(long = "path", value_name = "FILE", help = "File to replace")]
    pub path: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `moddy completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `moddy config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `http.timeout_secs`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a configuration file with the default values.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
