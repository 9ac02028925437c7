//! Implementation of `moddy open-libs`. Never asks for confirmation.

use moddy_adapters::{LocalFilesystem, SystemOpener};
use moddy_core::application::LibsLocator;

use crate::{
    cli::{GlobalArgs, OpenLibsArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: OpenLibsArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let locator = LibsLocator::new(Box::new(LocalFilesystem::new()), Box::new(SystemOpener));
    let path = locator.open(&global.project_dir, args.loader.into())?;
    output.success(&format!("Opened {}", path.display()))?;
    Ok(())
}
