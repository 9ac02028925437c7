//! Implementation of `moddy add-service`.

use tracing::{info, instrument};

use moddy_adapters::LocalFilesystem;
use moddy_core::{
    application::{ApplicationError, ServiceGenerator},
    error::ModdyError,
};

use crate::{
    cli::{AddServiceArgs, GlobalArgs},
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

/// Preview the service files, refuse to overwrite, confirm, then write.
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(args: AddServiceArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let generator = ServiceGenerator::new(Box::new(LocalFilesystem::new()));
    let plan = generator.plan(&global.project_dir, &args.name)?;

    output.header(&format!(
        "This will create a new service called '{}'.",
        plan.name()
    ))?;
    output.print("The following files will be created:")?;
    output.print("")?;
    for file in plan.files() {
        output.print(&format!("--- {}", file.path.display()))?;
        output.print(file.content.trim_end())?;
        output.print("")?;
    }

    let existing = generator.existing(&plan);
    if !existing.is_empty() {
        output.warning("The following files already exist and will not be overwritten:")?;
        for path in &existing {
            output.print(&format!("  {}", path.display()))?;
        }
        return Err(ModdyError::from(ApplicationError::FilesExist { paths: existing }).into());
    }

    if args.dry_run {
        output.info("Dry run: no files were written")?;
        return Ok(());
    }

    if !Prompter::new(global.yes).confirm("Proceed?")? {
        output.print("Aborted")?;
        return Ok(());
    }

    let created = generator.apply(&plan)?;
    for path in &created {
        output.success(&format!("Created {}", path.display()))?;
    }
    info!(files = created.len(), fqn = %plan.fqn(), "Service added");

    Ok(())
}
