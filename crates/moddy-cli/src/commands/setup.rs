//! Implementation of `moddy setup`.

use tracing::instrument;

use moddy_adapters::{LocalFilesystem, PngEncoder};
use moddy_core::{
    application::{SetupEvent, TemplateInitializer},
    domain::SetupAnswers,
    error::ModdyError,
};

use crate::{
    cli::{GlobalArgs, SetupArgs},
    error::CliResult,
    output::OutputManager,
    prompt::Prompter,
};

/// Collect answers (flags, then prompts, then defaults), confirm, and
/// rewrite the template in place.
#[instrument(skip_all, fields(root = %global.project_dir.display()))]
pub fn execute(args: SetupArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = &global.project_dir;
    let initializer =
        TemplateInitializer::new(Box::new(LocalFilesystem::new()), Box::new(PngEncoder));
    let prompter = Prompter::new(global.yes);
    let answers = collect_answers(args, initializer.defaults(root), &prompter)?;
    answers.validate().map_err(ModdyError::from)?;

    output.header("This will update package names, identifiers and the changelog in this project.")?;
    if !prompter.confirm("Proceed?")? {
        output.print("Aborted")?;
        return Ok(());
    }

    let report = initializer.initialize(root, &answers)?;
    for event in &report.events {
        let line = event.to_string();
        match event {
            SetupEvent::VersionLineMissing | SetupEvent::ChangelogSkipped => output.warning(&line)?,
            SetupEvent::IconSkipped(_) => output.info(&line)?,
            _ => output.success(&line)?,
        }
    }
    output.success(&format!(
        "Template initialized ({} files modified).",
        report.modified_count()
    ))?;

    Ok(())
}

fn collect_answers(
    args: SetupArgs,
    defaults: SetupAnswers,
    prompter: &Prompter,
) -> CliResult<SetupAnswers> {
    let ask = |given: Option<String>, label: &str, default: &str| match given {
        Some(value) => Ok(value),
        None => prompter.input(label, default),
    };

    Ok(SetupAnswers {
        base_package: ask(args.package, "Base package", defaults.base_package.as_str())?,
        mod_id: ask(args.mod_id, "Mod id", defaults.mod_id.as_str())?,
        mod_name: ask(args.name, "Mod name", defaults.mod_name.as_str())?,
        author: ask(args.author, "Author", defaults.author.as_str())?,
        version: ask(args.version, "Initial version", defaults.version.as_str())?,
    })
}
