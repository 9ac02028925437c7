//! Implementation of `moddy update`.

use tracing::{info, instrument};

use moddy_adapters::{LocalFilesystem, ReqwestClient};
use moddy_core::application::SelfUpdater;

use crate::{
    cli::{GlobalArgs, UpdateArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

/// Download the published release and swap it in, keeping a `.bak` copy.
#[instrument(skip_all)]
pub fn execute(
    args: UpdateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let url = args.url.unwrap_or_else(|| config.update.url.clone());

    output.warning("This will download and run code from the internet.")?;
    output.print(&format!("Source: {url}"))?;
    if !Prompter::new(global.yes).confirm("Are you sure you want to continue?")? {
        output.print("Aborted")?;
        return Ok(());
    }

    let target = match args.path {
        Some(path) => path,
        None => std::env::current_exe().with_cli_context(|| "Locating the moddy executable")?,
    };

    let http = ReqwestClient::new(config.timeout(), &config.http.user_agent)?;
    let updater = SelfUpdater::new(Box::new(http), Box::new(LocalFilesystem::new()));

    let spinner = output.spinner("Downloading...");
    let check = updater.check(&url);
    spinner.finish_and_clear();
    let check = check?;

    if check.is_up_to_date() {
        output.success("Moddy is already up to date.")?;
        return Ok(());
    }

    let outcome = updater.install(&target, &check.payload)?;
    info!(from = %check.current, to = %check.remote, "Updated");
    output.success(&format!(
        "Updated Moddy from {} to {}",
        check.current, check.remote
    ))?;
    output.info(&format!(
        "A backup of the previous version was saved to {}",
        outcome.backup.display()
    ))?;

    Ok(())
}
