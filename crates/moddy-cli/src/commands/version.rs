//! `moddy version`: print the bare version string.

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&serde_json::json!({ "version": moddy_core::VERSION }))?;
    } else {
        output.data(moddy_core::VERSION)?;
    }
    Ok(())
}
