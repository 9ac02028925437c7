//! Confirmation and text prompts.
//!
//! On a terminal (and with the `interactive` feature) prompts go through
//! `dialoguer`. Otherwise one line is read from stdin, so answers can be
//! piped in. Prompt text always goes to stderr, like dialoguer's, so it never
//! mixes with data on stdout.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{CliResult, IntoCli};

pub struct Prompter {
    assume_yes: bool,
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    interactive: bool,
}

impl Prompter {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            interactive: cfg!(feature = "interactive") && io::stdin().is_terminal(),
        }
    }

    /// `[y/N]` question. `--yes` answers it; EOF counts as no.
    pub fn confirm(&self, question: &str) -> CliResult<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        #[cfg(feature = "interactive")]
        if self.interactive {
            return dialoguer::Confirm::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(prompt_error);
        }
        let line = read_answer(&format!("{question} [y/N] "))?;
        Ok(is_yes(&line))
    }

    /// Free-text value; empty input keeps `default`.
    pub fn input(&self, label: &str, default: &str) -> CliResult<String> {
        if self.assume_yes {
            return Ok(default.to_owned());
        }
        #[cfg(feature = "interactive")]
        if self.interactive {
            return dialoguer::Input::<String>::new()
                .with_prompt(label)
                .default(default.to_owned())
                .interact_text()
                .map_err(prompt_error);
        }
        let line = read_answer(&format!("{label} [{default}]: "))?;
        Ok(or_default(&line, default))
    }
}

#[cfg(feature = "interactive")]
fn prompt_error(e: dialoguer::Error) -> crate::error::CliError {
    crate::error::CliError::IoError {
        message: format!("Prompt failed: {e}"),
        source: io::Error::other(e.to_string()),
    }
}

fn read_answer(prompt: &str) -> CliResult<String> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt}").with_cli_context(|| "Writing prompt")?;
    stderr.flush().with_cli_context(|| "Writing prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_cli_context(|| "Reading answer")?;
    Ok(line)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn or_default(answer: &str, default: &str) -> String {
    match answer.trim() {
        "" => default.to_owned(),
        value => value.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES \r\n"));
        assert!(!is_yes("\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn blank_answer_keeps_default() {
        assert_eq!(or_default("\n", "examplemod"), "examplemod");
        assert_eq!(or_default(" coolmod \n", "examplemod"), "coolmod");
    }

    #[test]
    fn assume_yes_skips_io() {
        let prompter = Prompter {
            assume_yes: true,
            interactive: false,
        };
        assert!(prompter.confirm("Proceed?").unwrap());
        assert_eq!(prompter.input("Mod id", "examplemod").unwrap(), "examplemod");
    }
}
