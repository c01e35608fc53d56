// UI layer: turns the parsed arguments into a batch of passwords and writes
// the mnemonic blocks. Progress and prompts go to the terminal through
// `indicatif` and `dialoguer`; stdout only carries the blocks themselves.

use crate::api::{DinopassClient, PasswordSource};
use crate::cli::{Cli, Mode};
use crate::error::Error;
use crate::{encoder, input, nato};
use anyhow::{Context, Result};
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::warn;

/// Run the CLI, talking to Dinopass (configured by `DINOPASS_URL`) when a
/// generated password is requested.
pub fn run<W: Write>(cli: &Cli, out: W) -> Result<()> {
    run_with(cli, DinopassClient::from_env, out)
}

/// Same as [`run`], with the password source built by `make_source`. The
/// source is only built in generated mode.
pub fn run_with<S, F, W>(cli: &Cli, make_source: F, mut out: W) -> Result<()>
    where S: PasswordSource,
          F: FnOnce() -> crate::Result<S>,
          W: Write
{
    let batch = match cli.mode() {
        Mode::Table => return print_table(&mut out),
        Mode::Generated => {
            if !cli.phrase.is_empty() || cli.split {
                warn!("--password given, ignoring the phrase and --split");
            }
            let source = make_source().context("Failed to build HTTP client")?;
            generate(&source)?
        }
        Mode::Prompt => vec![prompt_password()?],
        Mode::Phrase { tokens, split } => input::phrase_batch(tokens, split)?,
    };
    encoder::write_batch(&batch, out)?;
    Ok(())
}

/// Fetch one password, with a spinner on stderr while the request runs.
fn generate<S: PasswordSource>(source: &S) -> Result<Vec<String>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Generating password...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    match input::generated_batch(source) {
        Ok(batch) => {
            spinner.finish_with_message("Password generated.");
            Ok(batch)
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e.into())
        }
    }
}

/// Read one password from a hidden terminal prompt.
fn prompt_password() -> Result<String> {
    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| Error::Prompt(e.to_string()))?;
    Ok(password)
}

fn print_table<W: Write>(out: &mut W) -> Result<()> {
    for (c, word) in nato::entries() {
        writeln!(out, "{:<6}{}", format!("{:?}", c), word)?;
    }
    Ok(())
}
