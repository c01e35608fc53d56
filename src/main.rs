// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, parse arguments, hand over to `ui::run`.
// - Returns `anyhow::Result` so any failure exits with status 1.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use nato_mnemonic::{cli::Cli, ui, Error};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is reserved for the mnemonic blocks.
    // `RUST_LOG` overrides the default level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nato_mnemonic=warn")),
        )
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();

    match ui::run(&cli, stdout.lock()) {
        // Report missing input the way clap reports a missing argument.
        Err(e) if matches!(e.downcast_ref::<Error>(), Some(Error::MissingInput)) => {
            Cli::command().error(ErrorKind::MissingRequiredArgument, e.to_string()).exit()
        }
        other => other,
    }
}
