// Command-line arguments. Parsing lives here so that `main.rs` stays a thin
// wrapper and the tests can build a `Cli` from plain string slices.

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "mnemonic")]
#[command(about = "Convert a password into a mnemonic phrase.")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Password to convert.
    pub phrase: Vec<String>,

    /// Do not combine multiple space split words into one mnemonic.
    #[arg(short, long)]
    pub split: bool,

    /// Generate a password with Dinopass and convert it.
    #[arg(short, long)]
    pub password: bool,

    /// Type the password at a hidden prompt instead of passing it as an argument.
    #[arg(short = 'i', long, conflicts_with_all = ["phrase", "password", "split"])]
    pub prompt: bool,

    /// Print the whole character table and exit.
    #[arg(short, long)]
    pub table: bool,

    /// Print version.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Where the passwords for this run come from.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode<'a> {
    Table,
    Generated,
    Prompt,
    Phrase { tokens: &'a [String], split: bool },
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        if self.table {
            Mode::Table
        } else if self.password {
            Mode::Generated
        } else if self.prompt {
            Mode::Prompt
        } else {
            Mode::Phrase { tokens: &self.phrase, split: self.split }
        }
    }
}
