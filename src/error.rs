// Error module: the single error type returned by every library function.
// The binary wraps these in `anyhow` for context; tests match on variants.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A character has no entry in the code table. `position` is the
    /// 0-based character index inside the password.
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    #[error("Unable to reach Dinopass: {reason}")]
    SourceUnavailable { reason: String },

    #[error("Unable to generate password from Dinopass. Error code : {status}")]
    SourceStatus { status: u16 },

    #[error(
        "Dinopass returned an invalid password length ({length}). Please try again, \
         and if you still get this error, check the server."
    )]
    InvalidGeneratedLength { length: usize },

    #[error("the following arguments are required: phrase (or use -p/--password to generate one)")]
    MissingInput,

    #[error("password prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
