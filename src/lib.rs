// Library root
// -----------
// This crate spells passwords out with the NATO phonetic alphabet, one word
// per character. The binary (`main.rs`) is a thin wrapper around `ui::run`.
//
// Module responsibilities:
// - `nato`: the fixed character → word table.
// - `encoder`: encoding passwords and laying out the output blocks.
// - `input`: building the batch of passwords (phrase, split, generated).
// - `api`: the Dinopass HTTP client behind the `PasswordSource` trait.
// - `cli`: clap argument definitions.
// - `ui`: ties the above together and talks to the terminal.
// - `error`: the crate error type.
pub mod api;
pub mod cli;
pub mod encoder;
pub mod error;
pub mod input;
pub mod nato;
pub mod ui;

pub use api::{DinopassClient, PasswordSource};
pub use encoder::{encode, format_block, process_batch, write_batch};
pub use error::{Error, Result};
