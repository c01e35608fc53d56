//! Building the batch of passwords to encode.
//!
//! A batch comes either from the words given on the command line (joined
//! into one password, or one password per word in split mode) or from a
//! [`PasswordSource`] that generates exactly one password.

use crate::api::PasswordSource;
use crate::error::{Error, Result};
use std::ops::RangeInclusive;
use tracing::debug;

/// Accepted length, in characters, of a generated password.
pub const GENERATED_LENGTH: RangeInclusive<usize> = 10..=64;

/// Batch from command line tokens.
pub fn phrase_batch(tokens: &[String], split: bool) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(Error::MissingInput);
    }
    let batch = if split {
        tokens.to_vec()
    } else {
        vec![tokens.join(" ")]
    };
    debug!(size = batch.len(), split, "built batch from phrase");
    Ok(batch)
}

/// Batch holding the single password produced by `source`.
pub fn generated_batch<S: PasswordSource + ?Sized>(source: &S) -> Result<Vec<String>> {
    let password = validate_generated(source.fetch_password()?)?;
    Ok(vec![password])
}

/// Reject generated passwords shorter than 10 or longer than 64 characters.
pub fn validate_generated(password: String) -> Result<String> {
    let length = password.chars().count();
    if !GENERATED_LENGTH.contains(&length) {
        return Err(Error::InvalidGeneratedLength { length });
    }
    Ok(password)
}
