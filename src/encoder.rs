//! Turns passwords into blocks of phonetic words.
//!
//! A block is the password, a blank line, then one word per character:
//!
//! ```text
//! ab
//!
//! Alpha
//! Bravo
//! ```
//!
//! ## Example
//!
//! ```rust
//! let words = nato_mnemonic::encode("Hi!").unwrap();
//! assert_eq!(words, ["Capital Hotel", "India", "Exclamation Mark"]);
//!
//! let out = nato_mnemonic::encoder::to_string(["ab", "cd"]).unwrap();
//! assert_eq!(out, "ab\n\nAlpha\nBravo\n\ncd\n\nCharlie\nDelta\n");
//! ```

use crate::error::{Error, Result};
use crate::nato;
use std::io::Write;
use tracing::debug;

/// Spell out `password` one word per character.
///
/// Fails on the first character missing from the code table; nothing is
/// skipped or substituted.
pub fn encode(password: &str) -> Result<Vec<&'static str>> {
    password
        .chars()
        .enumerate()
        .map(|(position, character)| {
            nato::lookup(character).ok_or(Error::UnsupportedCharacter { character, position })
        })
        .collect()
}

/// Lay out a password and its words as a block. No trailing newline.
pub fn format_block(password: &str, words: &[&str]) -> String {
    format!("{}\n\n{}", password, words.join("\n"))
}

/// Encode and format every password, in order. Any failure fails the batch.
pub fn process_batch<I>(passwords: I) -> Result<Vec<String>>
    where I: IntoIterator,
          I::Item: AsRef<str>
{
    passwords
        .into_iter()
        .map(|password| {
            let password = password.as_ref();
            let words = encode(password)?;
            Ok(format_block(password, &words))
        })
        .collect()
}

/// Encode each password and write its block to `dest` as soon as it is ready.
///
/// Blocks are separated by a single blank line. When a password cannot be
/// encoded the error is returned straight away: blocks for earlier passwords
/// have already been written, nothing is written for the failing one.
pub fn write_batch<I, W>(passwords: I, mut dest: W) -> Result<()>
    where I: IntoIterator,
          I::Item: AsRef<str>,
          W: Write
{
    for (idx, password) in passwords.into_iter().enumerate() {
        let password = password.as_ref();
        let words = encode(password)?;
        debug!(index = idx, chars = words.len(), "encoded password");
        if idx != 0 {
            dest.write_all(b"\n")?;
        }
        writeln!(dest, "{}", format_block(password, &words))?;
        dest.flush()?;
    }
    Ok(())
}

/// Render a whole batch into a `String`, byte for byte what `write_batch`
/// would write.
pub fn to_string<I>(passwords: I) -> Result<String>
    where I: IntoIterator,
          I::Item: AsRef<str>
{
    let mut out = Vec::new();
    write_batch(passwords, &mut out)?;
    // Only table words and the (already valid) passwords were written.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, Arbitrary, Gen};

    /// A string built only from characters in the code table.
    #[derive(Clone, Debug)]
    struct Printable(String);

    impl Arbitrary for Printable {
        fn arbitrary(g: &mut Gen) -> Self {
            let len = usize::arbitrary(g) % 64;
            let s = (0..len)
                .map(|_| char::from(b' ' + u8::arbitrary(g) % 95))
                .collect();
            Printable(s)
        }
    }

    #[test]
    fn test_encode_single_chars() {
        assert_eq!(encode("A").unwrap(), ["Capital Alpha"]);
        assert_eq!(encode("a").unwrap(), ["Alpha"]);
        assert_eq!(encode(" ").unwrap(), ["Space"]);
        for (c, word) in nato::entries() {
            assert_eq!(encode(&c.to_string()).unwrap(), [word]);
        }
    }

    #[test]
    fn test_encode_keeps_repeats() {
        assert_eq!(encode("aa").unwrap(), ["Alpha", "Alpha"]);
        assert_eq!(encode("a1A").unwrap(), ["Alpha", "One", "Capital Alpha"]);
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode("").unwrap().is_empty());
    }

    #[test]
    fn test_encode_unsupported() {
        match encode("caf\u{e9}") {
            Err(Error::UnsupportedCharacter { character, position }) => {
                assert_eq!(character, '\u{e9}');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            encode("tab\there"),
            Err(Error::UnsupportedCharacter { character: '\t', position: 3 })
        ));
    }

    #[test]
    fn test_format_block() {
        assert_eq!(format_block("ab", &["Alpha", "Bravo"]), "ab\n\nAlpha\nBravo");
        assert_eq!(format_block("", &[]), "\n\n");
    }

    #[test]
    fn test_process_batch() {
        let blocks = process_batch(["ab", "cd"]).unwrap();
        assert_eq!(blocks, ["ab\n\nAlpha\nBravo", "cd\n\nCharlie\nDelta"]);
        assert!(process_batch(["ok", "n\u{f6}"]).is_err());
    }

    #[test]
    fn test_write_batch_separator() {
        let out = to_string(["ab", "cd"]).unwrap();
        assert_eq!(out, "ab\n\nAlpha\nBravo\n\ncd\n\nCharlie\nDelta\n");
        assert!(!out.starts_with('\n'));
    }

    #[test]
    fn test_write_batch_single() {
        let out = to_string(["My secret"]).unwrap();
        assert_eq!(
            out,
            "My secret\n\nCapital Mike\nYankee\nSpace\nSierra\nEcho\nCharlie\nRomeo\nEcho\nTango\n"
        );
    }

    #[test]
    fn test_write_batch_keeps_earlier_blocks() {
        let mut out: Vec<u8> = vec![];
        let err = write_batch(["ab", "\u{e9}", "cd"], &mut out).unwrap_err();
        assert!(matches!(err, Error::UnsupportedCharacter { position: 0, .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "ab\n\nAlpha\nBravo\n");
    }

    quickcheck! {
        fn quickcheck_one_word_per_char(src: Printable) -> bool {
            let words = encode(&src.0).unwrap();
            words.len() == src.0.chars().count()
                && src.0.chars().zip(&words).all(|(c, w)| nato::lookup(c) == Some(*w))
        }

        fn quickcheck_deterministic(src: Printable) -> bool {
            encode(&src.0).unwrap() == encode(&src.0).unwrap()
        }
    }
}
