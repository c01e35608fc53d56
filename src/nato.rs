//! The code table: every printable ASCII character and the word used to
//! spell it out.
//!
//! The table covers `' '..='~'` and nothing else. Upper case letters are
//! prefixed with `Capital` so that `A` and `a` stay distinguishable when read
//! aloud.

/// First character in the table (space).
const FIRST: u8 = b' ';

/// Last character in the table (tilde).
const LAST: u8 = b'~';

/// Words indexed by `byte - FIRST`, in ASCII order.
static NATO_WORDS: [&str; (LAST - FIRST + 1) as usize] = [
    // 0x20 - 0x2F
    "Space", "Exclamation Mark", "Quotation Mark", "Hash",
    "Dollar Sign", "Percent", "Ampersand", "Apostrophe",
    "Left Parenthesis", "Right Parenthesis", "Asterisk", "Plus",
    "Comma", "Hyphen", "Period", "Slash",
    // 0x30 - 0x39
    "Zero", "One", "Two", "Three", "Four",
    "Five", "Six", "Seven", "Eight", "Nine",
    // 0x3A - 0x40
    "Colon", "Semicolon", "Less Than", "Equals",
    "Greater Than", "Question Mark", "At Sign",
    // 0x41 - 0x5A
    "Capital Alpha", "Capital Bravo", "Capital Charlie", "Capital Delta",
    "Capital Echo", "Capital Foxtrot", "Capital Golf", "Capital Hotel",
    "Capital India", "Capital Juliett", "Capital Kilo", "Capital Lima",
    "Capital Mike", "Capital November", "Capital Oscar", "Capital Papa",
    "Capital Quebec", "Capital Romeo", "Capital Sierra", "Capital Tango",
    "Capital Uniform", "Capital Victor", "Capital Whiskey", "Capital X-ray",
    "Capital Yankee", "Capital Zulu",
    // 0x5B - 0x60
    "Left Bracket", "Backslash", "Right Bracket",
    "Caret", "Underscore", "Backtick",
    // 0x61 - 0x7A
    "Alpha", "Bravo", "Charlie", "Delta",
    "Echo", "Foxtrot", "Golf", "Hotel",
    "India", "Juliett", "Kilo", "Lima",
    "Mike", "November", "Oscar", "Papa",
    "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray",
    "Yankee", "Zulu",
    // 0x7B - 0x7E
    "Left Brace", "Vertical Bar", "Right Brace", "Tilde",
];

/// Return the word for `c`, or `None` if `c` is outside the table.
///
/// ## Example
/// ```
/// assert_eq!(nato_mnemonic::nato::lookup('A'), Some("Capital Alpha"));
/// assert_eq!(nato_mnemonic::nato::lookup('\t'), None);
/// ```
pub fn lookup(c: char) -> Option<&'static str> {
    if !is_supported(c) {
        return None;
    }
    Some(NATO_WORDS[(c as u8 - FIRST) as usize])
}

pub fn is_supported(c: char) -> bool {
    c.is_ascii() && (FIRST..=LAST).contains(&(c as u8))
}

/// Every `(character, word)` pair in ASCII order.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    (FIRST..=LAST).map(char::from).zip(NATO_WORDS.iter().copied())
}
