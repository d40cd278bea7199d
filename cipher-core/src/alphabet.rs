// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The fixed A-Z alphabet, case handling and the space-preservation rule.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Letter ↔ index mapping shared by every cipher.

use crate::error::{CipherError, Result};

/// The 26-letter alphabet, index 0 is `A`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 25-letter Playfair alphabet with `J` merged into `I`.
pub const PLAYFAIR_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Number of letters in [`ALPHABET`].
pub const LETTER_COUNT: usize = 26;

/// Padding and filler letter used by Playfair, Hill and Row-Column.
pub const FILLER: char = 'X';

/// Letter case hint for [`char_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `A`–`Z`.
    Upper,
    /// `a`–`z`.
    Lower,
}

impl Case {
    /// Case of `c`; anything that is not lowercase counts as upper.
    #[must_use]
    pub const fn of(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Lower
        } else {
            Self::Upper
        }
    }
}

/// Alphabet index of `c` (0–25), ignoring case. `None` for non-letters.
#[must_use]
pub const fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Letter at `index` (taken modulo 26) in the requested case.
#[must_use]
pub const fn char_at(index: u8, case: Case) -> char {
    let upper = (b'A' + index % 26) as char;
    match case {
        Case::Upper => upper,
        Case::Lower => upper.to_ascii_lowercase(),
    }
}

/// Uppercases `text` and drops every whitespace character.
#[must_use]
pub fn strip_spaces(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Counts the letters of `text`, spaces excluded.
#[must_use]
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Checks that `text` holds only ASCII letters and whitespace.
///
/// # Errors
///
/// Returns [`CipherError::InvalidText`] naming the first offending character.
pub fn validate_text(text: &str) -> Result<()> {
    match text
        .chars()
        .find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
    {
        Some(c) => Err(CipherError::InvalidText(format!(
            "only letters and spaces are allowed, found {c:?}"
        ))),
        None => Ok(()),
    }
}

/// Applies `f` to every letter of `text` while spaces pass through untouched.
///
/// `f` receives the letter's position in the key stream, the original
/// character and its alphabet index. The stream position only advances on
/// letters, so a repeating key is never consumed by a space.
pub fn map_preserving_spaces<F>(text: &str, mut f: F) -> String
where
    F: FnMut(usize, char, u8) -> char,
{
    let mut stream = 0;
    text.chars()
        .map(|c| match index_of(c) {
            Some(index) => {
                let out = f(stream, c, index);
                stream += 1;
                out
            }
            None => c,
        })
        .collect()
}
