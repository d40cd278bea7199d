// File:    monoalphabetic.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Monoalphabetic substitution over a 26-letter permutation key.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet::{self, ALPHABET, Case, LETTER_COUNT};
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// `true` when `key` is exactly 26 distinct letters (case-insensitive).
#[must_use]
pub fn validate_key(key: &str) -> bool {
    substitution_table(key).is_ok()
}

/// Replaces each letter by the key letter at the same alphabet position.
/// Output is uppercase; spaces are kept.
///
/// # Errors
///
/// Fails on an invalid key or on non-letter characters.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Inverse of [`encrypt`].
///
/// # Errors
///
/// Fails on an invalid key or on non-letter characters.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

/// Forward table: alphabet index to key index.
fn substitution_table(key: &str) -> Result<[u8; LETTER_COUNT]> {
    let indices = key
        .chars()
        .map(|c| {
            alphabet::index_of(c).ok_or_else(|| {
                CipherError::InvalidKey(format!("substitution key may only contain letters, found {c:?}"))
            })
        })
        .collect::<Result<Vec<u8>>>()?;
    if indices.len() != LETTER_COUNT {
        return Err(CipherError::InvalidKey(format!(
            "substitution key must have {LETTER_COUNT} letters, got {}",
            indices.len()
        )));
    }
    let mut seen = [false; LETTER_COUNT];
    let mut table = [0u8; LETTER_COUNT];
    for (slot, index) in table.iter_mut().zip(indices) {
        if seen[usize::from(index)] {
            return Err(CipherError::InvalidKey(format!(
                "substitution key repeats the letter {}",
                alphabet::char_at(index, Case::Upper)
            )));
        }
        seen[usize::from(index)] = true;
        *slot = index;
    }
    Ok(table)
}

/// The single monoalphabetic computation path.
///
/// # Errors
///
/// Fails on an invalid key or on non-letter characters.
pub fn transform<R: Recorder>(
    text: &str,
    key: &str,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    let forward = substitution_table(key)?;
    alphabet::validate_text(text)?;
    debug!("monoalphabetic {direction} of {} characters", text.len());

    let mut inverse = [0u8; LETTER_COUNT];
    for (plain, &cipher) in forward.iter().enumerate() {
        inverse[usize::from(cipher)] = plain as u8;
    }
    let table = match direction {
        Direction::Encrypt => forward,
        Direction::Decrypt => inverse,
    };

    recorder.record(|| {
        Step::new(
            format!("Standard alphabet {ALPHABET} maps onto substitution key"),
            StepData::Key {
                key: key.to_ascii_uppercase(),
            },
        )
    });

    let result = alphabet::map_preserving_spaces(text, |position, input, input_index| {
        let output_index = table[usize::from(input_index)];
        let output = alphabet::char_at(output_index, Case::Upper);
        recorder.record(|| {
            let description = match direction {
                Direction::Encrypt => format!(
                    "'{input}' is at position {input_index} in the alphabet -> key letter '{output}'"
                ),
                Direction::Decrypt => format!(
                    "'{input}' is at position {output_index} in the key -> alphabet letter '{output}'"
                ),
            };
            Step::new(
                description,
                StepData::Substitution {
                    position,
                    input,
                    input_index,
                    key: None,
                    shift: None,
                    output_index,
                    output,
                },
            )
        });
        output
    });

    recorder.record(|| Step::result(&result));
    Ok(result)
}
