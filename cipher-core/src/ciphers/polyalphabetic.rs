// File:    polyalphabetic.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Vigenère cipher and the key-stream routine it shares with the One-Time Pad.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet::{self, Case};
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::modular;
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// `true` for a non-empty keyword made only of letters.
#[must_use]
pub fn validate_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic())
}

/// Vigenère encryption. Output is uppercase; spaces are kept and do not
/// consume keyword letters.
///
/// # Errors
///
/// Fails on an invalid keyword or on non-letter characters.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Vigenère decryption.
///
/// # Errors
///
/// Fails on an invalid keyword or on non-letter characters.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

/// The single Vigenère computation path.
///
/// # Errors
///
/// Fails on an invalid keyword or on non-letter characters.
pub fn transform<R: Recorder>(
    text: &str,
    key: &str,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    if !validate_key(key) {
        return Err(CipherError::InvalidKey(
            "keyword must be a non-empty sequence of letters".into(),
        ));
    }
    alphabet::validate_text(text)?;
    debug!("polyalphabetic {direction} of {} characters", text.len());

    let keyword = key.to_ascii_uppercase();
    recorder.record(|| {
        Step::new(
            format!("Keyword {keyword} repeats over the letters of the text"),
            StepData::Key {
                key: keyword.clone(),
            },
        )
    });
    Ok(apply_key_stream(text, &keyword, direction, recorder))
}

/// Adds (or subtracts) the key letters to the text letters modulo 26.
///
/// The key cycles over the letters of `text`; spaces pass through and do not
/// advance it. `key` must be non-empty uppercase letters and `text` must
/// already be validated.
pub(crate) fn apply_key_stream<R: Recorder>(
    text: &str,
    key: &str,
    direction: Direction,
    recorder: &mut R,
) -> String {
    let stream: Vec<(char, u8)> = key
        .chars()
        .filter_map(|c| alphabet::index_of(c).map(|index| (c, index)))
        .collect();

    let result = alphabet::map_preserving_spaces(text, |position, input, input_index| {
        let (key_char, key_index) = stream[position % stream.len()];
        let shift = direction.signed(i64::from(key_index));
        let output_index = modular::shift(input_index, shift);
        let output = alphabet::char_at(output_index, Case::Upper);
        recorder.record(|| {
            Step::new(
                format!(
                    "'{input}' ({input_index}) {} '{key_char}' ({key_index}) = {output_index} (mod 26) -> '{output}'",
                    if shift < 0 { '-' } else { '+' }
                ),
                StepData::Substitution {
                    position,
                    input,
                    input_index,
                    key: Some(key_char),
                    shift: Some(shift),
                    output_index,
                    output,
                },
            )
        });
        output
    });

    recorder.record(|| Step::result(&result));
    result
}
