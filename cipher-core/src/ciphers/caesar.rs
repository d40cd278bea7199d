// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Caesar shift cipher.
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

/// Smallest accepted shift.
pub const MIN_SHIFT: i64 = 1;
/// Largest accepted shift.
pub const MAX_SHIFT: i64 = 25;

/// `true` for shifts in 1–25.
#[must_use]
pub fn validate_key(shift: i64) -> bool {
    (MIN_SHIFT..=MAX_SHIFT).contains(&shift)
}

/// Shifts every letter forward by `shift`, keeping case and spaces.
///
/// # Errors
///
/// Fails on a shift outside 1–25 or on non-letter characters.
pub fn encrypt(text: &str, shift: i64) -> Result<String> {
    transform(text, shift, Direction::Encrypt, &mut NoTrace)
}

/// Shifts every letter back by `shift`, keeping case and spaces.
///
/// # Errors
///
/// Fails on a shift outside 1–25 or on non-letter characters.
pub fn decrypt(text: &str, shift: i64) -> Result<String> {
    transform(text, shift, Direction::Decrypt, &mut NoTrace)
}

/// The single Caesar computation path.
///
/// # Errors
///
/// Fails on a shift outside 1–25 or on non-letter characters.
pub fn transform<R: Recorder>(
    text: &str,
    shift: i64,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    if !validate_key(shift) {
        return Err(CipherError::InvalidKey(format!(
            "shift must be between {MIN_SHIFT} and {MAX_SHIFT}, got {shift}"
        )));
    }
    alphabet::validate_text(text)?;
    debug!("caesar {direction} of {} characters", text.len());

    let offset = direction.signed(shift);
    recorder.record(|| {
        Step::new(
            format!("Starting {direction} with shift value {shift}"),
            StepData::Key {
                key: shift.to_string(),
            },
        )
    });

    let result = alphabet::map_preserving_spaces(text, |position, input, input_index| {
        let output_index = modular::shift(input_index, offset);
        let output = alphabet::char_at(output_index, Case::of(input));
        recorder.record(|| {
            Step::new(
                format!(
                    "'{input}' ({input_index}) {} {shift} = {output_index} (mod 26) -> '{output}'",
                    if offset < 0 { '-' } else { '+' }
                ),
                StepData::Substitution {
                    position,
                    input,
                    input_index,
                    key: None,
                    shift: Some(offset),
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
