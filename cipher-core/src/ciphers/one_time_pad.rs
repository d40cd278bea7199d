// File:    one_time_pad.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Letter One-Time Pad: modular addition of a pad as long as the text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet;
use crate::ciphers::{Direction, polyalphabetic};
use crate::error::{CipherError, Result};
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// `true` when `key` is letters (and spaces) and has exactly as many letters
/// as `text`.
#[must_use]
pub fn validate_key(key: &str, text: &str) -> bool {
    check_pad(key, text).is_ok()
}

/// Adds each pad letter to the matching text letter modulo 26.
///
/// # Errors
///
/// Fails when the pad length differs from the text length (spaces excluded),
/// when the pad holds non-letters, or on non-letter text.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Subtracts each pad letter from the matching text letter modulo 26.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

/// Returns the pad uppercased with spaces removed.
fn check_pad(key: &str, text: &str) -> Result<String> {
    if let Some(c) = key
        .chars()
        .find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
    {
        return Err(CipherError::InvalidKey(format!(
            "pad may only contain letters, found {c:?}"
        )));
    }
    let pad = alphabet::strip_spaces(key);
    let expected = alphabet::letter_count(text);
    if pad.len() != expected {
        return Err(CipherError::KeyLengthMismatch {
            expected,
            actual: pad.len(),
        });
    }
    Ok(pad)
}

/// The single One-Time Pad computation path.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn transform<R: Recorder>(
    text: &str,
    key: &str,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    alphabet::validate_text(text)?;
    let pad = check_pad(key, text)?;
    debug!("one-time pad {direction} of {} characters", text.len());

    recorder.record(|| {
        Step::new(
            format!("Pad {pad} has one letter per letter of the text"),
            StepData::Key { key: pad.clone() },
        )
    });
    Ok(polyalphabetic::apply_key_stream(
        text, &pad, direction, recorder,
    ))
}
