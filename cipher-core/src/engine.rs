// File:    engine.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Request/outcome boundary that dispatches to the cipher modules.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The engine boundary.
//!
//! A [`Request`] names a cipher, a direction, the text and the raw key. The
//! engine resolves the key, runs the transform with a step trace and returns
//! either an [`Outcome`] or a [`Failure`]. Every type here is serde-ready so
//! front ends can exchange them as JSON.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ciphers::{
    CipherKind, Direction, caesar, hill, monoalphabetic, one_time_pad, playfair, polyalphabetic,
    rail_fence, transposition,
};
use crate::error::{CipherError, ErrorKind, Result};
use crate::key::{Key, KeyInput, Params};
use crate::trace::{self, NoTrace, Recorder, StepTrace, Traced};

/// One encrypt or decrypt call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Cipher to run.
    pub cipher: CipherKind,
    /// Encrypt or decrypt.
    pub direction: Direction,
    /// Input text: letters and spaces.
    pub text: String,
    /// Key as supplied by the caller.
    pub key: KeyInput,
    /// Cipher-specific extras.
    #[serde(default)]
    pub params: Params,
}

/// A successful transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Output text.
    pub result: String,
    /// How the output was derived.
    pub trace: StepTrace,
}

impl From<Traced> for Outcome {
    fn from(traced: Traced) -> Self {
        Self {
            result: traced.result,
            trace: traced.trace,
        }
    }
}

/// A rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// Machine-readable reason.
    pub error_kind: ErrorKind,
    /// Human-readable reason.
    pub message: String,
}

impl From<CipherError> for Failure {
    fn from(err: CipherError) -> Self {
        Self {
            error_kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Resolves the key, runs the transform and records its trace.
///
/// # Errors
///
/// Returns a [`Failure`] for any key or text the cipher rejects. No partial
/// result is ever produced.
pub fn run(request: &Request) -> std::result::Result<Outcome, Failure> {
    let key = Key::parse(request.cipher, &request.key, &request.params)?;
    let traced = transform_traced(request.cipher, request.direction, &request.text, &key)?;
    Ok(traced.into())
}

/// Runs `cipher` without a trace.
///
/// # Errors
///
/// Fails when `key` does not belong to `cipher` or the transform rejects the
/// text.
pub fn transform(cipher: CipherKind, direction: Direction, text: &str, key: &Key) -> Result<String> {
    dispatch(cipher, direction, text, key, &mut NoTrace)
}

/// Runs `cipher` and keeps every step.
///
/// # Errors
///
/// Same as [`transform`].
pub fn transform_traced(
    cipher: CipherKind,
    direction: Direction,
    text: &str,
    key: &Key,
) -> Result<Traced> {
    trace::capture(|recorder| dispatch(cipher, direction, text, key, recorder))
}

fn dispatch<R: Recorder>(
    cipher: CipherKind,
    direction: Direction,
    text: &str,
    key: &Key,
    recorder: &mut R,
) -> Result<String> {
    debug!("dispatching {cipher} {direction}");
    match (cipher, key) {
        (CipherKind::Caesar, Key::Shift(shift)) => {
            caesar::transform(text, *shift, direction, recorder)
        }
        (CipherKind::Monoalphabetic, Key::Substitution(alphabet)) => {
            monoalphabetic::transform(text, alphabet, direction, recorder)
        }
        (CipherKind::Polyalphabetic, Key::Keyword(keyword)) => {
            polyalphabetic::transform(text, keyword, direction, recorder)
        }
        (CipherKind::Playfair, Key::Keyword(keyword)) => {
            playfair::transform(text, keyword, direction, recorder)
        }
        (CipherKind::Hill, Key::Matrix(matrix)) => hill::transform(text, matrix, direction, recorder),
        (CipherKind::RailFence, Key::Rails(rails)) => {
            rail_fence::transform(text, *rails, direction, recorder)
        }
        (CipherKind::RowColumn, Key::Transposition(columns)) => {
            transposition::transform(text, columns, direction, recorder)
        }
        (CipherKind::OneTimePad, Key::Pad(pad)) => {
            one_time_pad::transform(text, pad, direction, recorder)
        }
        (cipher, key) => Err(CipherError::InvalidKey(format!(
            "{cipher} cannot use a {} key",
            key_shape(key)
        ))),
    }
}

const fn key_shape(key: &Key) -> &'static str {
    match key {
        Key::Shift(_) => "shift",
        Key::Substitution(_) => "substitution",
        Key::Keyword(_) => "keyword",
        Key::Matrix(_) => "matrix",
        Key::Pad(_) => "pad",
        Key::Rails(_) => "rail count",
        Key::Transposition(_) => "transposition",
    }
}

/// `true` when `key` is acceptable for `cipher`.
///
/// `text` matters only where the key depends on it: the One-Time Pad length
/// and the Rail Fence rail count.
#[must_use]
pub fn validate_key(cipher: CipherKind, key: &KeyInput, params: &Params, text: &str) -> bool {
    match Key::parse(cipher, key, params) {
        Ok(Key::Pad(pad)) => one_time_pad::validate_key(&pad, text),
        Ok(Key::Rails(rails)) => {
            i64::try_from(rails).is_ok_and(|rails| rail_fence::validate_key(rails, text))
        }
        Ok(_) => true,
        Err(_) => false,
    }
}
