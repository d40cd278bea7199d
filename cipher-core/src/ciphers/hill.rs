// File:    hill.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Hill cipher: block-wise matrix multiplication modulo 26.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet::{self, Case, FILLER};
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::matrix::Matrix;
use crate::modular::{self, MODULUS};
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// Alphabet index of the padding letter `X`.
pub const PADDING: i64 = 23;

/// `true` when `key` parses as a `size`×`size` matrix of 0–25 entries whose
/// determinant is coprime with 26.
#[must_use]
pub fn validate_key(key: &str, size: usize) -> bool {
    Matrix::parse(key, size).is_ok_and(|matrix| matrix.is_invertible_mod26())
}

/// Encrypts `text` in blocks of `key.size()` letters, padding with `X`.
///
/// # Errors
///
/// Fails with [`CipherError::NonInvertibleMatrix`] before touching the text
/// if `key` has no inverse modulo 26, or on non-letter characters.
pub fn encrypt(text: &str, key: &Matrix) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Decrypts `text` with the inverse of `key` modulo 26. Padding is kept.
///
/// # Errors
///
/// Fails if `key` has no inverse, on non-letter characters, or when the
/// number of letters is not a multiple of the block size.
pub fn decrypt(text: &str, key: &Matrix) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

/// Letters of `text` as alphabet indices, spaces dropped.
fn text_to_numbers(text: &str) -> Vec<i64> {
    text.chars()
        .filter_map(alphabet::index_of)
        .map(i64::from)
        .collect()
}

fn numbers_to_text(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|&n| alphabet::char_at(modular::mod_normalize(n, MODULUS) as u8, Case::Upper))
        .collect()
}

/// The single Hill computation path.
///
/// # Errors
///
/// See [`encrypt`] and [`decrypt`].
pub fn transform<R: Recorder>(
    text: &str,
    key: &Matrix,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    let inverse = key
        .inverse_mod26()
        .ok_or_else(|| CipherError::NonInvertibleMatrix {
            determinant: key.determinant_mod26(),
        })?;
    alphabet::validate_text(text)?;

    let size = key.size();
    let mut numbers = text_to_numbers(text);
    match direction {
        Direction::Encrypt => {
            while numbers.len() % size != 0 {
                numbers.push(PADDING);
            }
        }
        Direction::Decrypt => {
            if numbers.len() % size != 0 {
                return Err(CipherError::InvalidText(format!(
                    "ciphertext length {} is not a multiple of the block size {size}",
                    numbers.len()
                )));
            }
        }
    }
    debug!("hill {direction} of {} letters with a {size}x{size} key", numbers.len());

    recorder.record(|| {
        Step::new(
            format!("Key matrix ({size}x{size})"),
            StepData::Matrix { rows: key.rows() },
        )
    });
    let working = match direction {
        Direction::Encrypt => key,
        Direction::Decrypt => {
            recorder.record(|| {
                let determinant = key.determinant();
                let reduced = key.determinant_mod26();
                let inverse_det = modular::mod_inverse(reduced, MODULUS);
                Step::new(
                    format!(
                        "det = {determinant}, {reduced} (mod 26), inverse {}",
                        inverse_det.map_or_else(|| "none".to_owned(), |v| v.to_string())
                    ),
                    StepData::Determinant {
                        determinant,
                        reduced,
                        inverse: inverse_det,
                    },
                )
            });
            recorder.record(|| {
                Step::new(
                    "Inverse key matrix (mod 26)",
                    StepData::Matrix {
                        rows: inverse.rows(),
                    },
                )
            });
            &inverse
        }
    };
    recorder.record(|| {
        Step::new(
            format!(
                "Text as numbers (A=0 ... Z=25, padded with {FILLER}={PADDING})"
            ),
            StepData::Numbers {
                values: numbers.clone(),
            },
        )
    });

    let mut output = Vec::with_capacity(numbers.len());
    for (index, block) in numbers.chunks(size).enumerate() {
        let product = working.mul_vector_mod26(block);
        recorder.record(|| {
            let letters = numbers_to_text(&product);
            Step::new(
                format!("Block {}: {block:?} x matrix = {product:?} -> {letters}", index + 1),
                StepData::Block {
                    index,
                    input: block.to_vec(),
                    output: product.clone(),
                    text: letters,
                },
            )
        });
        output.extend(product);
    }

    let result = numbers_to_text(&output);
    recorder.record(|| Step::result(&result));
    Ok(result)
}
