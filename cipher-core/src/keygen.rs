// File:    keygen.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Random key generation for the Hill, Monoalphabetic and One-Time Pad ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Random keys.
//!
//! Every generator takes the random source as a parameter so callers can use
//! `rand::rng()` in production and a seeded `StdRng` in tests.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::alphabet::{self, ALPHABET, Case, LETTER_COUNT};
use crate::error::{CipherError, Result};
use crate::matrix::{MAX_ENTRY, Matrix, SUPPORTED_SIZES};

/// Random matrices tried before falling back to a known-good key.
pub const HILL_MAX_ATTEMPTS: usize = 100;

/// Invertible 2×2 key used when random draws keep failing.
pub const HILL_FALLBACK_2X2: [i64; 4] = [3, 3, 2, 5];

/// Invertible 3×3 key used when random draws keep failing.
pub const HILL_FALLBACK_3X3: [i64; 9] = [6, 24, 1, 13, 16, 10, 20, 17, 15];

/// A random Hill key of side `size` that is invertible modulo 26.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `size` is not 2 or 3.
pub fn hill_matrix<R>(size: usize, rng: &mut R) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    hill_matrix_with_attempts(size, HILL_MAX_ATTEMPTS, rng)
}

/// Like [`hill_matrix`], with an explicit attempt budget. After `attempts`
/// singular draws the fixed fallback key for `size` is returned.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `size` is not 2 or 3.
pub fn hill_matrix_with_attempts<R>(size: usize, attempts: usize, rng: &mut R) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    if !SUPPORTED_SIZES.contains(&size) {
        return Err(CipherError::InvalidKey(format!(
            "matrix size must be 2 or 3, got {size}"
        )));
    }
    for attempt in 1..=attempts {
        let rows: Vec<Vec<i64>> = (0..size)
            .map(|_| (0..size).map(|_| rng.random_range(0..=MAX_ENTRY)).collect())
            .collect();
        let matrix = Matrix::from_rows(&rows)?;
        if matrix.is_invertible_mod26() {
            debug!("invertible {size}x{size} Hill key found after {attempt} attempt(s)");
            return Ok(matrix);
        }
    }

    warn!("no invertible {size}x{size} matrix in {attempts} attempts, using the fallback key");
    let cells: &[i64] = if size == 2 {
        &HILL_FALLBACK_2X2
    } else {
        &HILL_FALLBACK_3X3
    };
    Matrix::from_rows(&cells.chunks(size).map(<[i64]>::to_vec).collect::<Vec<_>>())
}

/// A random permutation of the 26 letters, usable as a monoalphabetic key.
pub fn substitution_alphabet<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let mut letters: Vec<char> = ALPHABET.chars().collect();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Uniformly random uppercase letters, one for every letter of `text`.
/// Spaces in `text` do not receive a pad letter.
pub fn one_time_pad<R>(text: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let length = alphabet::letter_count(text);
    debug!("generating a {length}-letter pad");
    (0..length)
        .map(|_| {
            // LETTER_COUNT fits in u8.
            #[allow(clippy::cast_possible_truncation)]
            let index = rng.random_range(0..LETTER_COUNT) as u8;
            alphabet::char_at(index, Case::Upper)
        })
        .collect()
}
