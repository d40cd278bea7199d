// File:    key.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Resolves a raw key into the typed key each cipher expects.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Key resolution.
//!
//! Callers hand over a key as a number or a string. [`Key::parse`] checks
//! its shape once, for the chosen cipher, and returns a tagged value the
//! transforms consume without re-inspecting it.

use serde::{Deserialize, Serialize};

use crate::ciphers::transposition::TranspositionKey;
use crate::ciphers::{CipherKind, caesar, monoalphabetic, playfair, polyalphabetic, rail_fence};
use crate::error::{CipherError, Result};
use crate::matrix::Matrix;

/// A key as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyInput {
    /// Integer key (Caesar shift, rail count).
    Number(i64),
    /// Any textual key.
    Text(String),
}

impl KeyInput {
    /// The key as text; numbers are rendered in decimal.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    fn as_integer(&self, what: &str) -> Result<i64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(s) => s.trim().parse().map_err(|_| {
                CipherError::InvalidKey(format!("{what} must be an integer, got {s:?}"))
            }),
        }
    }
}

impl From<i64> for KeyInput {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for KeyInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Extra parameters some ciphers take alongside the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Hill matrix side (2 or 3). Inferred from the entry count when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Rail Fence rail count. Overrides the key when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rails: Option<usize>,
}

/// A validated key, tagged by the shape its cipher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Caesar shift in 1–25.
    Shift(i64),
    /// 26-letter substitution alphabet.
    Substitution(String),
    /// Letter keyword (Vigenère, Playfair).
    Keyword(String),
    /// Invertible Hill key matrix.
    Matrix(Matrix),
    /// One-Time Pad letters. Length is checked against the text later.
    Pad(String),
    /// Rail Fence rail count in 2–10.
    Rails(usize),
    /// Row-Column column key.
    Transposition(TranspositionKey),
}

impl Key {
    /// Validates `input` for `cipher` and returns the typed key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] when the key has the wrong shape,
    /// or [`CipherError::NonInvertibleMatrix`] for a Hill matrix without an
    /// inverse modulo 26.
    pub fn parse(cipher: CipherKind, input: &KeyInput, params: &Params) -> Result<Self> {
        match cipher {
            CipherKind::Caesar => {
                let shift = input.as_integer("shift")?;
                if !caesar::validate_key(shift) {
                    return Err(CipherError::InvalidKey(format!(
                        "shift must be between {} and {}, got {shift}",
                        caesar::MIN_SHIFT,
                        caesar::MAX_SHIFT
                    )));
                }
                Ok(Self::Shift(shift))
            }
            CipherKind::Monoalphabetic => {
                let key = input.as_text().trim().to_ascii_uppercase();
                if !monoalphabetic::validate_key(&key) {
                    return Err(CipherError::InvalidKey(
                        "substitution key must be 26 distinct letters".into(),
                    ));
                }
                Ok(Self::Substitution(key))
            }
            CipherKind::Polyalphabetic | CipherKind::Playfair => {
                let key = input.as_text().trim().to_ascii_uppercase();
                let valid = match cipher {
                    CipherKind::Playfair => playfair::validate_key(&key),
                    _ => polyalphabetic::validate_key(&key),
                };
                if !valid {
                    return Err(CipherError::InvalidKey(
                        "keyword must be a non-empty sequence of letters".into(),
                    ));
                }
                Ok(Self::Keyword(key))
            }
            CipherKind::Hill => {
                let text = input.as_text();
                let size = match params.size {
                    Some(size) => size,
                    None => infer_matrix_size(&text)?,
                };
                let matrix = Matrix::parse(&text, size)?;
                if !matrix.is_invertible_mod26() {
                    return Err(CipherError::NonInvertibleMatrix {
                        determinant: matrix.determinant_mod26(),
                    });
                }
                Ok(Self::Matrix(matrix))
            }
            CipherKind::RailFence => {
                let rails = match params.rails {
                    Some(rails) => rails,
                    None => {
                        let rails = input.as_integer("rail count")?;
                        usize::try_from(rails).map_err(|_| {
                            CipherError::InvalidKey(format!("rail count must be positive, got {rails}"))
                        })?
                    }
                };
                if !(rail_fence::MIN_RAILS..=rail_fence::MAX_RAILS).contains(&rails) {
                    return Err(CipherError::InvalidKey(format!(
                        "number of rails must be between {} and {}, got {rails}",
                        rail_fence::MIN_RAILS,
                        rail_fence::MAX_RAILS
                    )));
                }
                Ok(Self::Rails(rails))
            }
            CipherKind::RowColumn => {
                let key = TranspositionKey::parse(&input.as_text())?;
                Ok(Self::Transposition(key))
            }
            CipherKind::OneTimePad => {
                let key = input.as_text();
                if let Some(c) = key
                    .chars()
                    .find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace())
                {
                    return Err(CipherError::InvalidKey(format!(
                        "pad may only contain letters, found {c:?}"
                    )));
                }
                Ok(Self::Pad(key.to_ascii_uppercase()))
            }
        }
    }
}

/// Side of a Hill key from its entry count: 4 entries make 2×2, 9 make 3×3.
fn infer_matrix_size(key: &str) -> Result<usize> {
    let count = key
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .count();
    match count {
        4 => Ok(2),
        9 => Ok(3),
        _ => Err(CipherError::InvalidKey(format!(
            "Hill key needs 4 or 9 numbers, got {count}"
        ))),
    }
}
