// File:    error.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Structured error taxonomy shared by every cipher transform.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Errors raised by key validation, the matrix kernel and the transforms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Machine-readable failure kind exposed at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The key has the wrong shape, range or character set.
    InvalidKeyShape,
    /// The key length does not match the text length.
    KeyLengthMismatch,
    /// The Hill matrix has no inverse modulo 26.
    NonInvertibleMatrix,
    /// The text contains characters outside the supported alphabet.
    CharacterSetViolation,
    /// The Rail Fence rail count is larger than the text.
    RailCountExceedsLength,
}

/// Broad error family, used by callers that only care about who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Wrong key shape, length or charset.
    KeyValidation,
    /// Non-invertible matrix or determinant not coprime with 26.
    Mathematical,
    /// Non-letter characters or malformed text.
    InputValidation,
}

/// Errors produced by the cipher engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key does not have the shape the cipher expects.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// One-Time Pad key length differs from the text length (spaces excluded).
    #[error("key length {actual} does not match text length {expected} (spaces excluded)")]
    KeyLengthMismatch {
        /// Number of letters in the text.
        expected: usize,
        /// Number of letters in the key.
        actual: usize,
    },

    /// The matrix determinant shares a factor with 26.
    #[error("matrix is not invertible mod 26 (determinant {determinant} is not coprime with 26)")]
    NonInvertibleMatrix {
        /// Determinant reduced modulo 26.
        determinant: i64,
    },

    /// The text breaks the letters-and-spaces invariant or a length rule.
    #[error("invalid text: {0}")]
    InvalidText(String),

    /// More rails than letters.
    #[error("rail count {rails} exceeds text length {length}")]
    RailCountExceedsLength {
        /// Requested number of rails.
        rails: usize,
        /// Number of letters in the text.
        length: usize,
    },
}

impl CipherError {
    /// Returns the boundary-level kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidKey(_) => ErrorKind::InvalidKeyShape,
            Self::KeyLengthMismatch { .. } => ErrorKind::KeyLengthMismatch,
            Self::NonInvertibleMatrix { .. } => ErrorKind::NonInvertibleMatrix,
            Self::InvalidText(_) => ErrorKind::CharacterSetViolation,
            Self::RailCountExceedsLength { .. } => ErrorKind::RailCountExceedsLength,
        }
    }

    /// Returns the taxonomy family of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidKey(_)
            | Self::KeyLengthMismatch { .. }
            | Self::RailCountExceedsLength { .. } => ErrorCategory::KeyValidation,
            Self::NonInvertibleMatrix { .. } => ErrorCategory::Mathematical,
            Self::InvalidText(_) => ErrorCategory::InputValidation,
        }
    }
}
