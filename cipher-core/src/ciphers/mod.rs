// File:    mod.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The eight classical cipher transforms and their shared vocabulary.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Per-cipher transform modules.
//!
//! Every module exposes `validate_key`, `encrypt`, `decrypt`, and a generic
//! `transform` that takes a [`Recorder`](crate::trace::Recorder). `encrypt`
//! and `decrypt` are thin wrappers over `transform` with tracing disabled.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caesar shift cipher.
pub mod caesar;
/// Hill matrix cipher.
pub mod hill;
/// Monoalphabetic substitution.
pub mod monoalphabetic;
/// One-Time Pad over letters.
pub mod one_time_pad;
/// Playfair digraph cipher.
pub mod playfair;
/// Vigenère cipher.
pub mod polyalphabetic;
/// Rail Fence zigzag transposition.
pub mod rail_fence;
/// Row-Column (columnar) transposition.
pub mod transposition;

/// Whether a transform encrypts or decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// `amount` for encryption, `-amount` for decryption.
    #[must_use]
    pub const fn signed(self, amount: i64) -> i64 {
        match self {
            Self::Encrypt => amount,
            Self::Decrypt => -amount,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encryption"),
            Self::Decrypt => write!(f, "decryption"),
        }
    }
}

/// The supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherKind {
    /// [`caesar`]
    Caesar,
    /// [`monoalphabetic`]
    Monoalphabetic,
    /// [`polyalphabetic`]
    Polyalphabetic,
    /// [`playfair`]
    Playfair,
    /// [`hill`]
    Hill,
    /// [`rail_fence`]
    RailFence,
    /// [`transposition`]
    RowColumn,
    /// [`one_time_pad`]
    OneTimePad,
}

impl CipherKind {
    /// Every cipher, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Caesar,
        Self::Monoalphabetic,
        Self::Polyalphabetic,
        Self::Playfair,
        Self::Hill,
        Self::RailFence,
        Self::RowColumn,
        Self::OneTimePad,
    ];

    /// Stable identifier, matching the serde representation.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Monoalphabetic => "monoalphabetic",
            Self::Polyalphabetic => "polyalphabetic",
            Self::Playfair => "playfair",
            Self::Hill => "hill",
            Self::RailFence => "rail-fence",
            Self::RowColumn => "row-column",
            Self::OneTimePad => "one-time-pad",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Caesar => "Caesar",
            Self::Monoalphabetic => "Monoalphabetic",
            Self::Polyalphabetic => "Polyalphabetic (Vigenère)",
            Self::Playfair => "Playfair",
            Self::Hill => "Hill",
            Self::RailFence => "Rail Fence",
            Self::RowColumn => "Row-Column Transposition",
            Self::OneTimePad => "One-Time Pad",
        };
        f.write_str(name)
    }
}
