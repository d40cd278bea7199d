// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The main library crate for cipher-core, the classical cipher transform engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! Deterministic encode/decode for eight classical ciphers (Caesar,
//! Monoalphabetic, Vigenère, Playfair, Hill, Rail Fence, Row-Column
//! Transposition and a letter One-Time Pad), the modular matrix arithmetic
//! behind the Hill cipher, and step traces that show how each result was
//! derived.
//!
//! ```
//! use cipher_core::ciphers::caesar;
//!
//! assert_eq!(caesar::encrypt("HELLO", 3).unwrap(), "KHOOR");
//! ```

/// Alphabet constants and letter/index conversion.
pub mod alphabet;
/// The cipher transforms.
pub mod ciphers;
/// Request/outcome boundary and cipher dispatch.
pub mod engine;
/// Error taxonomy.
pub mod error;
/// Typed keys resolved from raw input.
pub mod key;
/// Random key generation.
pub mod keygen;
/// Matrices over Z/26Z.
pub mod matrix;
/// Arithmetic modulo 26.
pub mod modular;
/// Step traces.
pub mod trace;

pub use ciphers::{CipherKind, Direction};
pub use engine::{Failure, Outcome, Request};
pub use error::{CipherError, ErrorCategory, ErrorKind, Result};
pub use key::{Key, KeyInput, Params};
pub use matrix::Matrix;
pub use trace::{Step, StepData, StepTrace, Traced};
