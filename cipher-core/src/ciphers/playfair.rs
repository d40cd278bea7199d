// File:    playfair.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Playfair digraph cipher over a 5x5 I/J-merged key square.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet::{self, FILLER, PLAYFAIR_ALPHABET};
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::trace::{DigraphRule, NoTrace, Recorder, Step, StepData};

/// Side of the key square.
pub const SIDE: usize = 5;

/// The 5×5 key square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    cells: [char; SIDE * SIDE],
}

impl Square {
    /// Builds the square from the deduplicated keyword (J read as I)
    /// followed by the rest of the 25-letter alphabet.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        let mut cells = [FILLER; SIDE * SIDE];
        let letters = keyword
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(fold_j)
            .chain(PLAYFAIR_ALPHABET.chars());
        let mut filled = 0;
        for c in letters {
            if filled == cells.len() {
                break;
            }
            if !cells[..filled].contains(&c) {
                cells[filled] = c;
                filled += 1;
            }
        }
        Self { cells }
    }

    /// `(row, col)` of `c`, with J looked up as I.
    #[must_use]
    pub fn position(&self, c: char) -> Option<(usize, usize)> {
        let c = fold_j(c);
        self.cells
            .iter()
            .position(|&cell| cell == c)
            .map(|index| (index / SIDE, index % SIDE))
    }

    /// Letter at `row`, `col`, both taken modulo 5.
    #[must_use]
    pub const fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % SIDE) * SIDE + col % SIDE]
    }

    /// The square as five strings.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(SIDE)
            .map(|row| row.iter().collect())
            .collect()
    }
}

const fn fold_j(c: char) -> char {
    match c.to_ascii_uppercase() {
        'J' => 'I',
        other => other,
    }
}

/// `true` for a non-empty keyword made only of letters.
#[must_use]
pub fn validate_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic())
}

/// Canonical plaintext: uppercase, spaces dropped, J folded to I, an `X`
/// inserted between every pair of identical adjacent letters, and a trailing
/// `X` when the length is odd.
#[must_use]
pub fn prepare_text(text: &str) -> String {
    let letters: Vec<char> = alphabet::strip_spaces(text).chars().map(fold_j).collect();
    let mut prepared = String::with_capacity(letters.len() * 2);
    for (i, &c) in letters.iter().enumerate() {
        prepared.push(c);
        if letters.get(i + 1) == Some(&c) {
            prepared.push(FILLER);
        }
    }
    if prepared.len() % 2 != 0 {
        prepared.push(FILLER);
    }
    prepared
}

/// Playfair encryption of [`prepare_text`]`(text)`.
///
/// # Errors
///
/// Fails on an invalid keyword or on non-letter characters.
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Playfair decryption. Filler letters are left in place.
///
/// # Errors
///
/// Fails on an invalid keyword, non-letter characters, or an odd number of
/// letters.
pub fn decrypt(text: &str, key: &str) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

/// Applies the row, column or rectangle rule to one digraph.
///
/// Rows shift right and columns shift down when encrypting, the opposite when
/// decrypting. The rectangle swap is its own inverse.
fn apply_rule(
    square: &Square,
    a: (usize, usize),
    b: (usize, usize),
    direction: Direction,
) -> (DigraphRule, [char; 2]) {
    let step = match direction {
        Direction::Encrypt => 1,
        Direction::Decrypt => SIDE - 1,
    };
    if a.0 == b.0 {
        (
            DigraphRule::SameRow,
            [square.at(a.0, a.1 + step), square.at(b.0, b.1 + step)],
        )
    } else if a.1 == b.1 {
        (
            DigraphRule::SameColumn,
            [square.at(a.0 + step, a.1), square.at(b.0 + step, b.1)],
        )
    } else {
        (
            DigraphRule::Rectangle,
            [square.at(a.0, b.1), square.at(b.0, a.1)],
        )
    }
}

/// The single Playfair computation path.
///
/// # Errors
///
/// See [`encrypt`] and [`decrypt`].
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
    let prepared = match direction {
        Direction::Encrypt => prepare_text(text),
        Direction::Decrypt => {
            let letters: String = alphabet::strip_spaces(text).chars().map(fold_j).collect();
            if letters.len() % 2 != 0 {
                return Err(CipherError::InvalidText(format!(
                    "Playfair ciphertext must have an even number of letters, got {}",
                    letters.len()
                )));
            }
            letters
        }
    };
    debug!("playfair {direction} of {} letters", prepared.len());

    let square = Square::from_keyword(key);
    recorder.record(|| {
        Step::new(
            "Building the 5x5 Playfair square",
            StepData::Square {
                rows: square.rows(),
            },
        )
    });

    let pairs: Vec<[char; 2]> = prepared
        .as_bytes()
        .chunks(2)
        .map(|pair| [char::from(pair[0]), char::from(pair[1])])
        .collect();
    recorder.record(|| {
        Step::new(
            "Text split into pairs",
            StepData::Digraphs {
                pairs: pairs.iter().map(|pair| pair.iter().collect()).collect(),
            },
        )
    });

    let mut result = String::with_capacity(prepared.len());
    for (index, &[first, second]) in pairs.iter().enumerate() {
        let (Some(a), Some(b)) = (square.position(first), square.position(second)) else {
            return Err(CipherError::InvalidText(format!(
                "pair {first}{second} is not in the Playfair square"
            )));
        };
        let (rule, output) = apply_rule(&square, a, b, direction);
        result.extend(output);
        recorder.record(|| {
            let rule_text = match (rule, direction) {
                (DigraphRule::SameRow, Direction::Encrypt) => "same row: shift right",
                (DigraphRule::SameRow, Direction::Decrypt) => "same row: shift left",
                (DigraphRule::SameColumn, Direction::Encrypt) => "same column: shift down",
                (DigraphRule::SameColumn, Direction::Decrypt) => "same column: shift up",
                (DigraphRule::Rectangle, _) => "rectangle: swap columns",
            };
            Step::new(
                format!(
                    "Pair {}: '{first}' ({},{}) and '{second}' ({},{}) -> {rule_text} -> \"{}{}\"",
                    index + 1,
                    a.0,
                    a.1,
                    b.0,
                    b.1,
                    output[0],
                    output[1]
                ),
                StepData::Digraph {
                    index,
                    input: [first, second],
                    positions: [a, b],
                    rule,
                    output,
                },
            )
        });
    }

    recorder.record(|| Step::result(&result));
    Ok(result)
}
