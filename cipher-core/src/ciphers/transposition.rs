// File:    transposition.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Row-Column transposition keyed by a keyword or a number sequence.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::{self, FILLER};
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// Marker for an empty grid cell in traces.
const EMPTY_CELL: char = '.';

/// Column key, resolved once from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TranspositionKey {
    /// Keyword; columns are read in alphabetical order of its letters.
    Alphabetic(String),
    /// Explicit sequence; columns are read in ascending numeric order.
    Numeric(Vec<u32>),
}

impl TranspositionKey {
    /// Parses a key. Anything made only of digits, whitespace and commas is
    /// numeric; anything made only of letters is alphabetic.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] for empty keys, mixed keys, or
    /// numbers that do not fit in `u32`.
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        let numeric_shape = key
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == ',');
        if numeric_shape && key.chars().any(|c| c.is_ascii_digit()) {
            let numbers = key
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<u32>().map_err(|e| {
                        CipherError::InvalidKey(format!("column number {part:?}: {e}"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            return Ok(Self::Numeric(numbers));
        }
        if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(Self::Alphabetic(key.to_ascii_uppercase()));
        }
        Err(CipherError::InvalidKey(
            "transposition key must be letters only or numbers separated by spaces or commas"
                .into(),
        ))
    }

    /// Number of grid columns.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Alphabetic(keyword) => keyword.len(),
            Self::Numeric(numbers) => numbers.len(),
        }
    }

    /// `true` for a key with no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column indices in read order. Ties keep their left-to-right order.
    #[must_use]
    pub fn column_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        match self {
            Self::Alphabetic(keyword) => {
                let symbols = keyword.as_bytes();
                order.sort_by_key(|&column| symbols[column]);
            }
            Self::Numeric(numbers) => order.sort_by_key(|&column| numbers[column]),
        }
        order
    }

    /// Column headings for display.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Alphabetic(keyword) => keyword.chars().map(String::from).collect(),
            Self::Numeric(numbers) => numbers.iter().map(ToString::to_string).collect(),
        }
    }
}

/// `true` when `key` parses as a non-empty [`TranspositionKey`].
#[must_use]
pub fn validate_key(key: &str) -> bool {
    TranspositionKey::parse(key).is_ok_and(|key| !key.is_empty())
}

/// Writes the letters row by row under the key, pads the last row with `X`,
/// and reads the columns in key order.
///
/// # Errors
///
/// Fails on an empty key or on non-letter characters.
pub fn encrypt(text: &str, key: &TranspositionKey) -> Result<String> {
    transform(text, key, Direction::Encrypt, &mut NoTrace)
}

/// Fills the columns in key order and reads the rows. Trailing `X` letters
/// are removed, including any that belonged to the plaintext.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(text: &str, key: &TranspositionKey) -> Result<String> {
    transform(text, key, Direction::Decrypt, &mut NoTrace)
}

fn render_rows(grid: &[Vec<Option<char>>]) -> Vec<String> {
    grid.iter()
        .map(|row| row.iter().map(|cell| cell.unwrap_or(EMPTY_CELL)).collect())
        .collect()
}

/// The single Row-Column computation path.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn transform<R: Recorder>(
    text: &str,
    key: &TranspositionKey,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey(
            "transposition key needs at least one column".into(),
        ));
    }
    alphabet::validate_text(text)?;
    let letters: Vec<char> = alphabet::strip_spaces(text).chars().collect();
    let width = key.len();
    let height = letters.len().div_ceil(width);
    debug!("row-column {direction} of {} letters in a {height}x{width} grid", letters.len());

    recorder.record(|| {
        Step::new(
            format!("Key {} gives {width} columns", key.labels().concat()),
            StepData::Key {
                key: key.labels().join(" "),
            },
        )
    });

    let order = key.column_order();
    let record_order = |recorder: &mut R| {
        recorder.record(|| {
            let labels = key.labels();
            Step::new(
                format!(
                    "Column order: {}",
                    order
                        .iter()
                        .map(|&column| labels[column].as_str())
                        .collect::<Vec<_>>()
                        .join(" -> ")
                ),
                StepData::ColumnOrder {
                    order: order.clone(),
                },
            )
        });
    };

    let result = match direction {
        Direction::Encrypt => {
            let mut cells = letters.iter().copied();
            let grid: Vec<Vec<Option<char>>> = (0..height)
                .map(|_| {
                    (0..width)
                        .map(|_| Some(cells.next().unwrap_or(FILLER)))
                        .collect()
                })
                .collect();
            recorder.record(|| {
                Step::new(
                    format!("Writing the text row by row into a {height}x{width} grid"),
                    StepData::Grid {
                        header: key.labels(),
                        rows: render_rows(&grid),
                    },
                )
            });
            record_order(&mut *recorder);

            order
                .iter()
                .flat_map(|&column| grid.iter().filter_map(move |row| row[column]))
                .collect::<String>()
        }
        Direction::Decrypt => {
            record_order(&mut *recorder);
            let mut grid = vec![vec![None; width]; height];
            let mut cells = letters.iter().copied();
            for &column in &order {
                for row in &mut grid {
                    row[column] = cells.next();
                }
            }
            recorder.record(|| {
                Step::new(
                    "Filling the grid column by column in key order",
                    StepData::Grid {
                        header: key.labels(),
                        rows: render_rows(&grid),
                    },
                )
            });

            let read: String = grid.iter().flatten().flatten().collect();
            read.trim_end_matches(FILLER).to_owned()
        }
    };

    recorder.record(|| Step::result(&result));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_column_order() {
        let key = TranspositionKey::parse("zebra").unwrap();
        assert_eq!(key, TranspositionKey::Alphabetic("ZEBRA".into()));
        assert_eq!(key.column_order(), vec![4, 2, 1, 3, 0]);
    }

    #[test]
    fn test_repeated_letters_keep_left_to_right_order() {
        let key = TranspositionKey::parse("BANANA").unwrap();
        assert_eq!(key.column_order(), vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_numeric_keys() {
        let key = TranspositionKey::parse("3, 1 2").unwrap();
        assert_eq!(key, TranspositionKey::Numeric(vec![3, 1, 2]));
        assert_eq!(key.column_order(), vec![1, 2, 0]);
        assert_eq!(key.labels(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_rejects_mixed_and_empty_keys() {
        assert!(TranspositionKey::parse("AB12").is_err());
        assert!(TranspositionKey::parse("").is_err());
        assert!(TranspositionKey::parse(" , ").is_err());
        assert!(!validate_key("KEY!"));
        assert!(validate_key("4 1 3 2"));
    }

    #[test]
    fn test_empty_cells_render_as_dots() {
        let grid = vec![vec![Some('A'), None]];
        assert_eq!(render_rows(&grid), vec!["A."]);
    }
}
