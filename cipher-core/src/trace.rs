// File:    trace.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Step-trace records emitted while a transform runs.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Step traces for visualizing a transform.
//!
//! Every cipher has exactly one computation path, generic over a
//! [`Recorder`]. The direct entry points pass [`NoTrace`], which drops every
//! step without building it; the traced entry points pass a [`StepTrace`],
//! which keeps them. Both therefore see the same intermediate values.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sink for trace steps.
pub trait Recorder {
    /// Records the step produced by `step`. Implementations that discard
    /// steps must not call `step`.
    fn record(&mut self, step: impl FnOnce() -> Step);
}

/// Recorder that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Recorder for NoTrace {
    fn record(&mut self, _step: impl FnOnce() -> Step) {}
}

/// Ordered, append-only list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    /// An empty trace.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// The recorded steps, oldest first.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Recorder for StepTrace {
    fn record(&mut self, step: impl FnOnce() -> Step) {
        self.steps.push(step());
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for StepTrace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// One trace record: a human-readable line plus the values behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// What happened, in words.
    pub description: String,
    /// The intermediate values that produced this step.
    pub data: StepData,
}

impl Step {
    /// Creates a step.
    pub fn new(description: impl Into<String>, data: StepData) -> Self {
        Self {
            description: description.into(),
            data,
        }
    }

    /// The closing step carrying the final text.
    #[must_use]
    pub fn result(text: &str) -> Self {
        Self::new(
            format!("Final result: {text}"),
            StepData::Result {
                text: text.to_owned(),
            },
        )
    }
}

/// Which Playfair rule a digraph fell under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigraphRule {
    /// Both letters share a row.
    SameRow,
    /// Both letters share a column.
    SameColumn,
    /// Letters form the corners of a rectangle.
    Rectangle,
}

/// Typed payload of a [`Step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepData {
    /// The key as it will be applied.
    Key {
        /// Canonical rendering of the key.
        key: String,
    },
    /// One letter replaced by another.
    Substitution {
        /// Position of the letter in the key stream (spaces excluded).
        position: usize,
        /// Letter read from the text.
        input: char,
        /// Its alphabet index.
        input_index: u8,
        /// Key letter consumed for this position, if the cipher has a key stream.
        key: Option<char>,
        /// Signed amount added modulo 26, if the cipher shifts.
        shift: Option<i64>,
        /// Index of the produced letter.
        output_index: u8,
        /// Letter written to the result.
        output: char,
    },
    /// A labelled square of letters (the Playfair square).
    Square {
        /// One string per row.
        rows: Vec<String>,
    },
    /// Text split into digraphs after filler insertion.
    Digraphs {
        /// The pairs in order.
        pairs: Vec<String>,
    },
    /// One Playfair digraph.
    Digraph {
        /// Zero-based pair number.
        index: usize,
        /// Input letters.
        input: [char; 2],
        /// `(row, col)` of each input letter.
        positions: [(usize, usize); 2],
        /// Rule that applied.
        rule: DigraphRule,
        /// Output letters.
        output: [char; 2],
    },
    /// An integer matrix.
    Matrix {
        /// Entries row by row.
        rows: Vec<Vec<i64>>,
    },
    /// Determinant and its inverse modulo 26.
    Determinant {
        /// Raw determinant.
        determinant: i64,
        /// Determinant reduced modulo 26.
        reduced: i64,
        /// Multiplicative inverse of `reduced`, if it exists.
        inverse: Option<i64>,
    },
    /// Text converted to alphabet indices.
    Numbers {
        /// Indices in order, padding included.
        values: Vec<i64>,
    },
    /// One Hill block multiplied by the working matrix.
    Block {
        /// Zero-based block number.
        index: usize,
        /// Input vector.
        input: Vec<i64>,
        /// Output vector, reduced modulo 26.
        output: Vec<i64>,
        /// Output vector as letters.
        text: String,
    },
    /// One Rail Fence character placed on a rail.
    Placement {
        /// Position in the cleaned text.
        position: usize,
        /// Character placed.
        character: char,
        /// Rail it landed on.
        rail: usize,
    },
    /// The rail assigned to every position of the zigzag.
    Pattern {
        /// Rail index per text position.
        rails: Vec<usize>,
    },
    /// The contents of one rail.
    Rail {
        /// Rail index.
        rail: usize,
        /// Characters on the rail, left to right.
        characters: String,
    },
    /// A transposition grid.
    Grid {
        /// Column headings (key symbols).
        header: Vec<String>,
        /// One string per row; `.` marks an empty cell.
        rows: Vec<String>,
    },
    /// Order in which grid columns are read or filled.
    ColumnOrder {
        /// Column indices in order.
        order: Vec<usize>,
    },
    /// The final text.
    Result {
        /// Output of the transform.
        text: String,
    },
}

/// Runs `f` against a fresh [`StepTrace`] and returns both.
///
/// # Errors
///
/// Propagates the error returned by `f`; the partial trace is discarded.
pub fn capture<F>(f: F) -> Result<Traced>
where
    F: FnOnce(&mut StepTrace) -> Result<String>,
{
    let mut trace = StepTrace::new();
    let result = f(&mut trace)?;
    Ok(Traced { result, trace })
}

/// A transform result together with its derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traced {
    /// Output text.
    pub result: String,
    /// Steps that produced it.
    pub trace: StepTrace,
}
