// File:    matrix.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Square matrix kernel over Z/26Z used by the Hill cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! 2×2 and 3×3 integer matrices with determinant, adjugate and inversion
//! modulo 26.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};
use crate::modular::{self, MODULUS};

/// Matrix sizes the Hill cipher accepts.
pub const SUPPORTED_SIZES: [usize; 2] = [2, 3];

/// Largest value allowed in a key matrix cell.
pub const MAX_ENTRY: i64 = 25;

/// A square integer matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matrix {
    size: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// Builds a matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the rows are not square or the
    /// size is not 2 or 3.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let size = rows.len();
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(CipherError::InvalidKey(format!(
                "matrix size must be 2 or 3, got {size}"
            )));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(CipherError::InvalidKey(format!(
                "matrix rows must all have {size} entries"
            )));
        }
        Ok(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Parses `size * size` integers separated by spaces or commas.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] for an unsupported size, a wrong
    /// entry count, a non-numeric entry, or an entry outside 0–25.
    pub fn parse(key: &str, size: usize) -> Result<Self> {
        if !SUPPORTED_SIZES.contains(&size) {
            return Err(CipherError::InvalidKey(format!(
                "matrix size must be 2 or 3, got {size}"
            )));
        }
        let cells = key
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>().map_err(|_| {
                    CipherError::InvalidKey(format!("matrix entry {part:?} is not an integer"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if cells.len() != size * size {
            return Err(CipherError::InvalidKey(format!(
                "a {size}x{size} matrix needs {} numbers, got {}",
                size * size,
                cells.len()
            )));
        }
        if let Some(bad) = cells.iter().find(|v| !(0..=MAX_ENTRY).contains(*v)) {
            return Err(CipherError::InvalidKey(format!(
                "matrix entries must be between 0 and {MAX_ENTRY}, got {bad}"
            )));
        }
        Ok(Self { size, cells })
    }

    /// Side length of the matrix.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Entry at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    /// The entries as a list of rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.cells.chunks(self.size).map(<[i64]>::to_vec).collect()
    }

    /// Determinant, using the closed forms for 2×2 and 3×3.
    #[must_use]
    pub fn determinant(&self) -> i64 {
        match self.size {
            1 => self.cells[0],
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => (0..self.size)
                .map(|col| cofactor_sign(0, col) * self.get(0, col) * self.minor(0, col).determinant())
                .sum(),
        }
    }

    /// The matrix left after deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Self {
        let cells = (0..self.size)
            .filter(|&r| r != row)
            .flat_map(|r| {
                (0..self.size)
                    .filter(move |&c| c != col)
                    .map(move |c| (r, c))
            })
            .map(|(r, c)| self.get(r, c))
            .collect();
        Self {
            size: self.size - 1,
            cells,
        }
    }

    /// Matrix of cofactors `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// For 2×2 this is `[[d, -c], [-b, a]]`, whose transpose is the familiar
    /// `[[d, -b], [-c, a]]` adjugate.
    #[must_use]
    pub fn cofactor_matrix(&self) -> Self {
        let cells = match self.size {
            2 => vec![
                self.get(1, 1),
                -self.get(1, 0),
                -self.get(0, 1),
                self.get(0, 0),
            ],
            _ => (0..self.size)
                .flat_map(|i| (0..self.size).map(move |j| (i, j)))
                .map(|(i, j)| cofactor_sign(i, j) * self.minor(i, j).determinant())
                .collect(),
        };
        Self {
            size: self.size,
            cells,
        }
    }

    /// Transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .map(|(i, j)| self.get(j, i))
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Adjugate: transpose of the cofactor matrix.
    #[must_use]
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Determinant reduced into `[0, 26)`.
    #[must_use]
    pub fn determinant_mod26(&self) -> i64 {
        modular::mod_normalize(self.determinant(), MODULUS)
    }

    /// `true` when `gcd(det mod 26, 26) == 1`.
    #[must_use]
    pub fn is_invertible_mod26(&self) -> bool {
        modular::gcd(self.determinant_mod26(), MODULUS) == 1
    }

    /// Inverse modulo 26: `det⁻¹ · adj(M)` with every entry normalized.
    ///
    /// Returns `None` when the determinant has no inverse modulo 26.
    #[must_use]
    pub fn inverse_mod26(&self) -> Option<Self> {
        let det_inverse = modular::mod_inverse(self.determinant_mod26(), MODULUS)?;
        let adjugate = self.adjugate();
        let cells = adjugate
            .cells
            .iter()
            .map(|v| modular::mod_normalize(v * det_inverse, MODULUS))
            .collect();
        Some(Self {
            size: self.size,
            cells,
        })
    }

    /// `M · v` with every component reduced into `[0, 26)`.
    ///
    /// # Panics
    ///
    /// Panics if `vector` is shorter than the matrix size.
    #[must_use]
    pub fn mul_vector_mod26(&self, vector: &[i64]) -> Vec<i64> {
        (0..self.size)
            .map(|row| {
                let sum: i64 = (0..self.size)
                    .map(|col| self.get(row, col) * vector[col])
                    .sum();
                modular::mod_normalize(sum, MODULUS)
            })
            .collect()
    }
}

/// Renders the entries row-major, space-separated, in the form [`Matrix::parse`] reads.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

const fn cofactor_sign(row: usize, col: usize) -> i64 {
    if (row + col) % 2 == 0 { 1 } else { -1 }
}
