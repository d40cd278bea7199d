// File:    modular.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Modular arithmetic kernel over Z/26Z (gcd, normalization, inverse).
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Integer helpers for arithmetic modulo 26.
//!
//! Rust's `%` keeps the sign of the dividend, so every result that leaves this
//! module goes through [`mod_normalize`] first.

/// The alphabet modulus.
pub const MODULUS: i64 = 26;

/// Greatest common divisor by Euclid's algorithm. Always non-negative.
#[must_use]
pub const fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Reduces `x` into `[0, m)`. `m` must be positive.
#[must_use]
pub const fn mod_normalize(x: i64, m: i64) -> i64 {
    ((x % m) + m) % m
}

/// Multiplicative inverse of `a` modulo `m`, found by scanning `[1, m)`.
///
/// Returns `None` when `gcd(a, m) != 1`.
#[must_use]
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let a = mod_normalize(a, m);
    (1..m).find(|x| (a * x) % m == 1)
}

/// Adds `by` to an alphabet index and wraps the result back into 0–25.
#[must_use]
pub const fn shift(index: u8, by: i64) -> u8 {
    mod_normalize(index as i64 + by, MODULUS) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(9, 26), 1);
        assert_eq!(gcd(26, 13), 13);
        assert_eq!(gcd(-4, 26), 2);
        assert_eq!(gcd(0, 26), 26);
    }

    #[test]
    fn test_mod_normalize_negative() {
        assert_eq!(mod_normalize(-1, 26), 25);
        assert_eq!(mod_normalize(-27, 26), 25);
        assert_eq!(mod_normalize(52, 26), 0);
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(9, 26), Some(3));
        assert_eq!(mod_inverse(-17, 26), Some(3));
        assert_eq!(mod_inverse(13, 26), None);
        assert_eq!(mod_inverse(2, 26), None);
        for a in 0..26 {
            assert_eq!(mod_inverse(a, 26).is_some(), gcd(a, 26) == 1, "a = {a}");
        }
    }

    #[test]
    fn test_shift_wraps_both_ways() {
        assert_eq!(shift(25, 1), 0);
        assert_eq!(shift(0, -1), 25);
        assert_eq!(shift(7, 3), 10);
    }
}
