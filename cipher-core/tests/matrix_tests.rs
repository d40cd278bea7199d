#![allow(missing_docs)]
use cipher_core::Matrix;
use cipher_core::matrix::MAX_ENTRY;
use cipher_core::modular::{self, MODULUS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(size: usize, rng: &mut StdRng) -> Matrix {
    let rows: Vec<Vec<i64>> = (0..size)
        .map(|_| (0..size).map(|_| rng.random_range(0..=MAX_ENTRY)).collect())
        .collect();
    Matrix::from_rows(&rows).unwrap()
}

fn identity(size: usize) -> Vec<Vec<i64>> {
    (0..size)
        .map(|row| (0..size).map(|col| i64::from(row == col)).collect())
        .collect()
}

fn multiply_mod26(a: &Matrix, b: &Matrix) -> Vec<Vec<i64>> {
    let size = a.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let sum: i64 = (0..size).map(|k| a.get(row, k) * b.get(k, col)).sum();
                    modular::mod_normalize(sum, MODULUS)
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_inverse_exists_iff_determinant_is_coprime() {
    let mut rng = StdRng::seed_from_u64(26);
    for size in [2, 3] {
        for _ in 0..500 {
            let m = random_matrix(size, &mut rng);
            let coprime = modular::gcd(m.determinant_mod26(), MODULUS) == 1;
            assert_eq!(m.is_invertible_mod26(), coprime);
            assert_eq!(m.inverse_mod26().is_some(), coprime, "matrix {m}");
        }
    }
}

#[test]
fn test_inverse_undoes_multiplication() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut checked = 0;
    for size in [2, 3] {
        for _ in 0..500 {
            let m = random_matrix(size, &mut rng);
            let Some(inverse) = m.inverse_mod26() else {
                continue;
            };
            assert_eq!(multiply_mod26(&m, &inverse), identity(size), "matrix {m}");

            let v: Vec<i64> = (0..size).map(|_| rng.random_range(0..MODULUS)).collect();
            assert_eq!(inverse.mul_vector_mod26(&m.mul_vector_mod26(&v)), v);
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn test_inverse_entries_are_normalized() {
    let m = Matrix::parse("3 3 2 5", 2).unwrap();
    let inverse = m.inverse_mod26().unwrap();
    for row in inverse.rows() {
        assert!(row.iter().all(|v| (0..MODULUS).contains(v)));
    }
}

#[test]
fn test_mod_inverse_of_every_residue() {
    for a in 0..MODULUS {
        match modular::mod_inverse(a, MODULUS) {
            Some(inverse) => {
                assert_eq!(modular::gcd(a, MODULUS), 1);
                assert_eq!((a * inverse) % MODULUS, 1);
            }
            None => assert_ne!(modular::gcd(a, MODULUS), 1),
        }
    }
}

#[test]
fn test_display_round_trips_through_parse() {
    let m = Matrix::parse("6, 24, 1, 13, 16, 10, 20, 17, 15", 3).unwrap();
    assert_eq!(m.to_string(), "6 24 1 13 16 10 20 17 15");
    assert_eq!(Matrix::parse(&m.to_string(), 3).unwrap(), m);
}

#[test]
fn test_negative_sums_are_normalized() {
    assert_eq!(modular::mod_normalize(-1, MODULUS), 25);
    assert_eq!(modular::mod_normalize(-52, MODULUS), 0);
    let m = Matrix::parse("25 25 25 25", 2).unwrap();
    assert_eq!(m.determinant(), 0);
    assert!(!m.is_invertible_mod26());
}
