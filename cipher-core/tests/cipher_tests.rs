#![allow(missing_docs)]
use cipher_core::ciphers::transposition::TranspositionKey;
use cipher_core::ciphers::{
    caesar, hill, monoalphabetic, one_time_pad, playfair, polyalphabetic, rail_fence,
    transposition,
};
use cipher_core::{CipherError, ErrorKind, Matrix};

const SUBSTITUTION: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

#[test]
fn test_caesar_known_answers() {
    assert_eq!(caesar::encrypt("HELLO", 3).unwrap(), "KHOOR");
    assert_eq!(caesar::decrypt("KHOOR", 3).unwrap(), "HELLO");
    assert_eq!(caesar::encrypt("Hello World", 3).unwrap(), "Khoor Zruog");
    assert_eq!(caesar::encrypt("xyz", 3).unwrap(), "abc");
    assert_eq!(caesar::encrypt("", 5).unwrap(), "");
}

#[test]
fn test_caesar_rejects_out_of_range_shift() {
    for shift in [0, 26, -1] {
        assert!(!caesar::validate_key(shift));
        let err = caesar::encrypt("HELLO", shift).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKeyShape);
    }
}

#[test]
fn test_non_letters_are_rejected() {
    let err = caesar::encrypt("HELLO 123", 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CharacterSetViolation);
    let err = polyalphabetic::encrypt("HI!", "KEY").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CharacterSetViolation);
}

#[test]
fn test_monoalphabetic_roundtrip() {
    assert!(monoalphabetic::validate_key(SUBSTITUTION));
    let ciphertext = monoalphabetic::encrypt("hello world", SUBSTITUTION).unwrap();
    assert_eq!(ciphertext, "ITSSG VGKSR");
    assert_eq!(
        monoalphabetic::decrypt(&ciphertext, SUBSTITUTION).unwrap(),
        "HELLO WORLD"
    );
}

#[test]
fn test_monoalphabetic_rejects_bad_alphabets() {
    assert!(!monoalphabetic::validate_key("ABC"));
    assert!(!monoalphabetic::validate_key("AACDEFGHIJKLMNOPQRSTUVWXYZ"));
    assert!(!monoalphabetic::validate_key("ABCDEFGHIJKLMNOPQRSTUVWXY1"));
    assert!(monoalphabetic::encrypt("HELLO", "ABC").is_err());
}

#[test]
fn test_vigenere_known_answer_and_space_transparency() {
    let spaced = polyalphabetic::encrypt("ATTACK AT DAWN", "LEMON").unwrap();
    let packed = polyalphabetic::encrypt("ATTACKATDAWN", "lemon").unwrap();
    assert_eq!(spaced, "LXFOPV EF RNHR");
    assert_eq!(spaced.replace(' ', ""), packed);
    assert_eq!(
        polyalphabetic::decrypt(&spaced, "LEMON").unwrap(),
        "ATTACK AT DAWN"
    );
}

#[test]
fn test_vigenere_rejects_bad_keywords() {
    assert!(!polyalphabetic::validate_key(""));
    assert!(!polyalphabetic::validate_key("KEY1"));
    assert!(polyalphabetic::encrypt("HELLO", "").is_err());
}

#[test]
fn test_playfair_monarchy() {
    assert_eq!(
        playfair::encrypt("INSTRUMENTS", "MONARCHY").unwrap(),
        "GATLMZCLRQXA"
    );
    assert_eq!(
        playfair::decrypt("GATLMZCLRQXA", "MONARCHY").unwrap(),
        "INSTRUMENTSX"
    );
}

#[test]
fn test_playfair_square_and_preparation() {
    let square = playfair::Square::from_keyword("MONARCHY");
    assert_eq!(
        square.rows(),
        vec!["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]
    );
    assert_eq!(square.position('J'), square.position('I'));

    assert_eq!(playfair::prepare_text("balloon"), "BALXLOXONX");
    assert_eq!(playfair::prepare_text("JAM"), "IAMX");
    assert_eq!(playfair::prepare_text("HI THERE"), "HITHEREX");
}

#[test]
fn test_playfair_roundtrip_returns_prepared_text() {
    let plaintext = "hide the gold in the tree stump";
    assert!(!playfair::validate_key("playfair example"));
    let ciphertext = playfair::encrypt(plaintext, "playfairexample").unwrap();
    let decrypted = playfair::decrypt(&ciphertext, "PLAYFAIREXAMPLE").unwrap();
    assert_eq!(decrypted, playfair::prepare_text(plaintext));
}

#[test]
fn test_playfair_rejects_odd_ciphertext() {
    let err = playfair::decrypt("ABC", "KEY").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CharacterSetViolation);
}

#[test]
fn test_hill_2x2_roundtrip() {
    let key = Matrix::parse("3 3 2 5", 2).unwrap();
    assert!(hill::validate_key("3 3 2 5", 2));
    assert_eq!(hill::encrypt("HELP", &key).unwrap(), "HIAT");
    assert_eq!(hill::decrypt("HIAT", &key).unwrap(), "HELP");
}

#[test]
fn test_hill_3x3_known_answer() {
    let key = Matrix::parse("6 24 1 13 16 10 20 17 15", 3).unwrap();
    assert_eq!(hill::encrypt("ACT", &key).unwrap(), "POH");
    assert_eq!(hill::decrypt("POH", &key).unwrap(), "ACT");
}

#[test]
fn test_hill_pads_with_x() {
    let key = Matrix::parse("3 3 2 5", 2).unwrap();
    let ciphertext = hill::encrypt("HEL", &key).unwrap();
    assert_eq!(ciphertext.len(), 4);
    assert_eq!(hill::decrypt(&ciphertext, &key).unwrap(), "HELX");
}

#[test]
fn test_hill_non_invertible_key() {
    assert!(!hill::validate_key("6 24 1 13", 2));
    let key = Matrix::parse("6 24 1 13", 2).unwrap();
    assert_eq!(
        hill::encrypt("HELP", &key).unwrap_err(),
        CipherError::NonInvertibleMatrix { determinant: 2 }
    );
    // The key is checked before the text.
    assert_eq!(
        hill::encrypt("HELP 1", &key).unwrap_err().kind(),
        ErrorKind::NonInvertibleMatrix
    );
}

#[test]
fn test_hill_decrypt_needs_whole_blocks() {
    let key = Matrix::parse("3 3 2 5", 2).unwrap();
    let err = hill::decrypt("HIA", &key).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CharacterSetViolation);
}

#[test]
fn test_rail_fence_known_answer() {
    let ciphertext = rail_fence::encrypt("WE ARE DISCOVERED FLEE AT ONCE", 3).unwrap();
    assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
    assert_eq!(
        rail_fence::decrypt(&ciphertext, 3).unwrap(),
        "WEAREDISCOVEREDFLEEATONCE"
    );
}

#[test]
fn test_rail_fence_boundaries() {
    assert_eq!(rail_fence::encrypt("HELLO", 2).unwrap(), "HLOEL");
    assert_eq!(rail_fence::decrypt("HLOEL", 2).unwrap(), "HELLO");
    // As many rails as letters reads the text straight down and back.
    assert_eq!(rail_fence::encrypt("HELLO", 5).unwrap(), "HELLO");
    assert_eq!(rail_fence::encrypt("AB", 2).unwrap(), "AB");

    assert_eq!(
        rail_fence::encrypt("HELLO", 6).unwrap_err(),
        CipherError::RailCountExceedsLength {
            rails: 6,
            length: 5
        }
    );
    assert_eq!(
        rail_fence::encrypt("HELLO", 1).unwrap_err().kind(),
        ErrorKind::InvalidKeyShape
    );
    assert!(!rail_fence::validate_key(11, "A LONG ENOUGH SENTENCE"));
    assert!(rail_fence::validate_key(5, "HEL LO"));
    assert!(!rail_fence::validate_key(6, "HEL LO"));
}

#[test]
fn test_rail_fence_zigzag_pattern() {
    assert_eq!(rail_fence::zigzag(7, 3), vec![0, 1, 2, 1, 0, 1, 2]);
    assert_eq!(rail_fence::zigzag(4, 2), vec![0, 1, 0, 1]);
}

#[test]
fn test_row_column_keyword() {
    let key = TranspositionKey::parse("ZEBRA").unwrap();
    let ciphertext = transposition::encrypt("WE ARE DISCOVERED", &key).unwrap();
    assert_eq!(ciphertext, "EODASREIERCEWDV");
    assert_eq!(
        transposition::decrypt(&ciphertext, &key).unwrap(),
        "WEAREDISCOVERED"
    );
}

#[test]
fn test_row_column_numeric_key() {
    let key = TranspositionKey::parse("3,1,2").unwrap();
    let ciphertext = transposition::encrypt("ATTACK AT DAWN", &key).unwrap();
    assert_eq!(ciphertext, "TCTWTKDNAAAA");
    assert_eq!(
        transposition::decrypt(&ciphertext, &key).unwrap(),
        "ATTACKATDAWN"
    );
}

#[test]
fn test_row_column_padding_is_stripped_with_trailing_x() {
    let key = TranspositionKey::parse("ZEBRA").unwrap();
    let ciphertext = transposition::encrypt("HELLO WORLD", &key).unwrap();
    assert_eq!(ciphertext, "ODLREOLLHW");
    assert_eq!(transposition::decrypt(&ciphertext, &key).unwrap(), "HELLOWORLD");

    // A genuine trailing X cannot be told apart from padding.
    let ciphertext = transposition::encrypt("FOX", &key).unwrap();
    assert_eq!(transposition::decrypt(&ciphertext, &key).unwrap(), "FO");
}

#[test]
fn test_one_time_pad_known_answer() {
    assert_eq!(one_time_pad::encrypt("HELLO", "XMCKL").unwrap(), "EQNVZ");
    assert_eq!(one_time_pad::decrypt("EQNVZ", "XMCKL").unwrap(), "HELLO");
}

#[test]
fn test_one_time_pad_length_must_match() {
    assert!(one_time_pad::validate_key("ABCDE", "HELLO"));
    for (pad, actual) in [("ABCD", 4), ("ABCDEF", 6)] {
        assert!(!one_time_pad::validate_key(pad, "HELLO"));
        assert_eq!(
            one_time_pad::encrypt("HELLO", pad).unwrap_err(),
            CipherError::KeyLengthMismatch {
                expected: 5,
                actual
            }
        );
    }
}

#[test]
fn test_one_time_pad_ignores_spaces_on_both_sides() {
    assert!(one_time_pad::validate_key("XMC KL", "HE LLO"));
    assert_eq!(one_time_pad::encrypt("HE LLO", "XMC KL").unwrap(), "EQ NVZ");
}
