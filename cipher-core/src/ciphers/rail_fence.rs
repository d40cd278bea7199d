// File:    rail_fence.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Rail Fence zigzag transposition.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;

use crate::alphabet;
use crate::ciphers::Direction;
use crate::error::{CipherError, Result};
use crate::trace::{NoTrace, Recorder, Step, StepData};

/// Fewest rails accepted.
pub const MIN_RAILS: usize = 2;
/// Most rails accepted.
pub const MAX_RAILS: usize = 10;

/// `true` when `rails` is in 2–10 and not larger than the number of letters
/// in `text`.
#[must_use]
pub fn validate_key(rails: i64, text: &str) -> bool {
    usize::try_from(rails).is_ok_and(|rails| check_rails(rails, alphabet::letter_count(text)).is_ok())
}

fn check_rails(rails: usize, length: usize) -> Result<()> {
    if !(MIN_RAILS..=MAX_RAILS).contains(&rails) {
        return Err(CipherError::InvalidKey(format!(
            "number of rails must be between {MIN_RAILS} and {MAX_RAILS}, got {rails}"
        )));
    }
    if length > 0 && rails > length {
        return Err(CipherError::RailCountExceedsLength { rails, length });
    }
    Ok(())
}

/// Rail index of every position in a zigzag of `length` characters.
///
/// The direction flips whenever the walk reaches rail 0 or rail
/// `rails - 1`. `rails` must be at least 2.
#[must_use]
pub fn zigzag(length: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(length);
    let mut rail = 0;
    let mut descending = true;
    for _ in 0..length {
        pattern.push(rail);
        if descending {
            rail += 1;
        } else {
            rail -= 1;
        }
        if rail == 0 || rail == rails - 1 {
            descending = !descending;
        }
    }
    pattern
}

/// Writes the letters along the zigzag and reads them rail by rail.
/// Spaces are dropped and the output is uppercase.
///
/// # Errors
///
/// Fails when `rails` is outside 2–10, exceeds the letter count, or on
/// non-letter characters.
pub fn encrypt(text: &str, rails: usize) -> Result<String> {
    transform(text, rails, Direction::Encrypt, &mut NoTrace)
}

/// Inverse of [`encrypt`].
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(text: &str, rails: usize) -> Result<String> {
    transform(text, rails, Direction::Decrypt, &mut NoTrace)
}

/// The single Rail Fence computation path.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn transform<R: Recorder>(
    text: &str,
    rails: usize,
    direction: Direction,
    recorder: &mut R,
) -> Result<String> {
    alphabet::validate_text(text)?;
    let letters: Vec<char> = alphabet::strip_spaces(text).chars().collect();
    check_rails(rails, letters.len())?;
    debug!("rail fence {direction} of {} letters on {rails} rails", letters.len());

    recorder.record(|| {
        Step::new(
            format!("Using {rails} rails on {} letters", letters.len()),
            StepData::Key {
                key: rails.to_string(),
            },
        )
    });

    let pattern = zigzag(letters.len(), rails);
    let result = match direction {
        Direction::Encrypt => {
            let mut fence = vec![String::new(); rails];
            for (position, (&character, &rail)) in letters.iter().zip(&pattern).enumerate() {
                fence[rail].push(character);
                recorder.record(|| {
                    Step::new(
                        format!("Place '{character}' (position {}) on rail {}", position + 1, rail + 1),
                        StepData::Placement {
                            position,
                            character,
                            rail,
                        },
                    )
                });
            }
            for (rail, characters) in fence.iter().enumerate() {
                recorder.record(|| {
                    Step::new(
                        format!("Rail {}: {characters}", rail + 1),
                        StepData::Rail {
                            rail,
                            characters: characters.clone(),
                        },
                    )
                });
            }
            fence.concat()
        }
        Direction::Decrypt => {
            recorder.record(|| {
                Step::new(
                    "Zigzag pattern: rail of every position",
                    StepData::Pattern {
                        rails: pattern.clone(),
                    },
                )
            });

            let mut counts = vec![0; rails];
            for &rail in &pattern {
                counts[rail] += 1;
            }
            let mut runs: Vec<&[char]> = Vec::with_capacity(rails);
            let mut rest = letters.as_slice();
            for (rail, &count) in counts.iter().enumerate() {
                let (run, tail) = rest.split_at(count);
                rest = tail;
                runs.push(run);
                recorder.record(|| {
                    let characters: String = run.iter().collect();
                    Step::new(
                        format!("Rail {} takes the next {count} letters: {characters}", rail + 1),
                        StepData::Rail { rail, characters },
                    )
                });
            }

            let mut cursors = vec![0; rails];
            pattern
                .iter()
                .map(|&rail| {
                    let character = runs[rail][cursors[rail]];
                    cursors[rail] += 1;
                    character
                })
                .collect()
        }
    };

    recorder.record(|| Step::result(&result));
    Ok(result)
}
