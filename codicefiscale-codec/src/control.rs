//! Control character computation.
//!
//! Characters at 1-based odd positions are mapped through the odd-position
//! tables below. Characters at even positions contribute their plain value:
//! the digit itself, or the 0-based alphabet index of the letter. The sum
//! modulo 26 selects the control letter.

use crate::error::{CodecError, CodecResult};

const ODD_DIGIT_VALUES: [u32; 10] = [1, 0, 5, 7, 9, 13, 15, 17, 19, 21];

const ODD_LETTER_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Computes the uppercase control character for a partial tax code.
///
/// Case is ignored. Any character other than an ASCII letter or digit is
/// rejected with [`CodecError::InvalidCharacter`].
pub fn control_char(partial: &str) -> CodecResult<char> {
    let mut sum_odd = 0;
    let mut sum_even = 0;

    for (position, character) in partial.chars().enumerate() {
        let odd = position % 2 == 0;
        let value = if let Some(digit) = character.to_digit(10) {
            if odd { ODD_DIGIT_VALUES[digit as usize] } else { digit }
        } else if character.is_ascii_alphabetic() {
            let index = u32::from(character.to_ascii_uppercase() as u8 - b'A');
            if odd { ODD_LETTER_VALUES[index as usize] } else { index }
        } else {
            return Err(CodecError::InvalidCharacter { position, character });
        };

        if odd {
            sum_odd += value;
        } else {
            sum_even += value;
        }
    }

    let index = (sum_odd + sum_even) % 26;
    Ok(char::from(ALPHABET[index as usize]))
}
