//! Error types for the codec.

use codicefiscale_types::Code;
use thiserror::Error;

/// Codec-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A place code or tax code had the wrong length.
    #[error(transparent)]
    Shape(#[from] codicefiscale_types::Error),

    /// The place code embedded in a tax code is not in the catalog.
    #[error("place of birth {0} not found")]
    PlaceNotFound(Code),

    /// The month character is not one of the twelve month letters.
    #[error("invalid month character {0:?}")]
    InvalidMonth(char),

    /// A field that must be numeric contains something else.
    #[error("invalid {field}: {value:?} is not a number")]
    InvalidDigits { field: &'static str, value: String },

    /// The decoded year, month and day do not form a calendar date.
    #[error("invalid date of birth {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A character that is neither an ASCII letter nor a digit.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },

    /// The last character does not match the computed control character.
    #[error("control character mismatch: expected {expected}, found {found}")]
    ControlCharMismatch { expected: char, found: char },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
