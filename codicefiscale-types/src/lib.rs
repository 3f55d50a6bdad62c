//! Value objects for Italian personal tax codes (codice fiscale).
//!
//! This crate defines the plain data the codec consumes and produces:
//! - `Code`: the 4-character identifier of a municipality or foreign country
//! - `Tin`: the 16-character tax code itself
//! - `PlaceOfBirth`: a catalog record (city, border city, or country)
//! - `Citizen`: the personal data a tax code is derived from
//!
//! Everything here is immutable once constructed. Constructors that can fail
//! validate shape only (length), never factual correctness.

mod citizen;
mod code;
mod place;
mod tin;

pub use citizen::{Citizen, Gender};
pub use code::{CODE_LENGTH, Code};
pub use place::{
    COUNTRY_PROVINCE, City, CityBorder, Country, FOREIGN_NAME_SEPARATOR, PlaceOfBirth,
};
pub use tin::{TIN_LENGTH, Tin};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing value objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid {kind}: expected {expected} characters, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid province of birth: {0:?} is not a two character string")]
    InvalidProvince(String),

    #[error("invalid gender: {0:?}")]
    InvalidGender(String),
}
