//! Encoder and decoder for Italian personal tax codes (codice fiscale).
//!
//! ```text
//! Citizen ──encode──▶ Tin
//! Tin + catalog ──decode──▶ gender, date of birth, place of birth
//! ```
//!
//! Everything here is pure: no I/O, no shared state. The catalog of places
//! of birth is loaded by the caller and passed in by reference; any ordered
//! slice or `Vec` of [`PlaceOfBirth`] works through the [`Catalog`] trait.
//!
//! ```ignore
//! let tin = encode(&citizen)?;
//! let decoded = Decoder::with_reference_year(2026).decode(&tin, &catalog)?;
//! assert_eq!(decoded.gender, citizen.gender());
//! ```

mod catalog;
mod control;
mod decode;
mod encode;
mod error;
mod fields;
mod triplet;

pub use catalog::{Catalog, lookup};
pub use control::control_char;
pub use decode::{
    DecodedTin, Decoder, decode, decode_date_of_birth, decode_gender, decode_place_of_birth, verify,
};
pub use encode::encode;
pub use error::{CodecError, CodecResult};
pub use fields::MONTH_CHARS;
pub use triplet::triplet;

pub use codicefiscale_types::{
    Citizen, City, CityBorder, Code, Country, Gender, PlaceOfBirth, Tin,
};
