//! Place-of-birth lookup over a caller-supplied catalog.

use crate::error::{CodecError, CodecResult};
use codicefiscale_types::{Code, PlaceOfBirth};
use tracing::debug;

/// A read-only collection of places of birth that can be searched by code.
///
/// Codes are expected to be unique. If they are not, implementations for
/// ordered collections return the first match.
pub trait Catalog {
    /// Returns the place with the given code, if any.
    fn find(&self, code: &Code) -> Option<&PlaceOfBirth>;
}

impl Catalog for [PlaceOfBirth] {
    fn find(&self, code: &Code) -> Option<&PlaceOfBirth> {
        self.iter().find(|place| place.code() == code)
    }
}

impl Catalog for Vec<PlaceOfBirth> {
    fn find(&self, code: &Code) -> Option<&PlaceOfBirth> {
        Catalog::find(self.as_slice(), code)
    }
}

/// Resolves a code against a catalog.
///
/// # Errors
///
/// Returns [`CodecError::PlaceNotFound`] naming the code if no record matches.
pub fn lookup<'a, C>(catalog: &'a C, code: &Code) -> CodecResult<&'a PlaceOfBirth>
where
    C: Catalog + ?Sized,
{
    catalog.find(code).ok_or_else(|| {
        debug!("Place of birth {} not in catalog", code);
        CodecError::PlaceNotFound(code.clone())
    })
}
