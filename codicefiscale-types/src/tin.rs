//! The 16-character tax code.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Number of characters in a tax code.
pub const TIN_LENGTH: usize = 16;

/// An Italian Taxpayer Identification Number.
///
/// Only the length is validated at construction; a malformed charset shows
/// up later as a decode failure. Comparison ignores case and `Display`
/// always renders uppercase, while [`Tin::as_str`] returns the text as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tin(String);

impl Tin {
    /// Creates a tax code, failing if `code` is not exactly 16 characters long.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let actual = code.chars().count();
        if actual != TIN_LENGTH {
            return Err(Error::InvalidLength {
                kind: "tax code",
                expected: TIN_LENGTH,
                actual,
            });
        }
        Ok(Self(code))
    }

    /// Returns the code exactly as it was constructed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical uppercase form.
    #[must_use]
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl PartialEq for Tin {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_uppercase() == other.0.to_uppercase()
    }
}

impl Eq for Tin {}

impl Hash for Tin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_uppercase().hash(state);
    }
}

impl fmt::Display for Tin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_uppercase())
    }
}

impl FromStr for Tin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Tin {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Tin> for String {
    fn from(tin: Tin) -> Self {
        tin.0
    }
}
