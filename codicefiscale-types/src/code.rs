//! Place-of-birth codes issued by the national statistics institute.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in a place-of-birth code.
pub const CODE_LENGTH: usize = 4;

/// A 4-character identifier for a municipality or a foreign country,
/// e.g. `H501` for Rome or `Z404` for the United States.
///
/// Only the length is validated. Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    /// Creates a code, failing if `code` is not exactly 4 characters long.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        let actual = code.chars().count();
        if actual != CODE_LENGTH {
            return Err(Error::InvalidLength {
                kind: "place code",
                expected: CODE_LENGTH,
                actual,
            });
        }
        Ok(Self(code))
    }

    /// Returns the code as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
