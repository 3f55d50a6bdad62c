//! The personal data a tax code is derived from.

use crate::{Error, PlaceOfBirth, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount added to the day of birth of a female citizen.
const FEMALE_DAY_OFFSET: u32 = 40;

/// Gender as recorded in a tax code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Returns the amount added to the day of birth for this gender.
    #[must_use]
    pub const fn day_offset(&self) -> u32 {
        match self {
            Self::Male => 0,
            Self::Female => FEMALE_DAY_OFFSET,
        }
    }

    /// Returns the single-letter form, `M` or `F`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(Error::InvalidGender(other.to_string())),
        }
    }
}

/// A citizen whose tax code is to be computed.
///
/// Equality compares every field; the place of birth compares by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    name: String,
    surname: String,
    date_of_birth: NaiveDate,
    gender: Gender,
    place_of_birth: PlaceOfBirth,
}

impl Citizen {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: Gender,
        place_of_birth: PlaceOfBirth,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            date_of_birth,
            gender,
            place_of_birth,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    #[must_use]
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub fn place_of_birth(&self) -> &PlaceOfBirth {
        &self.place_of_birth
    }
}

impl fmt::Display for Citizen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}), {}/{}/{} {}",
            self.name,
            self.surname,
            self.gender,
            self.date_of_birth.day(),
            self.date_of_birth.month(),
            self.date_of_birth.year(),
            self.place_of_birth,
        )
    }
}
