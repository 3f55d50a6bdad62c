//! Places of birth: Italian municipalities and foreign countries.
//!
//! A catalog of places is supplied by the caller. Each record carries a
//! [`Code`] that is the canonical key: two places with the same code are the
//! same place regardless of variant or name.

use crate::{Code, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Province of birth reported for every foreign country.
pub const COUNTRY_PROVINCE: &str = "EE";

/// Separates the Italian name from the foreign-language name in catalog
/// records of border municipalities, e.g. `Bolzano * Bozen`.
pub const FOREIGN_NAME_SEPARATOR: &str = " * ";

const PROVINCE_LENGTH: usize = 2;

/// An Italian municipality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct City {
    name: String,
    code: Code,
    province: String,
}

#[derive(Deserialize)]
struct CityRecord {
    name: String,
    code: Code,
    province: String,
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = CityRecord::deserialize(deserializer)?;
        Self::new(record.name, record.code, record.province).map_err(de::Error::custom)
    }
}

impl City {
    /// Creates a city. The province must be exactly two characters (e.g. `RM`).
    pub fn new(name: impl Into<String>, code: Code, province: impl Into<String>) -> Result<Self> {
        let province = province.into();
        if province.chars().count() != PROVINCE_LENGTH {
            return Err(Error::InvalidProvince(province));
        }
        Ok(Self {
            name: name.into(),
            code,
            province,
        })
    }

    /// Returns the Italian name of the city.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &Code {
        &self.code
    }

    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.province, self.code)
    }
}

/// A municipality close to the border, also known by a foreign-language
/// name (usually German or French).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityBorder {
    #[serde(flatten)]
    city: City,
    foreign_name: String,
}

impl CityBorder {
    /// Creates a border city. Fails under the same province rule as [`City::new`].
    pub fn new(
        name: impl Into<String>,
        code: Code,
        province: impl Into<String>,
        foreign_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            city: City::new(name, code, province)?,
            foreign_name: foreign_name.into(),
        })
    }

    /// Returns the underlying city record.
    #[must_use]
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Returns the name of the city in the foreign language.
    #[must_use]
    pub fn foreign_name(&self) -> &str {
        &self.foreign_name
    }
}

impl fmt::Display for CityBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.foreign_name)
    }
}

/// A foreign country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    name: String,
    code: Code,
}

impl Country {
    #[must_use]
    pub fn new(name: impl Into<String>, code: Code) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &Code {
        &self.code
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, COUNTRY_PROVINCE, self.code)
    }
}

/// A catalog record for a place of birth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlaceOfBirth {
    City(City),
    CityBorder(CityBorder),
    Country(Country),
}

impl PlaceOfBirth {
    /// Classifies a single catalog record into its variant.
    ///
    /// - a name containing [`FOREIGN_NAME_SEPARATOR`] is a border city, split
    ///   into its Italian and foreign names
    /// - a province equal to [`COUNTRY_PROVINCE`] (any case) is a country
    /// - anything else is a city
    pub fn from_record(name: &str, province: &str, code: Code) -> Result<Self> {
        if let Some((italian, foreign)) = name.split_once(FOREIGN_NAME_SEPARATOR) {
            return CityBorder::new(italian.trim(), code, province, foreign.trim())
                .map(Self::CityBorder);
        }
        if province.eq_ignore_ascii_case(COUNTRY_PROVINCE) {
            return Ok(Self::Country(Country::new(name, code)));
        }
        City::new(name, code, province).map(Self::City)
    }

    /// Returns the code identifying this place.
    #[must_use]
    pub fn code(&self) -> &Code {
        match self {
            Self::City(city) => city.code(),
            Self::CityBorder(border) => border.city().code(),
            Self::Country(country) => country.code(),
        }
    }

    /// Returns the Italian name of the city or the name of the country.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::City(city) => city.name(),
            Self::CityBorder(border) => border.city().name(),
            Self::Country(country) => country.name(),
        }
    }

    /// Returns the two-letter province, or `EE` for a foreign country.
    #[must_use]
    pub fn province_of_birth(&self) -> &str {
        match self {
            Self::City(city) => city.province(),
            Self::CityBorder(border) => border.city().province(),
            Self::Country(_) => COUNTRY_PROVINCE,
        }
    }

    /// Returns true if this place is a foreign country.
    #[must_use]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Country(_))
    }
}

impl PartialEq for PlaceOfBirth {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for PlaceOfBirth {}

impl std::hash::Hash for PlaceOfBirth {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl fmt::Display for PlaceOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(city) => fmt::Display::fmt(city, f),
            Self::CityBorder(border) => fmt::Display::fmt(border, f),
            Self::Country(country) => fmt::Display::fmt(country, f),
        }
    }
}

impl From<City> for PlaceOfBirth {
    fn from(city: City) -> Self {
        Self::City(city)
    }
}

impl From<CityBorder> for PlaceOfBirth {
    fn from(border: CityBorder) -> Self {
        Self::CityBorder(border)
    }
}

impl From<Country> for PlaceOfBirth {
    fn from(country: Country) -> Self {
        Self::Country(country)
    }
}
