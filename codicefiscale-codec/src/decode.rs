//! Tax code → gender, date of birth and place of birth.
//!
//! Names cannot be recovered: the triplet rule is lossy.

use crate::catalog::{Catalog, lookup};
use crate::control::control_char;
use crate::error::{CodecError, CodecResult};
use crate::fields::{CONTROL, DAY, MAX_MALE_DAY, MONTH, PLACE, YEAR, full_year, month_index};
use chrono::{Datelike, Local, NaiveDate};
use codicefiscale_types::{Code, Gender, PlaceOfBirth, Tin};
use std::ops::Range;
use tracing::debug;

/// The data recoverable from a tax code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTin<'a> {
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    /// The catalog record the embedded place code resolved to.
    pub place_of_birth: &'a PlaceOfBirth,
}

/// Decodes tax codes relative to a reference year.
///
/// A tax code stores only two digits of the year of birth. Two-digit years
/// greater than or equal to the last two digits of the reference year are
/// read as 19xx, smaller ones as 20xx. With [`Decoder::new`] the reference is
/// the current year, so the same code can decode to a different century
/// depending on when it is decoded; pin it with
/// [`Decoder::with_reference_year`] when reproducibility matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    reference_year: i32,
}

impl Decoder {
    /// Creates a decoder that uses the current local year as reference.
    #[must_use]
    pub fn new() -> Self {
        Self::with_reference_year(Local::now().year())
    }

    /// Creates a decoder with a fixed reference year.
    #[must_use]
    pub const fn with_reference_year(reference_year: i32) -> Self {
        Self { reference_year }
    }

    #[must_use]
    pub const fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Decodes gender, date of birth and place of birth.
    ///
    /// # Errors
    ///
    /// Fails on non-numeric year or day fields, an unknown month letter, an
    /// impossible date, or a place code missing from the catalog.
    pub fn decode<'a, C>(&self, tin: &Tin, catalog: &'a C) -> CodecResult<DecodedTin<'a>>
    where
        C: Catalog + ?Sized,
    {
        let gender = decode_gender(tin)?;
        let date_of_birth = self.decode_date_of_birth(tin)?;
        let place_of_birth = decode_place_of_birth(tin, catalog)?;

        debug!("Decoded tax code for place of birth {}", place_of_birth.code());
        Ok(DecodedTin {
            gender,
            date_of_birth,
            place_of_birth,
        })
    }

    /// Decodes the date of birth.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidMonth`] for a letter that names no month,
    /// [`CodecError::InvalidDigits`] for a non-numeric year or day, and
    /// [`CodecError::InvalidDate`] if the fields do not form a calendar date.
    pub fn decode_date_of_birth(&self, tin: &Tin) -> CodecResult<NaiveDate> {
        let chars: Vec<char> = tin.as_str().chars().collect();

        let month_char = chars[MONTH];
        let month0 = month_index(month_char).ok_or(CodecError::InvalidMonth(month_char))?;
        let year = full_year(number(&chars, YEAR, "year of birth")?, self.reference_year);

        let raw_day = number(&chars, DAY, "day of birth")?;
        let offset = gender_of(raw_day).day_offset();
        let day = raw_day.saturating_sub(offset);

        NaiveDate::from_ymd_opt(year, month0 + 1, day).ok_or(CodecError::InvalidDate {
            year,
            month: month0 + 1,
            day,
        })
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a tax code using the current year for century disambiguation.
///
/// See [`Decoder`] for the century rule.
///
/// # Errors
///
/// Same as [`Decoder::decode`].
pub fn decode<'a, C>(tin: &Tin, catalog: &'a C) -> CodecResult<DecodedTin<'a>>
where
    C: Catalog + ?Sized,
{
    Decoder::new().decode(tin, catalog)
}

/// Decodes the gender: a day field above 31 means female.
///
/// # Errors
///
/// Returns [`CodecError::InvalidDigits`] if the day field is not numeric.
pub fn decode_gender(tin: &Tin) -> CodecResult<Gender> {
    let chars: Vec<char> = tin.as_str().chars().collect();
    Ok(gender_of(number(&chars, DAY, "day of birth")?))
}

/// Decodes the date of birth using the current year as reference.
///
/// # Errors
///
/// Same as [`Decoder::decode_date_of_birth`].
pub fn decode_date_of_birth(tin: &Tin) -> CodecResult<NaiveDate> {
    Decoder::new().decode_date_of_birth(tin)
}

/// Resolves the embedded place code against the catalog.
///
/// The code is looked up exactly as it appears in the tax code. Only if that
/// fails and the code has lowercase letters is its uppercase form tried, since
/// printed tax codes are uppercase.
///
/// # Errors
///
/// Returns [`CodecError::PlaceNotFound`] naming the code as written in the
/// tax code if neither form is in the catalog.
pub fn decode_place_of_birth<'a, C>(tin: &Tin, catalog: &'a C) -> CodecResult<&'a PlaceOfBirth>
where
    C: Catalog + ?Sized,
{
    let code: String = tin.as_str().chars().skip(PLACE.start).take(PLACE.len()).collect();
    let code = Code::new(code)?;
    if let Some(place) = catalog.find(&code) {
        return Ok(place);
    }

    let upper = code.as_str().to_uppercase();
    if upper != code.as_str() {
        if let Some(place) = catalog.find(&Code::new(upper)?) {
            return Ok(place);
        }
    }
    lookup(catalog, &code)
}

/// Checks the last character of a tax code against its control character.
///
/// # Errors
///
/// Returns [`CodecError::ControlCharMismatch`] if they differ, or
/// [`CodecError::InvalidCharacter`] if the first 15 characters cannot be
/// summed.
pub fn verify(tin: &Tin) -> CodecResult<()> {
    let chars: Vec<char> = tin.as_str().chars().collect();
    let partial: String = chars[..CONTROL].iter().collect();

    let expected = control_char(&partial)?;
    let found = chars[CONTROL].to_ascii_uppercase();
    if expected != found {
        return Err(CodecError::ControlCharMismatch { expected, found });
    }
    Ok(())
}

fn gender_of(day_field: u32) -> Gender {
    if day_field > MAX_MALE_DAY {
        Gender::Female
    } else {
        Gender::Male
    }
}

fn number(chars: &[char], range: Range<usize>, field: &'static str) -> CodecResult<u32> {
    let digits = &chars[range];
    if !digits.iter().all(char::is_ascii_digit) {
        return Err(CodecError::InvalidDigits {
            field,
            value: digits.iter().collect(),
        });
    }
    Ok(digits
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, digit| acc * 10 + digit))
}
