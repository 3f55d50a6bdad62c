//! Shared fixtures for codec tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use codicefiscale_codec::{Citizen, Code, Gender, PlaceOfBirth};

/// Reference year used wherever decoding must be reproducible.
pub const REFERENCE_YEAR: i32 = 2026;

pub fn code(value: &str) -> Code {
    Code::new(value).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A small catalog covering every place variant.
pub fn catalog() -> Vec<PlaceOfBirth> {
    [
        ("Roma", "RM", "H501"),
        ("Milano", "MI", "F205"),
        ("Busseto", "PR", "B293"),
        ("Genova", "GE", "d969"),
        ("Bolzano * Bozen", "BZ", "A952"),
        ("Aosta * Aoste", "AO", "A326"),
        ("Francia", "EE", "Z110"),
        ("Stati Uniti d'America", "EE", "Z404"),
    ]
    .into_iter()
    .map(|(name, province, value)| PlaceOfBirth::from_record(name, province, code(value)).unwrap())
    .collect()
}

/// Returns the catalog record with the given code.
pub fn place(value: &str) -> PlaceOfBirth {
    catalog()
        .into_iter()
        .find(|place| place.code().as_str() == value)
        .unwrap()
}

pub fn citizen(
    name: &str,
    surname: &str,
    date_of_birth: NaiveDate,
    gender: Gender,
    place_code: &str,
) -> Citizen {
    Citizen::new(name, surname, date_of_birth, gender, place(place_code))
}

pub fn mario_rossi() -> Citizen {
    citizen("Mario", "Rossi", date(1980, 1, 1), Gender::Male, "H501")
}
