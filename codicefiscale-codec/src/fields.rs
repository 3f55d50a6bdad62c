//! Positional layout of a tax code and the date/gender fields.
//!
//! ```text
//! RSS MRA 80 A 01 H501 U
//! │   │   │  │ │  │    └ control character   [15]
//! │   │   │  │ │  └ place of birth code      [11..15]
//! │   │   │  │ └ day of birth (+40 female)   [9..11]
//! │   │   │  └ month of birth                [8]
//! │   │   └ year of birth                    [6..8]
//! │   └ name triplet                         [3..6]
//! └ surname triplet                          [0..3]
//! ```

use chrono::{Datelike, NaiveDate};
use codicefiscale_types::Gender;
use std::ops::Range;

pub(crate) const YEAR: Range<usize> = 6..8;
pub(crate) const MONTH: usize = 8;
pub(crate) const DAY: Range<usize> = 9..11;
pub(crate) const PLACE: Range<usize> = 11..15;
pub(crate) const CONTROL: usize = 15;

/// Highest day value encoded for a male citizen; anything above is female.
pub(crate) const MAX_MALE_DAY: u32 = 31;

/// Month letters, January first. Only the first twelve name a month; the
/// trailing `T` is part of the alphabet but decodes to no month.
pub const MONTH_CHARS: [char; 13] = [
    'A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'N', 'P', 'R', 'S', 'T',
];

const MONTHS: usize = 12;

/// Last two digits of the year, zero-padded.
pub(crate) fn year_pair(date: NaiveDate) -> String {
    format!("{:02}", date.year().rem_euclid(100))
}

pub(crate) fn month_char(date: NaiveDate) -> char {
    MONTH_CHARS[date.month0() as usize]
}

/// Returns the 0-based month for a month letter, ignoring case.
///
/// Letters outside the alphabet, and the trailing `T`, give `None`.
pub(crate) fn month_index(month: char) -> Option<u32> {
    let month = month.to_ascii_uppercase();
    MONTH_CHARS
        .iter()
        .position(|&c| c == month)
        .filter(|&index| index < MONTHS)
        .map(|index| index as u32)
}

/// Day of birth plus the gender offset, zero-padded.
pub(crate) fn day_gender_pair(date: NaiveDate, gender: Gender) -> String {
    format!("{:02}", date.day() + gender.day_offset())
}

/// Picks the century for a 2-digit year relative to `reference_year`:
/// years at or above the reference's last two digits are 19xx, the rest 20xx.
pub(crate) fn full_year(two_digit: u32, reference_year: i32) -> i32 {
    let pivot = reference_year.rem_euclid(100);
    let two_digit = two_digit as i32;
    if two_digit >= pivot {
        1900 + two_digit
    } else {
        2000 + two_digit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_round_trips() {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2000, month, 1).unwrap();
            assert_eq!(month_index(month_char(date)), Some(month - 1));
        }
    }

    #[test]
    fn month_table_second_half_of_year() {
        let letters: String = (9..=12)
            .map(|month| month_char(NaiveDate::from_ymd_opt(1980, month, 1).unwrap()))
            .collect();
        assert_eq!(letters, "NPRS");
    }

    #[test]
    fn month_index_accepts_n() {
        assert_eq!(month_index('N'), Some(8));
        assert_eq!(month_index('n'), Some(8));
    }

    #[test]
    fn month_index_rejects_letters_without_a_month() {
        assert_eq!(month_index('T'), None);
        assert_eq!(month_index('F'), None);
        assert_eq!(month_index('Z'), None);
    }

    #[test]
    fn full_year_pivots_on_reference() {
        assert_eq!(full_year(80, 2026), 1980);
        assert_eq!(full_year(26, 2026), 1926);
        assert_eq!(full_year(25, 2026), 2025);
        assert_eq!(full_year(0, 2026), 2000);
    }

    #[test]
    fn year_pair_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2005, 3, 1).unwrap();
        assert_eq!(year_pair(date), "05");
    }
}
