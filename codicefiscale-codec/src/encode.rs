//! Citizen → tax code.

use crate::control::control_char;
use crate::error::CodecResult;
use crate::fields::{day_gender_pair, month_char, year_pair};
use crate::triplet::triplet;
use codicefiscale_types::{Citizen, TIN_LENGTH, Tin};
use tracing::debug;

/// Computes the tax code of a citizen.
///
/// The result depends only on the citizen's data and is always 16
/// characters long.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`](crate::CodecError::InvalidCharacter)
/// if the place code contains something other than ASCII letters and digits.
pub fn encode(citizen: &Citizen) -> CodecResult<Tin> {
    let date_of_birth = citizen.date_of_birth();
    let place_code = citizen.place_of_birth().code();

    let mut code = String::with_capacity(TIN_LENGTH);
    code.push_str(&triplet(citizen.surname()));
    code.push_str(&triplet(citizen.name()));
    code.push_str(&year_pair(date_of_birth));
    code.push(month_char(date_of_birth));
    code.push_str(&day_gender_pair(date_of_birth, citizen.gender()));
    code.push_str(place_code.as_str());

    let control = control_char(&code)?;
    code.push(control);

    debug!("Encoded tax code for place of birth {}", place_code);
    Ok(Tin::new(code)?)
}
