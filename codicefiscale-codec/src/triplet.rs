//! Surname and name triplets.
//!
//! Both the surname and the given name go through the same rule:
//!
//! | consonants | triplet                                   |
//! |------------|-------------------------------------------|
//! | 3 or more  | first three consonants                    |
//! | 2          | both consonants + first vowel             |
//! | 1          | the consonant + first two vowels          |
//! | 0          | first three vowels                        |
//!
//! Any triplet still shorter than three characters is padded with `X`.

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

const FILLER: char = 'X';

const TRIPLET_LENGTH: usize = 3;

/// Computes the 3-character triplet for a surname or a name.
///
/// The text is uppercased and every character that is not a letter
/// (spaces, apostrophes, hyphens, digits) is ignored. Common accented
/// letters count as their base letter.
#[must_use]
pub fn triplet(text: &str) -> String {
    let (vowels, consonants): (Vec<char>, Vec<char>) =
        letters(text).partition(|c| VOWELS.contains(c));

    let taken_vowels = TRIPLET_LENGTH.saturating_sub(consonants.len());
    let mut triplet: String = consonants
        .iter()
        .take(TRIPLET_LENGTH)
        .chain(vowels.iter().take(taken_vowels))
        .collect();

    while triplet.len() < TRIPLET_LENGTH {
        triplet.push(FILLER);
    }
    triplet
}

fn letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .map(fold_accent)
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_alphabetic)
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'À' | 'Á' => 'A',
        'è' | 'é' | 'È' | 'É' => 'E',
        'ì' | 'í' | 'Ì' | 'Í' => 'I',
        'ò' | 'ó' | 'Ò' | 'Ó' => 'O',
        'ù' | 'ú' | 'Ù' | 'Ú' => 'U',
        other => other,
    }
}
