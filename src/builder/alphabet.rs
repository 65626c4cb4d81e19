//! Ready-made input alphabets of single-character symbols.

use crate::core::{InputAlphabet, Symbol};

/// `a` through `z`.
pub fn lowercase_letters() -> InputAlphabet {
    ('a'..='z').map(Symbol::from).collect()
}

/// `A` through `Z`.
pub fn uppercase_letters() -> InputAlphabet {
    ('A'..='Z').map(Symbol::from).collect()
}

/// `0` through `9`.
pub fn digits() -> InputAlphabet {
    ('0'..='9').map(Symbol::from).collect()
}

/// Lowercase letters, uppercase letters and digits.
pub fn alphanumeric() -> InputAlphabet {
    let mut alphabet = lowercase_letters();
    alphabet.extend(uppercase_letters());
    alphabet.extend(digits());
    alphabet
}
