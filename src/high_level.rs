//! User data to mode-specific bit encoding (numeric and alphanumeric modes)

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::tables::alphanumeric_code;
use crate::types::DataType;

/// Field width in bits of a numeric group, indexed by the group digit count.
const NUMERIC_GROUP_WIDTH: [u8; 4] = [0, 4, 7, 10];
/// Width of a pair of alphanumeric characters.
const ALPHANUMERIC_PAIR_WIDTH: u8 = 11;
/// Width of a lone trailing alphanumeric character.
const ALPHANUMERIC_SINGLE_WIDTH: u8 = 6;

/// User data accepted by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    /// An unsigned integer, encoded in numeric mode.
    Number(u64),
    /// A string of decimal digits, encoded in numeric mode. Unlike
    /// [Data::Number] it keeps leading zeros and has no length limit.
    Digits(String),
    /// A string of the 45-character alphanumeric set.
    Alphanumeric(String),
}

impl Data {
    pub fn data_type(&self) -> DataType {
        match self {
            Data::Number(_) | Data::Digits(_) => DataType::Number,
            Data::Alphanumeric(_) => DataType::Alphanumeric,
        }
    }

    /// Number of characters of the user data (decimal digits for numbers).
    /// This is the value written in the character count indicator.
    pub fn char_count(&self) -> usize {
        match self {
            Data::Number(n) => decimal_digits(*n),
            Data::Digits(s) | Data::Alphanumeric(s) => s.chars().count(),
        }
    }

    /// Encodes the data in its mode, see [encode_numeric],
    /// [encode_numeric_digits] and [encode_alphanumeric].
    pub fn encode(&self) -> Result<BitString> {
        match self {
            Data::Number(n) => Ok(encode_numeric(*n)),
            Data::Digits(s) => encode_numeric_digits(s),
            Data::Alphanumeric(s) => encode_alphanumeric(s),
        }
    }
}

impl From<u64> for Data {
    fn from(n: u64) -> Self {
        Data::Number(n)
    }
}

fn decimal_digits(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Encodes an integer in numeric mode. The decimal representation is cut in
/// groups of three digits from the left, the last group keeping the one or two
/// remaining digits. Groups are written on 10, 7 or 4 bits depending on their
/// digit count.
pub fn encode_numeric(n: u64) -> BitString {
    let digits = n.to_string();
    // a decimal representation only holds digits and is never empty
    encode_digit_groups(digits.as_bytes())
}

/// Same as [encode_numeric] for an arbitrary long string of decimal digits.
/// Fails with [Error::InvalidCharacter] on the first non-digit and with
/// [Error::EmptyInput] on an empty string.
pub fn encode_numeric_digits(s: &str) -> Result<BitString> {
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some((position, character)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(Error::InvalidCharacter { character, position });
    }

    Ok(encode_digit_groups(s.as_bytes()))
}

fn encode_digit_groups(digits: &[u8]) -> BitString {
    let mut out = BitString::with_capacity(digits.len() / 3 * 10 + 7);
    for group in digits.chunks(3) {
        let value = group.iter().fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32);
        // 999 < 2^10, 99 < 2^7 and 9 < 2^4: a group always fits its field
        out.append_bits(value, NUMERIC_GROUP_WIDTH[group.len()])
            .unwrap_or_else(|e| unreachable!("{e}"));
    }
    out
}

/// Encodes a string in alphanumeric mode. Characters are taken by pairs,
/// a pair `(a, b)` is written as `code(a) * 45 + code(b)` on 11 bits and a
/// lone trailing character as `code(c)` on 6 bits.
///
/// Fails with [Error::InvalidCharacter] if a character is not part of the
/// alphanumeric set (digits, uppercase letters, space and `$%*+-./:`) and with
/// [Error::EmptyInput] on an empty string.
pub fn encode_alphanumeric(s: &str) -> Result<BitString> {
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }

    let codes = s.chars()
        .enumerate()
        .map(|(position, character)| alphanumeric_code(character)
            .map(u32::from)
            .ok_or(Error::InvalidCharacter { character, position }))
        .collect::<Result<Vec<u32>>>()?;

    let mut out = BitString::with_capacity(codes.len() / 2 * 11 + 6);
    for pair in codes.chunks(2) {
        match *pair {
            [a, b] => out.append_bits(a * 45 + b, ALPHANUMERIC_PAIR_WIDTH)?,
            [c] => out.append_bits(c, ALPHANUMERIC_SINGLE_WIDTH)?,
            _ => unreachable!("chunks(2) yields one or two codes"),
        }
    }
    Ok(out)
}
