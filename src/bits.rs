use core::{fmt, iter, str::FromStr};

use crate::error::{Error, Result};

/// A fixed-width unsigned field, written most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitfield(u32);

impl Bitfield {
    /// Packs `value` into a field of `width` bits (at most 24). Values that
    /// need more than `width` bits are rejected, never truncated.
    pub const fn new(value: u32, width: u8) -> Result<Self> {
        if width > 24 || (value >> width) != 0 {
            return Err(Error::FieldOverflow { value: value as usize, width });
        }

        Ok(Self((value << 8) | width as u32))
    }

    #[inline]
    pub const fn size(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0 >> 8
    }

    #[inline]
    pub const fn as_pair(&self) -> (u32, u32) {
        (self.0 >> 8, self.0 & 0xFF)
    }
}

impl iter::IntoIterator for Bitfield {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        let (value, count) = self.as_pair();
        Bits { value, count }
    }
}

pub struct Bits {
    value: u32,
    count: u32,
}

impl iter::Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            self.count -= 1;
            Some((self.value >> self.count) & 1 != 0)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Bits {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.count > 0 {
            let bit = (self.value & 1) != 0;
            self.value >>= 1;
            self.count -= 1;
            Some(bit)
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Bits {}
impl iter::FusedIterator for Bits {}

/// Append-only sequence of bits. Displays as a string of `'0'` and `'1'`
/// in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self { bits: Vec::with_capacity(bits) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    pub fn is_byte_aligned(&self) -> bool {
        self.bits.len() % 8 == 0
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends a fixed-width field.
    pub fn push_field(&mut self, field: Bitfield) {
        self.bits.extend(field);
    }

    /// Appends `value` on `width` bits, see [Bitfield::new].
    pub fn append_bits(&mut self, value: u32, width: u8) -> Result<()> {
        self.push_field(Bitfield::new(value, width)?);
        Ok(())
    }

    /// Appends `count` zero bits.
    pub fn push_zeros(&mut self, count: usize) {
        self.bits.resize(self.bits.len() + count, false);
    }

    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Packs the bits into bytes, most significant bit first. A trailing
    /// partial byte is padded with zeros on the right.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; (self.bits.len() + 7) / 8];
        for (i, &bit) in self.bits.iter().enumerate() {
            bytes[i >> 3] |= u8::from(bit) << (7 - (i & 7));
        }
        bytes
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        Self { bits: bits.to_vec() }
    }
}

impl iter::FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl iter::Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                character => Err(Error::InvalidCharacter { character, position }),
            })
            .collect()
    }
}
