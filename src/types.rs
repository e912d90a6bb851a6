//! Small value types indexing the capacity tables.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::tables::VERSION_GROUPS;

/// Error correction level, ordered by increasing redundancy (and therefore
/// decreasing data capacity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl CorrectionLevel {
    /// All levels from lowest to highest redundancy.
    pub const ALL: [CorrectionLevel; 4] = [Self::L, Self::M, Self::Q, Self::H];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::L => 'L',
            Self::M => 'M',
            Self::Q => 'Q',
            Self::H => 'H',
        }
    }
}

impl Default for CorrectionLevel {
    fn default() -> Self {
        Self::M
    }
}

impl fmt::Display for CorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for CorrectionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let level = match (chars.next(), chars.next()) {
            (Some('L'), None) => Self::L,
            (Some('M'), None) => Self::M,
            (Some('Q'), None) => Self::Q,
            (Some('H'), None) => Self::H,
            (None, _) => return Err(Error::EmptyInput),
            (Some(c), None) => return Err(Error::InvalidCharacter { character: c, position: 0 }),
            (Some(_), Some(c)) => return Err(Error::InvalidCharacter { character: c, position: 1 }),
        };
        Ok(level)
    }
}

/// QR Code version (symbol size), always within `1..=40`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Version(u8);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    /// Creates a version, failing with [Error::VersionOutOfRange] outside 1-40.
    pub const fn new(value: u8) -> Result<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(Error::VersionOutOfRange(value))
        }
    }

    /// Converts a 0-based table index back into a version. Returns `None`
    /// past the last version.
    pub(crate) const fn from_index(index: usize) -> Option<Self> {
        if index < Self::MAX.0 as usize {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// 0-based index into the per-version tables. This is the only place the
    /// 1-based public numbering is converted.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The following version, `None` after version 40.
    pub const fn next(self) -> Option<Self> {
        if self.0 < Self::MAX.0 {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }

    /// Iterates over every version from 1 to 40.
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Version> for u8 {
    fn from(v: Version) -> u8 {
        v.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Range of versions sharing the same character count indicator widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionGroup {
    /// Versions 1-9
    Small = 0,
    /// Versions 10-26
    Medium = 1,
    /// Versions 27-40
    Large = 2,
}

impl VersionGroup {
    const ALL: [VersionGroup; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Group of a validated version. Infallible since [Version] is always in range.
    pub fn of(version: Version) -> Self {
        match Self::from_number(version.value()) {
            Ok(group) => group,
            Err(_) => unreachable!("version {version} outside every version group"),
        }
    }

    /// Group of a raw version number, [Error::VersionGroupNotFound] when no
    /// group contains it.
    pub fn from_number(version: u8) -> Result<Self> {
        Self::ALL.into_iter()
            .zip(VERSION_GROUPS)
            .find(|(_, (min, max))| (*min..=*max).contains(&version))
            .map(|(group, _)| group)
            .ok_or(Error::VersionGroupNotFound(version))
    }

    /// 1-based group number (1, 2 or 3).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Kind of user data, selects the mode indicator and the count indicator width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    Number = 0,
    #[cfg_attr(feature = "serde", serde(rename = "alphanum"))]
    Alphanumeric = 1,
    /// Reserved: has table entries but no encoding rule.
    Bytes = 2,
}

impl DataType {
    /// 4-bit mode indicator written at the start of the stream.
    pub const fn mode_bits(self) -> u32 {
        match self {
            Self::Number => 0b0001,
            Self::Alphanumeric => 0b0010,
            Self::Bytes => 0b0100,
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Alphanumeric => "alphanum",
            Self::Bytes => "bytes",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "number" => Ok(Self::Number),
            "alphanum" => Ok(Self::Alphanumeric),
            "bytes" => Ok(Self::Bytes),
            "" => Err(Error::EmptyInput),
            _ => {
                // report the first character where the input stops matching any name
                let position = ["number", "alphanum", "bytes"].iter()
                    .map(|name| s.bytes().zip(name.bytes()).take_while(|(a, b)| a == b).count())
                    .max()
                    .unwrap_or(0);
                match s[position..].chars().next() {
                    Some(character) => Err(Error::InvalidCharacter { character, position }),
                    None => Err(Error::UnknownDataType(s.to_owned())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(Error::VersionOutOfRange(0)));
        assert_eq!(Version::new(41), Err(Error::VersionOutOfRange(41)));
        assert_eq!(Version::new(1).unwrap().index(), 0);
        assert_eq!(Version::new(40).unwrap().index(), 39);
        assert_eq!(Version::MAX.next(), None);
        assert_eq!(Version::all().count(), 40);
    }

    #[test]
    fn test_version_groups() {
        let group = |v: u8| VersionGroup::of(Version::new(v).unwrap());
        assert_eq!(group(1), VersionGroup::Small);
        assert_eq!(group(9), VersionGroup::Small);
        assert_eq!(group(10), VersionGroup::Medium);
        assert_eq!(group(26), VersionGroup::Medium);
        assert_eq!(group(27), VersionGroup::Large);
        assert_eq!(group(40), VersionGroup::Large);
    }

    #[test]
    fn test_version_group_from_number() {
        assert_eq!(VersionGroup::from_number(1).map(VersionGroup::number), Ok(1));
        assert_eq!(VersionGroup::from_number(27).map(VersionGroup::number), Ok(3));
        assert_eq!(VersionGroup::from_number(0), Err(Error::VersionGroupNotFound(0)));
        assert_eq!(VersionGroup::from_number(41), Err(Error::VersionGroupNotFound(41)));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("Q".parse::<CorrectionLevel>(), Ok(CorrectionLevel::Q));
        assert_eq!("".parse::<CorrectionLevel>(), Err(Error::EmptyInput));
        assert!("X".parse::<CorrectionLevel>().is_err());
        assert!("LM".parse::<CorrectionLevel>().is_err());
        assert!(CorrectionLevel::L < CorrectionLevel::H);
        assert_eq!(CorrectionLevel::default(), CorrectionLevel::M);
    }

    #[test]
    fn test_parse_data_type() {
        assert_eq!("alphanum".parse::<DataType>(), Ok(DataType::Alphanumeric));
        assert_eq!(DataType::Number.to_string(), "number");
        assert_eq!(
            "numbers".parse::<DataType>(),
            Err(Error::InvalidCharacter { character: 's', position: 6 })
        );
        assert_eq!("num".parse::<DataType>(), Err(Error::UnknownDataType("num".into())));
        assert_eq!("alpha".parse::<DataType>(), Err(Error::UnknownDataType("alpha".into())));
        assert_eq!(
            "bytez".parse::<DataType>(),
            Err(Error::InvalidCharacter { character: 'z', position: 4 })
        );
    }

    #[test]
    fn test_version_group_matches_table() {
        for version in Version::all() {
            assert_eq!(Ok(VersionGroup::of(version)), VersionGroup::from_number(version.value()));
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_level_wire_form() {
        assert_eq!(serde_json::to_string(&CorrectionLevel::Q).unwrap(), "\"Q\"");
        assert_eq!(serde_json::from_str::<CorrectionLevel>("\"H\"").unwrap(), CorrectionLevel::H);
        assert!(serde_json::from_str::<CorrectionLevel>("\"X\"").is_err());
    }

    #[test]
    fn test_data_type_wire_form() {
        assert_eq!(serde_json::to_string(&DataType::Number).unwrap(), "\"number\"");
        assert_eq!(serde_json::to_string(&DataType::Alphanumeric).unwrap(), "\"alphanum\"");
        assert_eq!(serde_json::to_string(&DataType::Bytes).unwrap(), "\"bytes\"");
        assert_eq!(serde_json::from_str::<DataType>("\"alphanum\"").unwrap(), DataType::Alphanumeric);
        assert!(serde_json::from_str::<DataType>("\"alphanumeric\"").is_err());
    }

    #[test]
    fn test_version_wire_form() {
        assert_eq!(serde_json::to_string(&Version::new(7).unwrap()).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Version>("40").unwrap(), Version::MAX);

        let err = serde_json::from_str::<Version>("41").unwrap_err();
        assert!(err.to_string().contains(&Error::VersionOutOfRange(41).to_string()));
        assert!(serde_json::from_str::<Version>("0").is_err());
    }
}
