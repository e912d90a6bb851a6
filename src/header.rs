//! Mode indicator and character count indicator.

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::planner::{count_indicator_width, select_version};
use crate::tables::MODE_INDICATOR_WIDTH;
use crate::types::{CorrectionLevel, DataType, Version};

/// Service fields written before the payload, with the version they were
/// sized for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub mode_indicator: BitString,
    pub count_indicator: BitString,
    pub version: Version,
}

impl Header {
    /// Builds the header for a known version. Fails with
    /// [Error::FieldOverflow](crate::Error::FieldOverflow) if `char_count`
    /// does not fit in the count indicator of that version.
    pub fn for_version(data_type: DataType, char_count: usize, version: Version) -> Result<Self> {
        let mut mode_indicator = BitString::with_capacity(MODE_INDICATOR_WIDTH as usize);
        mode_indicator.append_bits(data_type.mode_bits(), MODE_INDICATOR_WIDTH)?;

        let width = count_indicator_width(data_type, version);
        let mut count_indicator = BitString::with_capacity(width as usize);
        let count = u32::try_from(char_count).map_err(|_| Error::FieldOverflow { value: char_count, width })?;
        count_indicator.append_bits(count, width)?;

        Ok(Self { mode_indicator, count_indicator, version })
    }

    /// Size of both indicators in bits.
    pub fn bit_len(&self) -> usize {
        self.mode_indicator.len() + self.count_indicator.len()
    }

    /// Both indicators concatenated.
    pub fn to_bits(&self) -> BitString {
        let mut bits = self.mode_indicator.clone();
        bits.extend_from(&self.count_indicator);
        bits
    }
}

/// Picks the version for a payload of `payload_bits` bits and builds the mode
/// and count indicators for it. `char_count` is the number of characters of
/// the user data, not its size in bits.
pub fn build_header(
    data_type: DataType,
    char_count: usize,
    payload_bits: usize,
    level: CorrectionLevel,
) -> Result<Header> {
    let version = select_version(payload_bits, level, data_type)?;
    Header::for_version(data_type, char_count, version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_header_number_small() {
        let header = build_header(DataType::Number, 3, 10, CorrectionLevel::M).unwrap();
        assert_eq!(header.mode_indicator.to_string(), "0001");
        assert_eq!(header.count_indicator.to_string(), "0000000011");
        assert_eq!(header.version, Version::new(1).unwrap());
        assert_eq!(header.bit_len(), 14);
    }

    #[test]
    fn test_header_number_level_l() {
        let header = build_header(DataType::Number, 10, 34, CorrectionLevel::L).unwrap();
        assert_eq!(header.mode_indicator.to_string(), "0001");
        assert_eq!(header.count_indicator.to_string(), "0000001010");
    }

    #[test]
    fn test_header_alphanumeric() {
        let header = build_header(DataType::Alphanumeric, 31, 171, CorrectionLevel::H).unwrap();
        assert_eq!(header.to_bits().to_string(), "0010000011111");
        assert_eq!(header.version, Version::new(3).unwrap());
    }

    #[test]
    fn test_header_wider_count_in_group_two() {
        let header = build_header(DataType::Number, 1000, 3334, CorrectionLevel::L).unwrap();
        assert_eq!(header.version, Version::new(13).unwrap());
        assert_eq!(header.count_indicator.to_string(), "001111101000");
    }

    #[test]
    fn test_header_bytes_mode_indicator() {
        let header = Header::for_version(DataType::Bytes, 5, Version::new(1).unwrap()).unwrap();
        assert_eq!(header.to_bits().to_string(), "010000000101");
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(
            build_header(DataType::Number, 1, 30000, CorrectionLevel::L),
            Err(Error::NoSuitableVersion { level: CorrectionLevel::L, required: 30000 })
        );
        assert_eq!(
            Header::for_version(DataType::Alphanumeric, 512, Version::new(1).unwrap()),
            Err(Error::FieldOverflow { value: 512, width: 9 })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_header_overflow_reports_real_count() {
        let count = u32::MAX as usize + 1;
        assert_eq!(
            Header::for_version(DataType::Number, count, Version::MAX),
            Err(Error::FieldOverflow { value: count, width: 14 })
        );
    }
}
