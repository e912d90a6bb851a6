//! Encoding options and the end-to-end data encoding pipeline.

use tracing::debug;

use crate::bits::BitString;
use crate::blocks::{segment, BlockSet};
use crate::error::{Error, Result};
use crate::header::{build_header, Header};
use crate::high_level::Data;
use crate::padding::pad;
use crate::planner::capacity_bits;
use crate::types::{CorrectionLevel, DataType, Version};

/// Encoding configuration: the correction level and an optional fixed version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    level: CorrectionLevel,
    version: Option<Version>,
}

impl EncodeOptions {
    /// Default options: level M and automatic version selection.
    pub const fn new() -> Self {
        Self { level: CorrectionLevel::M, version: None }
    }

    #[inline]
    pub const fn level(&self) -> CorrectionLevel {
        self.level
    }

    /// Sets the error correction level.
    pub const fn correction_level(mut self, level: CorrectionLevel) -> Self {
        self.level = level;
        self
    }

    /// Returns the pinned version, if any.
    #[inline]
    pub const fn pinned_version(&self) -> Option<Version> {
        self.version
    }

    /// Pins the version instead of selecting the smallest one that fits.
    pub const fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Pins the version from a raw number, failing with
    /// [Error::VersionOutOfRange] outside 1-40.
    pub fn version_number(self, version: u8) -> Result<Self> {
        Ok(self.version(Version::new(version)?))
    }
}

/// Result of an encoding request: header, payload, padded stream and blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedData {
    header: Header,
    payload: BitString,
    level: CorrectionLevel,
    stream: BitString,
    blocks: BlockSet,
}

impl EncodedData {
    /// 4-bit mode indicator.
    pub fn mode_indicator(&self) -> &BitString {
        &self.header.mode_indicator
    }

    /// Character count indicator.
    pub fn count_indicator(&self) -> &BitString {
        &self.header.count_indicator
    }

    /// Mode-encoded user data.
    pub fn payload(&self) -> &BitString {
        &self.payload
    }

    pub fn version(&self) -> Version {
        self.header.version
    }

    pub fn correction_level(&self) -> CorrectionLevel {
        self.level
    }

    /// Header, payload and padding, exactly as long as the symbol capacity.
    pub fn stream(&self) -> &BitString {
        &self.stream
    }

    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    /// Hands the blocks over to the caller.
    pub fn into_blocks(self) -> BlockSet {
        self.blocks
    }
}

/// Runs the whole data encoding pipeline: mode encoding, version selection,
/// header, padding and segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrDataEncoder {
    options: EncodeOptions,
}

impl QrDataEncoder {
    pub const fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub const fn options(&self) -> EncodeOptions {
        self.options
    }

    pub fn encode(&self, data: &Data) -> Result<EncodedData> {
        let level = self.options.level;
        let payload = data.encode()?;
        let header = self.header(data.data_type(), data.char_count(), payload.len())?;

        let mut bits = header.to_bits();
        bits.extend_from(&payload);
        let stream = pad(&bits, level, header.version)?;
        let blocks = segment(&stream, level, header.version)?;
        debug!(%level, version = %header.version, payload_bits = payload.len(), blocks = blocks.len(), "encoded data");

        Ok(EncodedData { header, payload, level, stream, blocks })
    }

    /// Encodes a number, see [encode_numeric](crate::encode_numeric).
    pub fn encode_number(&self, n: u64) -> Result<EncodedData> {
        self.encode(&Data::Number(n))
    }

    /// Encodes an alphanumeric string, see
    /// [encode_alphanumeric](crate::encode_alphanumeric).
    pub fn encode_str(&self, s: &str) -> Result<EncodedData> {
        self.encode(&Data::Alphanumeric(s.to_owned()))
    }

    fn header(&self, data_type: DataType, char_count: usize, payload_bits: usize) -> Result<Header> {
        let level = self.options.level;
        match self.options.version {
            None => build_header(data_type, char_count, payload_bits, level),
            Some(version) => {
                let header = Header::for_version(data_type, char_count, version)?;
                let required = header.bit_len() + payload_bits;
                let capacity = capacity_bits(level, version);
                if required > capacity {
                    return Err(Error::DataTooLong { required, capacity });
                }
                Ok(header)
            }
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_options_wire_form() {
        let options = EncodeOptions::new().correction_level(CorrectionLevel::Q).version_number(7).unwrap();
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"level":"Q","version":7}"#);
        assert_eq!(serde_json::from_str::<EncodeOptions>(&json).unwrap(), options);
        assert_eq!(serde_json::to_string(&EncodeOptions::new()).unwrap(), r#"{"level":"M","version":null}"#);
    }

    #[test]
    fn test_options_missing_fields_use_defaults() {
        let options: EncodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EncodeOptions::new());
        assert_eq!(options.level(), CorrectionLevel::M);

        let options: EncodeOptions = serde_json::from_str(r#"{"version":3}"#).unwrap();
        assert_eq!(options.level(), CorrectionLevel::M);
        assert_eq!(options.pinned_version(), Some(Version::new(3).unwrap()));
    }

    #[test]
    fn test_options_reject_out_of_range_version() {
        let err = serde_json::from_str::<EncodeOptions>(r#"{"level":"L","version":41}"#).unwrap_err();
        assert!(err.to_string().contains(&Error::VersionOutOfRange(41).to_string()));
    }
}
