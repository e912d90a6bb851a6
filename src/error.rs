//! Error type shared by every stage of the data encoding pipeline.

use thiserror::Error;

use crate::types::CorrectionLevel;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned while turning user data into QR Code data blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character cannot be represented in the selected mode.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index in the input.
        position: usize,
    },

    /// The input has no characters (or no bits, when padding).
    #[error("input is empty")]
    EmptyInput,

    /// No version in 1..=40 can hold the data at this correction level.
    #[error("no suitable version for {required} bits at correction level {level}")]
    NoSuitableVersion {
        /// Correction level the search ran for.
        level: CorrectionLevel,
        /// Number of bits that had to fit (payload only, or payload and header).
        required: usize,
    },

    /// An explicit version number is outside 1..=40.
    #[error("version {0} is out of range (1-40)")]
    VersionOutOfRange(u8),

    /// A raw version number belongs to no version group.
    #[error("no version group contains version {0}")]
    VersionGroupNotFound(u8),

    /// A value is too large for the fixed-width field it is written into.
    #[error("value {value} does not fit in a {width}-bit field")]
    FieldOverflow {
        /// Value that had to be written.
        value: usize,
        /// Width of the field in bits.
        width: u8,
    },

    /// A name is a strict prefix of a known data type name.
    #[error("unknown data type {0:?}")]
    UnknownDataType(String),

    /// The bit stream exceeds the capacity of a pinned level/version.
    #[error("{required} bits do not fit in a capacity of {capacity} bits")]
    DataTooLong {
        /// Bits needed.
        required: usize,
        /// Bits available.
        capacity: usize,
    },

    /// Segmentation needs whole bytes.
    #[error("bit stream of length {len} is not byte aligned")]
    UnalignedBitstream {
        /// Length of the stream in bits.
        len: usize,
    },
}
