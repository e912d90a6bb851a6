//! QR Code data encoding.
//!
//! Turns numeric or alphanumeric user data into the padded bit stream of a QR
//! Code, split into the data blocks expected by the error correction stage.
//! The pipeline is made of independent steps that can also be used alone:
//!
//! 1. [encode_numeric] / [encode_alphanumeric]: mode-specific packing;
//! 2. [select_version]: smallest version holding payload and header;
//! 3. [build_header]: mode indicator and character count indicator;
//! 4. [pad]: byte alignment and filler bytes up to the capacity;
//! 5. [segment]: split into blocks.
//!
//! ```
//! use qrdata::{CorrectionLevel, EncodeOptions, QrDataEncoder};
//!
//! let options = EncodeOptions::new().correction_level(CorrectionLevel::M);
//! let encoded = QrDataEncoder::new(options).encode_str("HELLO").unwrap();
//!
//! assert_eq!(encoded.version().value(), 1);
//! assert_eq!(encoded.blocks().len(), 1);
//! assert_eq!(encoded.stream().len(), 128);
//! ```

pub mod tables;
pub mod ecc;

mod bits;
mod blocks;
mod builder;
mod error;
mod header;
mod high_level;
mod padding;
mod planner;
mod types;

pub use bits::{BitString, Bitfield, Bits};
pub use blocks::{segment, BlockSet};
pub use builder::{EncodeOptions, EncodedData, QrDataEncoder};
pub use error::{Error, Result};
pub use header::{build_header, Header};
pub use high_level::{encode_alphanumeric, encode_numeric, encode_numeric_digits, Data};
pub use padding::pad;
pub use planner::{
    block_count, can_store, capacity_bits, count_indicator_width, header_bits,
    min_version_for_bits, select_version, select_versions, LevelVersions,
};
pub use types::{CorrectionLevel, DataType, Version, VersionGroup};
