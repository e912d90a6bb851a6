//! Byte alignment and filler bytes up to the symbol capacity.

use tracing::trace;

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::planner::capacity_bits;
use crate::tables::PAD_BYTES;
use crate::types::{CorrectionLevel, Version};

/// Pads `bits` to the exact capacity of `(level, version)`.
///
/// Zero bits are appended up to the next byte boundary, then the filler bytes
/// `11101100` and `00010001` are appended alternately, always starting with
/// `11101100`, until the capacity is reached.
///
/// Fails with [Error::EmptyInput] on an empty stream and with
/// [Error::DataTooLong] if the aligned stream exceeds the capacity.
pub fn pad(bits: &BitString, level: CorrectionLevel, version: Version) -> Result<BitString> {
    if bits.is_empty() {
        return Err(Error::EmptyInput);
    }

    let capacity = capacity_bits(level, version);
    let zeros = (8 - bits.len() % 8) % 8;
    let aligned = bits.len() + zeros;
    if aligned > capacity {
        return Err(Error::DataTooLong { required: aligned, capacity });
    }

    let mut out = BitString::with_capacity(capacity);
    out.extend_from(bits);
    out.push_zeros(zeros);

    let fillers = (capacity - aligned) / 8;
    for &byte in PAD_BYTES.iter().cycle().take(fillers) {
        out.append_bits(byte as u32, 8)?;
    }
    trace!(%level, %version, zeros, fillers, "padded stream");

    debug_assert_eq!(out.len(), capacity);
    Ok(out)
}
