//! Boundary with the error correction stage.
//!
//! Reed-Solomon codeword generation is not part of this crate. Implementors
//! of [CorrectionCoder] receive the data blocks in order, together with the
//! level and version that determine the number of correction codewords.

use crate::blocks::BlockSet;
use crate::tables::CORRECTION_BYTES;
use crate::types::{CorrectionLevel, Version};

/// Number of error correction codewords generated for each data block.
pub fn correction_bytes_per_block(level: CorrectionLevel, version: Version) -> usize {
    CORRECTION_BYTES[level.index()][version.index()] as usize
}

/// Generates error correction codewords from segmented data blocks.
pub trait CorrectionCoder {
    /// Returns one codeword vector per data block, in block order. Every
    /// vector holds [correction_bytes_per_block] codewords.
    fn encode_blocks(&self, blocks: &BlockSet, level: CorrectionLevel, version: Version) -> Vec<Vec<u8>>;
}
