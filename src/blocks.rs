//! Splitting of the padded stream into data blocks.

use tracing::trace;

use crate::bits::BitString;
use crate::error::{Error, Result};
use crate::planner::block_count;
use crate::types::{CorrectionLevel, Version};

/// Ordered data blocks, each one a whole number of bytes. Concatenated in
/// order they give back the segmented stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSet {
    blocks: Vec<BitString>,
}

impl BlockSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, BitString> {
        self.blocks.iter()
    }

    /// Size of every block in bytes.
    pub fn byte_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.blocks.iter().map(|b| b.len() / 8)
    }

    /// Every block packed into bytes.
    pub fn to_bytes(&self) -> Vec<Vec<u8>> {
        self.blocks.iter().map(BitString::to_bytes).collect()
    }

    /// All blocks concatenated back into one stream.
    pub fn concat(&self) -> BitString {
        self.blocks.iter().flat_map(|b| b.iter()).collect()
    }

    pub fn into_inner(self) -> Vec<BitString> {
        self.blocks
    }
}

impl core::ops::Index<usize> for BlockSet {
    type Output = BitString;

    fn index(&self, index: usize) -> &Self::Output {
        &self.blocks[index]
    }
}

impl IntoIterator for BlockSet {
    type Item = BitString;
    type IntoIter = std::vec::IntoIter<BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockSet {
    type Item = &'a BitString;
    type IntoIter = core::slice::Iter<'a, BitString>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Splits a byte-aligned stream into the number of blocks prescribed for
/// `(level, version)`.
///
/// With `total` bytes and `n` blocks every block gets `total / n` bytes, and
/// the last `total % n` blocks get one more. Fails with
/// [Error::UnalignedBitstream] if the stream is not a whole number of bytes.
pub fn segment(bits: &BitString, level: CorrectionLevel, version: Version) -> Result<BlockSet> {
    if !bits.is_byte_aligned() {
        return Err(Error::UnalignedBitstream { len: bits.len() });
    }

    let total = bits.len() / 8;
    let count = block_count(level, version);
    let base = total / count;
    let overflow = total % count;
    trace!(%level, %version, total, count, base, overflow, "segmenting stream");

    let stream = bits.as_slice();
    let mut blocks = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let size = if i >= count - overflow { base + 1 } else { base };
        let end = start + size * 8;
        blocks.push(BitString::from(&stream[start..end]));
        start = end;
    }
    debug_assert_eq!(start, stream.len());

    Ok(BlockSet { blocks })
}
