//! Version selection.
//!
//! The width of the character count indicator depends on the version group,
//! and the version depends on the total size including that indicator. The
//! search first estimates a version from the payload alone, then checks the
//! real size (mode indicator + count indicator + payload) against it and
//! moves at most one version up. A version step always adds more capacity
//! than the largest header, so one correction is enough.

use core::ops::Index;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tables::{BLOCK_COUNT, COUNT_INDICATOR_WIDTH, DATA_CAPACITY, MODE_INDICATOR_WIDTH};
use crate::types::{CorrectionLevel, DataType, Version, VersionGroup};

/// Total data capacity in bits of a level/version pair.
#[inline]
pub fn capacity_bits(level: CorrectionLevel, version: Version) -> usize {
    DATA_CAPACITY[level.index()][version.index()] as usize
}

/// Number of data blocks the stream is split into for a level/version pair.
#[inline]
pub fn block_count(level: CorrectionLevel, version: Version) -> usize {
    BLOCK_COUNT[level.index()][version.index()] as usize
}

/// Width in bits of the character count indicator.
#[inline]
pub fn count_indicator_width(data_type: DataType, version: Version) -> u8 {
    COUNT_INDICATOR_WIDTH[data_type.index()][VersionGroup::of(version).index()]
}

/// Size in bits of the mode and count indicators.
#[inline]
pub fn header_bits(data_type: DataType, version: Version) -> usize {
    MODE_INDICATOR_WIDTH as usize + count_indicator_width(data_type, version) as usize
}

/// Smallest version whose capacity holds `bits`, without any header overhead.
pub fn min_version_for_bits(bits: usize, level: CorrectionLevel) -> Option<Version> {
    DATA_CAPACITY[level.index()].iter()
        .position(|&cap| cap as usize >= bits)
        .and_then(Version::from_index)
}

/// Selects the smallest version able to hold a payload of `payload_bits` plus
/// its mode and count indicators.
///
/// Fails with [Error::NoSuitableVersion] when neither the first estimate nor
/// the version after it can hold the data.
pub fn select_version(payload_bits: usize, level: CorrectionLevel, data_type: DataType) -> Result<Version> {
    let estimate = min_version_for_bits(payload_bits, level)
        .ok_or(Error::NoSuitableVersion { level, required: payload_bits })?;

    let required = payload_bits + header_bits(data_type, estimate);
    if required <= capacity_bits(level, estimate) {
        debug!(%level, %data_type, payload_bits, version = %estimate, "selected version");
        return Ok(estimate);
    }

    // The count indicator may widen if the next version starts a new group.
    let next = estimate.next()
        .ok_or(Error::NoSuitableVersion { level, required })?;
    let required = payload_bits + header_bits(data_type, next);
    if required <= capacity_bits(level, next) {
        debug!(%level, %data_type, payload_bits, version = %next, "selected version after header correction");
        Ok(next)
    } else {
        Err(Error::NoSuitableVersion { level, required })
    }
}

/// Versions selected independently for each correction level, `None` where
/// the data does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelVersions([Option<Version>; 4]);

impl LevelVersions {
    pub fn get(&self, level: CorrectionLevel) -> Option<Version> {
        self.0[level.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CorrectionLevel, Option<Version>)> + '_ {
        CorrectionLevel::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// The highest correction level that still fits, with its version.
    pub fn strongest(&self) -> Option<(CorrectionLevel, Version)> {
        CorrectionLevel::ALL.into_iter()
            .rev()
            .find_map(|level| self.get(level).map(|v| (level, v)))
    }
}

impl Index<CorrectionLevel> for LevelVersions {
    type Output = Option<Version>;

    fn index(&self, level: CorrectionLevel) -> &Self::Output {
        &self.0[level.index()]
    }
}

/// Runs [select_version] for every correction level.
pub fn select_versions(payload_bits: usize, data_type: DataType) -> LevelVersions {
    LevelVersions(CorrectionLevel::ALL.map(|level| select_version(payload_bits, level, data_type).ok()))
}

/// Checks whether `bits` fit in a QR Code.
///
/// * level and version given: the level holds `bits` at or below `version`;
/// * only a level: some version of that level holds `bits`;
/// * only a version: some level holds `bits` at or below `version`;
/// * neither: any level/version holds `bits`.
pub fn can_store(bits: usize, level: Option<CorrectionLevel>, version: Option<Version>) -> bool {
    let fits = |level: CorrectionLevel| match (min_version_for_bits(bits, level), version) {
        (Some(found), Some(max)) => found <= max,
        (Some(_), None) => true,
        (None, _) => false,
    };

    match level {
        Some(level) => fits(level),
        None => CorrectionLevel::ALL.into_iter().any(fits),
    }
}
