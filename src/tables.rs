//! Static QR Code capacity data. Every per-version table is indexed by
//! `[level][version - 1]` with levels ordered L, M, Q, H.

/// Number of QR Code versions.
pub const VERSION_COUNT: usize = 40;

/// Maximum number of data bits (mode indicator, count indicator, payload and
/// padding included) per correction level and version.
pub const DATA_CAPACITY: [[u16; VERSION_COUNT]; 4] = [
    // L
    [152, 272, 440, 640, 864, 1088, 1248, 1552, 1856, 2192, 2592, 2960, 3424, 3688, 4184, 4712, 5176, 5768, 6360, 6888,
     7456, 8048, 8752, 9392, 10208, 10960, 11744, 12248, 13048, 13880, 14744, 15640, 16568, 17528, 18448, 19472, 20528, 21616, 22496, 23648],
    // M
    [128, 224, 352, 512, 688, 864, 992, 1232, 1456, 1728, 2032, 2320, 2672, 2920, 3320, 3624, 4056, 4504, 5016, 5352,
     5712, 6256, 6880, 7312, 8000, 8496, 9024, 9544, 10136, 10984, 11640, 12328, 13048, 13800, 14496, 15312, 15936, 16816, 17728, 18672],
    // Q
    [104, 176, 272, 384, 496, 608, 704, 880, 1056, 1232, 1440, 1648, 1952, 2088, 2360, 2600, 2936, 3176, 3560, 3880,
     4096, 4544, 4912, 5312, 5744, 6032, 6464, 6968, 7288, 7880, 8264, 8920, 9368, 9848, 10288, 10832, 11408, 12016, 12656, 13328],
    // H
    [72, 128, 208, 288, 368, 480, 528, 688, 800, 976, 1120, 1264, 1440, 1576, 1784, 2024, 2264, 2504, 2728, 3080,
     3248, 3536, 3712, 4112, 4304, 4768, 5024, 5288, 5608, 5960, 6344, 6760, 7208, 7688, 7888, 8432, 8768, 9136, 9776, 10208],
];

/// Number of data blocks per correction level and version.
pub const BLOCK_COUNT: [[u8; VERSION_COUNT]; 4] = [
    [1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8,
     8, 9, 9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25],
    [1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16,
     17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49],
    [1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20,
     23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68],
    [1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25,
     25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81],
];

/// Number of error correction codewords per block, per correction level and
/// version. Consumed by the Reed-Solomon stage, not by this crate.
pub const CORRECTION_BYTES: [[u8; VERSION_COUNT]; 4] = [
    [7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28,
     28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    [10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26,
     26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
    [13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30,
     28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    [17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28,
     30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
];

/// Inclusive `(min, max)` version bounds of each version group.
pub const VERSION_GROUPS: [(u8, u8); 3] = [(1, 9), (10, 26), (27, 40)];

/// Character count indicator width in bits, indexed by `[data type][group]`
/// with data types ordered number, alphanum, bytes. Literal values, the
/// widths do not follow a formula.
pub const COUNT_INDICATOR_WIDTH: [[u8; 3]; 3] = [
    [10, 12, 14],
    [9, 11, 13],
    [8, 16, 16],
];

/// Width of the mode indicator in bits.
pub const MODE_INDICATOR_WIDTH: u8 = 4;

/// The 45 characters allowed in alphanumeric mode; a character's code is its
/// position in this table.
pub const ALPHANUMERIC_CHARSET: [u8; 45] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Filler bytes alternated after byte alignment until the capacity is reached.
pub const PAD_BYTES: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Alphanumeric code of `c`, if `c` is part of the alphanumeric charset.
pub fn alphanumeric_code(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    ALPHANUMERIC_CHARSET.iter()
        .position(|&r| r == c as u8)
        .map(|p| p as u8)
}
