//! # Level Data
//!
//! Opaque data tables the game logic draws from: the wall silhouette
//! catalog, the two terminal-mode faces, and the background melody.

use crate::config::GRID_ROWS;

/// The ten wall silhouettes. Bit `c` set means column `c` is a wall cell;
/// clear bits are the gaps the player can slip through. Every mask marks
/// four to six columns, leaving two to four gaps.
pub const WALL_MASKS: [u8; 10] = [
    0b0001_1111, // ███████░░░  cols 0-4
    0b1111_1000, //             cols 3-7
    0b1110_0111, //             cols 0-2 and 5-7
    0b1111_1100, //             cols 2-7
    0b0011_1111, //             cols 0-5
    0b1101_1011, //             cols 0,1,3,4,6,7
    0b0111_1110, //             cols 1-6
    0b0111_0111, //             cols 0-2 and 4-6
    0b1110_1110, //             cols 1-3 and 5-7
    0b0101_0101, //             cols 0,2,4,6 (comb)
];

/// Smiley shown after a win. One byte per row, bit `c` = column `c` lit.
/// Eyes on rows 4-6, mouth curving up toward the player row.
pub const WIN_FACE: [u8; GRID_ROWS] = [
    0b0011_1100, // row 0
    0b0100_0010,
    0b1000_0001,
    0b0000_0000,
    0b1110_0111, // eyes
    0b1010_0101,
    0b1110_0111,
    0b0000_0000,
];

/// Frown shown after a collision. Same eyes, mouth curving the other way.
pub const LOSS_FACE: [u8; GRID_ROWS] = [
    0b1000_0001, // row 0
    0b0100_0010,
    0b0011_1100,
    0b0000_0000,
    0b1110_0111, // eyes
    0b1010_0101,
    0b1110_0111,
    0b0000_0000,
];

/// Background melody, one frequency (Hz) per music-task activation. The
/// note index wraps back to the start after the last entry.
pub const MELODY: [f32; 17] = [
    164.81, // E
    164.81, // E
    164.81, // E
    130.81, // C
    164.81, // E
    195.99, // G
    195.99, // G
    164.81, // E
    195.99, // G
    164.81, // E
    220.00, // A
    246.94, // B
    233.08, // A#
    220.00, // A
    195.99, // G
    164.81, // E
    195.99, // G
];

// ---------------------------------------------------------------------------
// Unit tests (host-only)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mask_leaves_a_gap() {
        for mask in WALL_MASKS {
            let marked = mask.count_ones();
            assert!((4..=6).contains(&marked), "mask {:#010b}", mask);
            let gaps = 8 - marked;
            assert!((2..=4).contains(&gaps), "mask {:#010b}", mask);
        }
    }

    #[test]
    fn melody_is_audible() {
        for freq in MELODY {
            assert!(freq > 0.0);
        }
    }
}
