//! Weights for Reversi evaluation
//!
//! Relative importance of the composite sub-heuristics and the static
//! square values used by the positional term.

use crate::board::BOARD_SIZE;

/// Weights of the composite heuristic
pub struct HeuristicWeight;

impl HeuristicWeight {
    /// Share of corners held
    pub const CORNERS: f64 = 6.0;
    /// Stable minus flippable disks
    pub const STABILITY: f64 = 5.0;
    /// Raw disk count
    pub const PARITY: f64 = 1.0;
    /// Static square values
    pub const POSITIONAL: f64 = 5.0;
    /// Number of available moves
    pub const MOBILITY: f64 = 1.0;

    /// Sum of all weights
    pub const TOTAL: f64 =
        Self::CORNERS + Self::STABILITY + Self::PARITY + Self::POSITIONAL + Self::MOBILITY;
}

/// Static value of each square.
///
/// Invariant under the eight symmetries of the board: corners are worth
/// most, the squares touching a corner are penalised, edges are mildly
/// positive.
pub const POSITION_VALUES: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [4, -3, 2, 2, 2, 2, -3, 4],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 1, 0, 0, 1, -1, 2],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [4, -3, 2, 2, 2, 2, -3, 4],
];

/// The four corner squares as (column, row)
pub const CORNERS: [(usize, usize); 4] = [
    (0, 0),
    (BOARD_SIZE - 1, BOARD_SIZE - 1),
    (0, BOARD_SIZE - 1),
    (BOARD_SIZE - 1, 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_total() {
        assert_eq!(HeuristicWeight::TOTAL, 18.0);
    }

    #[test]
    fn test_position_values_symmetric() {
        let n = BOARD_SIZE - 1;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let v = POSITION_VALUES[r][c];
                assert_eq!(v, POSITION_VALUES[c][r], "diagonal at ({}, {})", r, c);
                assert_eq!(v, POSITION_VALUES[n - r][c], "horizontal at ({}, {})", r, c);
                assert_eq!(v, POSITION_VALUES[r][n - c], "vertical at ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_corners_most_valuable() {
        let max = POSITION_VALUES.iter().flatten().max().copied();
        for (c, r) in CORNERS {
            assert_eq!(Some(POSITION_VALUES[r][c]), max);
        }
    }
}
