//! Heuristic evaluation function for Reversi board positions
//!
//! This module provides the evaluation used at the leaves of the minimax
//! search. Every term is a ratio of a signed difference to a sum of
//! magnitudes, so each lies in [-1, 1] and flips sign exactly when the
//! player is swapped:
//! - Corners captured
//! - Disk stability
//! - Disk parity
//! - Static square values
//! - Mobility

use crate::board::{Board, Disk, Player, BOARD_SIZE};

use super::stability::stability;
use super::weights::{HeuristicWeight, CORNERS, POSITION_VALUES};

/// `sign * diff / sum`, or 0 when there is nothing to compare.
#[inline]
fn ratio(player: Player, diff: f64, sum: f64) -> f64 {
    if sum == 0.0 {
        0.0
    } else {
        f64::from(player.sign()) * diff / sum
    }
}

/// Evaluate the board from the perspective of the given player.
///
/// Returns a value in [-1, 1] where 1 is the best possible rating for
/// `player`. `evaluate(board, Dark) == -evaluate(board, Light)` holds
/// exactly.
///
/// Once neither side can move only the final disk count matters, so the
/// composite collapses to disk parity.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> f64 {
    if board.game_over() {
        return disk_parity(board, player);
    }

    (HeuristicWeight::CORNERS * corners_captured(board, player)
        + HeuristicWeight::STABILITY * stability(board, player)
        + HeuristicWeight::PARITY * disk_parity(board, player)
        + HeuristicWeight::POSITIONAL * static_positional(board, player)
        + HeuristicWeight::MOBILITY * mobility(board, player))
        / HeuristicWeight::TOTAL
}

/// Signed share of the occupied corners.
pub fn corners_captured(board: &Board, player: Player) -> f64 {
    let mut diff = 0.0;
    let mut taken = 0.0;

    for (col, row) in CORNERS {
        let disk = board.at(col, row);
        diff += f64::from(disk.sign());
        if disk != Disk::Empty {
            taken += 1.0;
        }
    }

    ratio(player, diff, taken)
}

/// Disk difference relative to the number of disks on the board.
pub fn disk_parity(board: &Board, player: Player) -> f64 {
    ratio(
        player,
        f64::from(board.disk_difference()),
        board.disk_no() as f64,
    )
}

/// Static square values summed per color.
pub fn static_positional(board: &Board, player: Player) -> f64 {
    let mut dark_score = 0;
    let mut light_score = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match board.at(col, row) {
                Disk::Dark => dark_score += POSITION_VALUES[row][col],
                Disk::Light => light_score += POSITION_VALUES[row][col],
                Disk::Empty => {}
            }
        }
    }

    ratio(
        player,
        f64::from(dark_score - light_score),
        f64::from(dark_score.abs() + light_score.abs()),
    )
}

/// Difference in the number of legal moves.
pub fn mobility(board: &Board, player: Player) -> f64 {
    let dark = board.legal_moves(Player::Dark).len() as f64;
    let light = board.legal_moves(Player::Light).len() as f64;

    ratio(player, dark - light, dark + light)
}
