//! Disk stability analysis
//!
//! A disk is *stable* when no sequence of moves can ever flip it again, and
//! *semi-stable* when neither player can flip it with their very next move.
//! Both classifications are computed fresh from a single board.

use crate::board::{Board, Disk, Player, BOARD_SIZE, TOTAL_CELLS};

/// Per-square flags indexed `[row][col]`
pub type DiskGrid = [[bool; BOARD_SIZE]; BOARD_SIZE];

/// One direction per line axis: two diagonals, vertical, horizontal.
/// The opposite direction is covered by negation.
const AXES: [(i32, i32); 4] = [(-1, -1), (0, -1), (1, -1), (1, 0)];

#[inline]
fn on_board(col: i32, row: i32) -> bool {
    col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
}

/// Every square on the row, column and both diagonals through the square
/// is occupied, so no move can ever be played on any of its lines.
fn in_full_lines(board: &Board, col: usize, row: usize) -> bool {
    if board.at(col, row) == Disk::Empty {
        return false;
    }

    for &(dc, dr) in &AXES {
        for sign in [-1, 1] {
            let (dc, dr) = (dc * sign, dr * sign);
            let mut c = col as i32 + dc;
            let mut r = row as i32 + dr;
            while on_board(c, r) {
                if board.at(c as usize, r as usize) == Disk::Empty {
                    return false;
                }
                c += dc;
                r += dr;
            }
        }
    }

    true
}

/// Each axis through the square ends, on at least one side, at the board
/// edge or at a stable disk of the same color.
fn anchored(board: &Board, stable: &DiskGrid, col: usize, row: usize, disk: Disk) -> bool {
    let side_holds = |c: i32, r: i32| {
        !on_board(c, r)
            || (stable[r as usize][c as usize] && board.at(c as usize, r as usize) == disk)
    };

    AXES.iter().all(|&(dc, dr)| {
        let (col, row) = (col as i32, row as i32);
        side_holds(col + dc, row + dr) || side_holds(col - dc, row - dr)
    })
}

/// Find all disks that can never be flipped.
///
/// Seeds with disks whose four lines are full, then grows the set until a
/// full pass adds nothing. Growth is monotone, so at most `TOTAL_CELLS`
/// passes are needed.
pub fn stable_disks(board: &Board) -> DiskGrid {
    let mut stable = [[false; BOARD_SIZE]; BOARD_SIZE];

    for (row, flags) in stable.iter_mut().enumerate() {
        for (col, flag) in flags.iter_mut().enumerate() {
            *flag = in_full_lines(board, col, row);
        }
    }

    for _ in 0..TOTAL_CELLS {
        let mut changed = false;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let disk = board.at(col, row);
                if stable[row][col] || disk == Disk::Empty {
                    continue;
                }
                if anchored(board, &stable, col, row, disk) {
                    stable[row][col] = true;
                    changed = true;
                }
            }
        }

        if !changed {
            break;
        }
    }

    stable
}

/// Find all disks that survive every one-ply reply of either player.
pub fn semi_stable_disks(board: &Board) -> DiskGrid {
    let mut semi_stable = [[false; BOARD_SIZE]; BOARD_SIZE];
    for (mv, disk) in board.squares() {
        semi_stable[mv.row as usize][mv.col as usize] = disk != Disk::Empty;
    }

    for player in Player::ALL {
        for (_, next) in board.next_boards(player) {
            for (mv, disk) in board.squares() {
                if disk != Disk::Empty && next.get(mv) != disk {
                    semi_stable[mv.row as usize][mv.col as usize] = false;
                }
            }
        }
    }

    semi_stable
}

/// Stability advantage of `player`, in [-1, 1].
///
/// Each stable disk scores +1 for its owner and each disk that is neither
/// stable nor semi-stable scores -1; semi-stable disks score nothing.
pub fn stability(board: &Board, player: Player) -> f64 {
    let stable = stable_disks(board);
    let semi_stable = semi_stable_disks(board);

    let mut dark_score = 0.0;
    let mut light_score = 0.0;

    for (mv, disk) in board.squares() {
        let (r, c) = (mv.row as usize, mv.col as usize);
        let value = if stable[r][c] {
            1.0
        } else if !semi_stable[r][c] {
            -1.0
        } else {
            0.0
        };

        match disk {
            Disk::Dark => dark_score += value,
            Disk::Light => light_score += value,
            Disk::Empty => {}
        }
    }

    let sum = f64::abs(dark_score) + f64::abs(light_score);
    if sum == 0.0 {
        0.0
    } else {
        f64::from(player.sign()) * (dark_score - light_score) / sum
    }
}
