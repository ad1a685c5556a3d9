//! Board representation for Reversi

pub mod board;


use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// Re-exports
pub use board::{Board, BoardParseError};

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Content of a single square.
///
/// The discriminants are the disk signs: summing them over the board gives
/// the dark-minus-light disk difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Disk {
    #[default]
    Empty = 0,
    Dark = 1,
    Light = -1,
}

impl Disk {
    /// Numeric sign of the disk (+1 dark, -1 light, 0 empty)
    #[inline]
    pub fn sign(self) -> i32 {
        self as i8 as i32
    }

    /// Owner of the disk, `None` for an empty square
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Disk::Dark => Some(Player::Dark),
            Disk::Light => Some(Player::Light),
            Disk::Empty => None,
        }
    }
}

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Both players, dark first
    pub const ALL: [Player; 2] = [Player::Dark, Player::Light];

    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// +1 for dark, -1 for light.
    ///
    /// Multiplying an absolute (dark-positive) score by this converts it to
    /// the player's own perspective.
    #[inline]
    pub fn sign(self) -> i32 {
        self.disk().sign()
    }

    #[inline]
    pub fn disk(self) -> Disk {
        match self {
            Player::Dark => Disk::Dark,
            Player::Light => Disk::Light,
        }
    }
}

impl From<Player> for Disk {
    fn from(player: Player) -> Disk {
        player.disk()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Dark => f.write_str("dark"),
            Player::Light => f.write_str("light"),
        }
    }
}

/// A square on the board, addressed by zero-based column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub col: u8,
    pub row: u8,
}

impl Move {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }
}

// Row-major, matching the order in which legal moves are enumerated
impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// Errors produced when parsing a move such as `e5`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,
    #[error("invalid column '{0}', expected a-h")]
    Column(char),
    #[error("invalid row '{0}', expected 1-8")]
    Row(String),
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;

        let col = match letter.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(MoveParseError::Column(letter)),
        };

        let rest = chars.as_str();
        let row = match rest.parse::<u8>() {
            Ok(n) if (1..=BOARD_SIZE as u8).contains(&n) && rest.len() == 1 => n - 1,
            _ => return Err(MoveParseError::Row(rest.to_string())),
        };

        Ok(Move::new(col, row))
    }
}
