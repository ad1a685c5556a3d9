//! Board structure with move generation and disk flipping

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{Disk, Move, Player, BOARD_SIZE, TOTAL_CELLS};

/// The eight walking directions as (column, row) steps
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Game board.
///
/// A plain value: deriving a successor never touches the board it was
/// derived from, so search can fan out from one parent without undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares indexed `[row][col]`
    squares: [[Disk; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position: light on d4/e5, dark on e4/d5.
    pub fn new() -> Self {
        let mut squares = [[Disk::Empty; BOARD_SIZE]; BOARD_SIZE];
        let lo = BOARD_SIZE / 2 - 1;
        let hi = BOARD_SIZE / 2;
        squares[lo][lo] = Disk::Light;
        squares[hi][hi] = Disk::Light;
        squares[lo][hi] = Disk::Dark;
        squares[hi][lo] = Disk::Dark;
        Self { squares }
    }

    /// Get disk at position
    #[inline]
    pub fn get(&self, mv: Move) -> Disk {
        self.squares[mv.row as usize][mv.col as usize]
    }

    /// Get disk by raw coordinates
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> Disk {
        self.squares[row][col]
    }

    #[inline]
    fn set(&mut self, col: usize, row: usize, disk: Disk) {
        self.squares[row][col] = disk;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Disk::Empty
    }

    /// Iterate over all squares in row-major order
    pub fn squares(&self) -> impl Iterator<Item = (Move, Disk)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let mv = Move::from_index(idx);
            (mv, self.get(mv))
        })
    }

    /// Length of the opponent run bracketed by `player` when walking from
    /// `mv` in direction `(dc, dr)`, or 0 if the walk is not bracketed.
    #[inline]
    fn bracket_len(&self, mv: Move, player: Player, dc: i32, dr: i32) -> usize {
        let own = player.disk();
        let mut col = mv.col as i32 + dc;
        let mut row = mv.row as i32 + dr;
        let mut run = 0;

        while Move::is_valid(col, row) {
            match self.at(col as usize, row as usize) {
                Disk::Empty => return 0,
                disk if disk == own => return run,
                _ => run += 1,
            }
            col += dc;
            row += dr;
        }

        0
    }

    /// Check if a move is legal: the square is empty and at least one
    /// direction holds a bracketing line of opponent disks.
    pub fn legal_move(&self, mv: Move, player: Player) -> bool {
        if !self.is_empty(mv) {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dc, dr)| self.bracket_len(mv, player, dc, dr) > 0)
    }

    /// All legal moves in row-major order (a1, b1, ..., h1, a2, ...).
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        (0..TOTAL_CELLS)
            .map(Move::from_index)
            .filter(|&mv| self.legal_move(mv, player))
            .collect()
    }

    /// True if `player` has at least one legal move
    pub fn has_legal_move(&self, player: Player) -> bool {
        (0..TOTAL_CELLS)
            .map(Move::from_index)
            .any(|mv| self.legal_move(mv, player))
    }

    /// Board after `player` plays `mv`, or `None` if the move is illegal
    /// (occupied square, or nothing would be flipped).
    pub fn next_board(&self, mv: Move, player: Player) -> Option<Board> {
        if !self.is_empty(mv) {
            return None;
        }

        let own = player.disk();
        let mut next = *self;
        next.set(mv.col as usize, mv.row as usize, own);

        let mut flipped = false;
        for &(dc, dr) in &DIRECTIONS {
            let run = self.bracket_len(mv, player, dc, dr) as i32;
            for step in 1..=run {
                let col = (mv.col as i32 + dc * step) as usize;
                let row = (mv.row as i32 + dr * step) as usize;
                next.set(col, row, own);
            }
            flipped |= run > 0;
        }

        flipped.then_some(next)
    }

    /// All legal (move, resulting board) pairs, in the same order as
    /// [`Board::legal_moves`].
    pub fn next_boards(&self, player: Player) -> Vec<(Move, Board)> {
        (0..TOTAL_CELLS)
            .map(Move::from_index)
            .filter_map(|mv| self.next_board(mv, player).map(|next| (mv, next)))
            .collect()
    }

    /// Neither player can move. Independent of the board being full.
    pub fn game_over(&self) -> bool {
        !self.has_legal_move(Player::Dark) && !self.has_legal_move(Player::Light)
    }

    /// Number of occupied squares
    pub fn disk_no(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&disk| disk != Disk::Empty)
            .count()
    }

    /// Number of empty squares
    #[inline]
    pub fn empty_squares(&self) -> usize {
        TOTAL_CELLS - self.disk_no()
    }

    /// Number of disks of a given kind
    pub fn count(&self, disk: Disk) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|&&d| d == disk)
            .count()
    }

    /// Dark disks minus light disks
    pub fn disk_difference(&self) -> i32 {
        self.squares.iter().flatten().map(|disk| disk.sign()).sum()
    }

    /// Player holding more disks, `None` on a tie
    pub fn leader(&self) -> Option<Player> {
        match self.disk_difference() {
            d if d > 0 => Some(Player::Dark),
            d if d < 0 => Some(Player::Light),
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let c = match self.at(col, row) {
                    Disk::Empty => '.',
                    Disk::Dark => 'x',
                    Disk::Light => 'o',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Errors produced when reading a board from its text grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row}: expected {expected} squares, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: unknown square '{found}'")]
    Square { row: usize, found: char },
}

/// Reads the grid produced by `Display`. The column header and row numbers
/// are optional; blank lines are skipped. Reachability is not checked.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('a'))
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Board {
            squares: [[Disk::Empty; BOARD_SIZE]; BOARD_SIZE],
        };

        for (row, line) in rows.iter().enumerate() {
            let cells = line.trim_start_matches(|c: char| c.is_ascii_digit()).trim();
            let found = cells.chars().count();
            if found != BOARD_SIZE {
                return Err(BoardParseError::RowLength {
                    row: row + 1,
                    expected: BOARD_SIZE,
                    found,
                });
            }

            for (col, c) in cells.chars().enumerate() {
                let disk = match c {
                    '.' => Disk::Empty,
                    'x' | 'X' => Disk::Dark,
                    'o' | 'O' => Disk::Light,
                    other => {
                        return Err(BoardParseError::Square {
                            row: row + 1,
                            found: other,
                        })
                    }
                };
                board.set(col, row, disk);
            }
        }

        Ok(board)
    }
}
