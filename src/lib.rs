//! Reversi (Othello) engine
//!
//! Standard 8x8 Reversi:
//! - Dark moves first from the four-disk center position
//! - A move must bracket at least one line of opposing disks, which flip
//! - A side without a legal move passes; the game ends when neither can move
//! - The side with more disks wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, move generation and flipping
//! - [`eval`]: Composite position evaluation, including disk stability
//! - [`search`]: Negamax with alpha-beta pruning and iterative deepening
//! - [`engine`]: Main AI engine with search statistics
//! - [`actor`]: Move providers (AI, console human, baseline)
//! - [`game`]: Match driver with per-side time budgets
//! - [`ui`]: Desktop GUI
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, Board, Player, SearchConfig};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(SearchConfig::with_max_depth(3));
//!
//! board = board.next_board("c4".parse().unwrap(), Player::Dark).unwrap();
//!
//! // AI responds as light
//! if let Some(mv) = engine.get_move(&board, Player::Light, None) {
//!     board = board.next_board(mv, Player::Light).unwrap();
//!     println!("AI plays {}\n{}", mv, board);
//! }
//! ```

pub mod actor;
pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod search;
pub mod ui;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use actor::{Actor, ActorError, FirstMoveActor, HumanActor};
pub use board::{Board, Disk, Move, MoveParseError, Player, BOARD_SIZE};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use game::{play_match, MatchConfig, MatchEvent, MatchOutcome, Termination};
pub use search::SearchConfig;
