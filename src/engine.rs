//! Main AI Engine wrapping the search
//!
//! The engine decides how a move is found:
//!
//! 1. **Opening**: on the very first ply all four moves are equivalent under
//!    the board's symmetry, so the first legal move is played without search
//! 2. **Alpha-Beta**: iterative deepening under the time budget
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, Player, SearchConfig};
//!
//! // Cap the depth for a fast example
//! let mut engine = AIEngine::with_config(SearchConfig::with_max_depth(3));
//! let board = Board::new()
//!     .next_board("d3".parse().unwrap(), Player::Dark)
//!     .unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Player::Light, None);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::actor::{Actor, ActorError};
use crate::board::{Board, Move, Player};
use crate::eval::{CompositeEvaluator, Evaluator};
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Number of disks on the initial board
const OPENING_DISKS: usize = 4;

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// First ply, answered without searching
    Opening,
    /// Iterative deepening alpha-beta result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` only when the player has no legal move
    pub best_move: Option<Move>,
    /// Root value of the move from the mover's perspective, in [-1, 1]
    pub score: f64,
    /// Deepest completed search depth
    pub depth: usize,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Type of search that found this move
    pub search_type: SearchType,
}

impl MoveResult {
    #[inline]
    fn opening(mv: Option<Move>, time_ms: u64) -> Self {
        Self {
            best_move: mv,
            score: 0.0,
            depth: 0,
            nodes: 0,
            time_ms,
            search_type: SearchType::Opening,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            search_type: SearchType::AlphaBeta,
        }
    }
}

/// Main AI Engine for Reversi.
///
/// # Example
///
/// ```
/// use reversi::{AIEngine, Board, Player};
///
/// let mut engine = AIEngine::new();
/// if let Some(mv) = engine.get_move(&Board::new(), Player::Dark, None) {
///     println!("Play at {}", mv);
/// }
/// ```
pub struct AIEngine<E = CompositeEvaluator> {
    searcher: Searcher<E>,
}

impl AIEngine<CompositeEvaluator> {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - 30 s per move when no budget is given
    /// - Branching factor estimate of 2
    /// - No depth cap
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::with_config(config),
        }
    }
}

impl<E: Evaluator> AIEngine<E> {
    /// Engine searching with a custom evaluation function
    #[must_use]
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::with_evaluator(evaluator, config),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if `player` has no legal move.
    #[must_use]
    pub fn get_move(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> Option<Move> {
        self.get_move_with_stats(board, player, budget).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// `budget` is the player's whole remaining time; the search takes its
    /// share of it for this move.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> MoveResult {
        let start = Instant::now();

        if board.disk_no() == OPENING_DISKS {
            let mv = board.legal_moves(player).first().copied();
            return MoveResult::opening(mv, start.elapsed().as_millis() as u64);
        }

        let mut result = self.searcher.search_timed(board, player, budget);

        // Every move loses outright at the searched depth: play anything legal
        if result.best_move.is_none() {
            result.best_move = board.legal_moves(player).first().copied();
            debug!(
                fallback = ?result.best_move.map(|m| m.to_string()),
                "no move above the minimum, using first legal move"
            );
        }

        MoveResult::from_alphabeta(result, start.elapsed().as_millis() as u64)
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Nodes searched over the engine's lifetime
    #[inline]
    pub fn total_nodes(&self) -> u64 {
        self.searcher.nodes()
    }
}

impl Default for AIEngine<CompositeEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Actor for AIEngine<E> {
    fn decide(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> Result<Move, ActorError> {
        self.get_move(board, player, budget)
            .ok_or(ActorError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}
