//! Alpha-Beta search with iterative deepening
//!
//! This module implements the core search algorithm for the Reversi AI.
//! It uses negamax with alpha-beta pruning over plain board values: every
//! child is a fresh `Board`, so nothing is undone on the way back up.
//!
//! # Features
//!
//! - Forced passes: when the opponent cannot reply, the same player moves
//!   again one ply deeper instead of the score being negated
//! - Iterative deepening under a per-move deadline
//! - Deadline checked only between completed depths, never mid-iteration
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Player};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search_depth(&board, Player::Dark, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::eval::{CompositeEvaluator, Evaluator};

use super::config::{allotted_time, SearchConfig};

/// Lowest possible evaluation
pub const MIN_SCORE: f64 = -1.0;
/// Highest possible evaluation
pub const MAX_SCORE: f64 = 1.0;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, if any move scored above the lowest value
    pub best_move: Option<Move>,
    /// Evaluation of the best move from the mover's perspective
    pub score: f64,
    /// Deepest fully completed depth
    pub depth: usize,
    /// Total nodes searched
    pub nodes: u64,
}

/// Negamax searcher over a pluggable evaluation function.
pub struct Searcher<E = CompositeEvaluator> {
    evaluator: E,
    config: SearchConfig,
    nodes: u64,
}

impl Searcher<CompositeEvaluator> {
    /// Searcher with the composite heuristic and default config.
    pub fn new() -> Self {
        Self::with_evaluator(CompositeEvaluator, SearchConfig::default())
    }

    /// Searcher with the composite heuristic.
    pub fn with_config(config: SearchConfig) -> Self {
        Self::with_evaluator(CompositeEvaluator, config)
    }
}

impl Default for Searcher<CompositeEvaluator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn with_evaluator(evaluator: E, config: SearchConfig) -> Self {
        Self {
            evaluator,
            config,
            nodes: 0,
        }
    }

    /// Nodes visited since construction
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Value of `child` for the player who just moved into it.
    ///
    /// If the opponent can reply the turn passes and the score is negated;
    /// otherwise the opponent is forced to pass and `player` moves again.
    #[inline]
    fn child_value(
        &mut self,
        child: &Board,
        player: Player,
        depth: usize,
        alpha: f64,
        beta: f64,
    ) -> f64 {
        let opponent = player.opponent();
        if child.has_legal_move(opponent) {
            -self.minimax_depth(child, opponent, depth, -beta, -alpha)
        } else {
            self.minimax_depth(child, player, depth, alpha, beta)
        }
    }

    /// Best reachable value of `board` for `player` within `depth` plies.
    ///
    /// Fail-hard negamax: the result never drops below `alpha`, and once a
    /// child reaches `beta` the remaining siblings are skipped.
    pub fn minimax_depth(
        &mut self,
        board: &Board,
        player: Player,
        depth: usize,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || board.game_over() {
            return self.evaluator.evaluate(board, player);
        }

        let mut best_value = alpha;

        for (_, child) in board.next_boards(player) {
            let value = self.child_value(&child, player, depth - 1, alpha, beta);

            if value > best_value {
                best_value = value;
            }
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                break;
            }
        }

        best_value
    }

    /// One full root pass at a fixed depth with the full window.
    ///
    /// Picks the first move (in enumeration order) whose value strictly
    /// exceeds every earlier one; a move scoring only the minimum is never
    /// picked, so `best_move` is `None` when every move loses outright.
    pub fn search_depth(&mut self, board: &Board, player: Player, depth: usize) -> SearchResult {
        let depth = depth.max(1);
        let mut alpha = MIN_SCORE;
        let beta = MAX_SCORE;
        let mut best_value = alpha;
        let mut best_move = None;

        for (mv, child) in board.next_boards(player) {
            let value = self.child_value(&child, player, depth - 1, alpha, beta);

            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            if value > alpha {
                alpha = value;
            }
        }

        SearchResult {
            best_move,
            score: best_value,
            depth,
            nodes: self.nodes,
        }
    }

    /// Iterative deepening under a time budget.
    ///
    /// `budget` is the player's whole remaining time; this move gets
    /// [`allotted_time`] of it. Depth 1 always completes. Each further depth
    /// starts only while the deadline has not passed, the previous
    /// iteration's duration times the branching factor still fits, and the
    /// depth does not exceed the number of empty squares. An iteration is
    /// never interrupted, so a single deep one can overrun its slice.
    pub fn search_timed(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> SearchResult {
        let start = Instant::now();
        let start_nodes = self.nodes;

        let empty = board.empty_squares();
        let slice = allotted_time(budget, empty, self.config.fallback_window);
        // An unrepresentable deadline means there is effectively no limit
        let deadline = start.checked_add(slice);
        let max_depth = self
            .config
            .max_depth
            .map_or(empty, |cap| cap.max(1).min(empty.max(1)));
        let branching = self.config.branching_factor;

        let mut best = SearchResult {
            best_move: None,
            score: MIN_SCORE,
            depth: 0,
            nodes: 0,
        };
        let mut depth = 1;

        loop {
            let iteration_start = Instant::now();
            let result = self.search_depth(board, player, depth);
            let last_iteration = iteration_start.elapsed();

            if result.best_move.is_some() {
                best.best_move = result.best_move;
                best.score = result.score;
            }
            best.depth = depth;

            debug!(
                depth,
                score = result.score,
                best_move = ?result.best_move.map(|m| m.to_string()),
                nodes = self.nodes - start_nodes,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "completed iteration"
            );

            depth += 1;
            if !can_deepen(deadline, last_iteration, branching, depth, max_depth) {
                break;
            }
        }

        best.nodes = self.nodes - start_nodes;
        best
    }
}

/// Whether the next iteration is predicted to finish before the deadline.
///
/// A branching factor that yields no valid duration (negative, NaN or
/// overflowing) stops the search at the current depth.
fn can_deepen(
    deadline: Option<Instant>,
    last_iteration: Duration,
    branching: f64,
    depth: usize,
    max_depth: usize,
) -> bool {
    if depth > max_depth {
        return false;
    }

    match deadline {
        Some(deadline) => {
            let now = Instant::now();
            let scaled = last_iteration.as_secs_f64() * branching;
            let Ok(predicted) = Duration::try_from_secs_f64(scaled) else {
                return false;
            };
            now < deadline && deadline - now > predicted
        }
        None => true,
    }
}
