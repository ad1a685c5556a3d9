//! Evaluation module for Reversi positions
//!
//! The evaluation is a weighted composite of:
//! - Corners captured
//! - Stability (stable / semi-stable disks)
//! - Disk parity
//! - Static square values
//! - Mobility

pub mod heuristic;
pub mod stability;
pub mod weights;

use crate::board::{Board, Player};

pub use heuristic::{corners_captured, disk_parity, evaluate, mobility, static_positional};
pub use stability::{semi_stable_disks, stability, stable_disks, DiskGrid};
pub use weights::{HeuristicWeight, POSITION_VALUES};

/// Rates a board for the player to move.
///
/// Implementations must return a value in [-1, 1] and be antisymmetric:
/// `evaluate(b, Dark) == -evaluate(b, Light)`. Negamax relies on both.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// The default composite heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeEvaluator;

impl Evaluator for CompositeEvaluator {
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        evaluate(board, player)
    }
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Player) -> f64,
{
    #[inline]
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        self(board, player)
    }
}
