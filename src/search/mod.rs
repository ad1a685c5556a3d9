//! Search module for the Reversi AI
//!
//! Contains:
//! - Negamax with alpha-beta pruning and forced-pass handling
//! - Iterative deepening under a per-move deadline
//! - Search configuration and time allocation

pub mod alphabeta;
pub mod config;

pub use alphabeta::{SearchResult, Searcher, MAX_SCORE, MIN_SCORE};
pub use config::{allotted_time, SearchConfig};
