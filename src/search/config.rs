//! Search configuration parameters.

use std::time::Duration;

/// Configuration for the iterative deepening search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Time allotted to a single move when the caller gives no budget.
    pub fallback_window: Duration,

    /// Assumed growth in cost from one depth to the next.
    /// The next iteration starts only if the previous one, scaled by this
    /// factor, still fits before the deadline.
    pub branching_factor: f64,

    /// Upper bound on the iteration depth. `None` lets the search run until
    /// the deadline or the number of empty squares stops it.
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fallback_window: Duration::from_secs(30),
            branching_factor: 2.0,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    /// Default config with a depth cap.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
            ..Self::default()
        }
    }
}

/// Time slice for one move.
///
/// The remaining budget is split evenly over the player's remaining turns,
/// i.e. half the empty squares rounded up. Recomputed from scratch on every
/// move. Without a budget the fallback window is used.
pub fn allotted_time(budget: Option<Duration>, empty_squares: usize, fallback: Duration) -> Duration {
    match budget {
        Some(budget) => {
            let turns = empty_squares.div_ceil(2).max(1);
            budget / turns as u32
        }
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.fallback_window, Duration::from_secs(30));
        assert_eq!(config.branching_factor, 2.0);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_with_max_depth_is_at_least_one() {
        assert_eq!(SearchConfig::with_max_depth(0).max_depth, Some(1));
        assert_eq!(SearchConfig::with_max_depth(5).max_depth, Some(5));
    }

    #[test]
    fn test_allotted_time_splits_over_own_turns() {
        let fallback = Duration::from_secs(30);
        // 60 empty squares: 30 turns left for the mover
        assert_eq!(
            allotted_time(Some(Duration::from_secs(60)), 60, fallback),
            Duration::from_secs(2)
        );
        // odd count rounds up: 5 empty squares -> 3 turns
        assert_eq!(
            allotted_time(Some(Duration::from_secs(9)), 5, fallback),
            Duration::from_secs(3)
        );
        assert_eq!(
            allotted_time(Some(Duration::from_secs(9)), 1, fallback),
            Duration::from_secs(9)
        );
    }

    #[test]
    fn test_allotted_time_without_budget() {
        let fallback = Duration::from_secs(30);
        assert_eq!(allotted_time(None, 60, fallback), fallback);
    }
}
