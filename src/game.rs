//! Match driver
//!
//! Alternates two actors from the initial board, charges each call against
//! the mover's time budget and stops on a double pass or a forfeit.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::actor::{Actor, ActorError};
use crate::board::{Board, Move, Player};

/// Total time each side may spend over the whole match; `None` is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchConfig {
    pub dark_budget: Option<Duration>,
    pub light_budget: Option<Duration>,
}

/// Progress notifications for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    /// Initial board, before the first move
    Started { board: Board },
    Moved {
        player: Player,
        mv: Move,
        board: Board,
        elapsed: Duration,
        /// Mover's budget left after this move
        remaining: Option<Duration>,
    },
    /// `player` has no legal move and must pass
    Passed { player: Player },
}

/// Why the match ended
#[derive(Debug)]
pub enum Termination {
    /// Neither side could move
    Completed,
    /// `player` returned a move that flips nothing or lands on a disk
    IllegalMove { player: Player, mv: Move },
    /// A single call took longer than `player`'s remaining budget
    Timeout { player: Player },
    /// `player`'s actor returned an error
    ActorFailed { player: Player, error: ActorError },
}

impl Termination {
    /// Side that lost by forfeit, if any
    pub fn forfeited_by(&self) -> Option<Player> {
        match self {
            Termination::Completed => None,
            Termination::IllegalMove { player, .. }
            | Termination::Timeout { player }
            | Termination::ActorFailed { player, .. } => Some(*player),
        }
    }
}

#[derive(Debug)]
pub struct MatchOutcome {
    /// `None` is a draw
    pub winner: Option<Player>,
    pub termination: Termination,
    /// Board when the match stopped
    pub board: Board,
    /// Moves played, passes excluded
    pub plies: usize,
    /// Budgets left, dark first
    pub remaining_budgets: [Option<Duration>; 2],
}

impl MatchOutcome {
    pub fn remaining(&self, player: Player) -> Option<Duration> {
        self.remaining_budgets[slot(player)]
    }
}

#[inline]
fn slot(player: Player) -> usize {
    match player {
        Player::Dark => 0,
        Player::Light => 1,
    }
}

/// Play one match between `dark` and `light`.
///
/// Dark moves first. After a move the opponent plays if it can; otherwise
/// the mover plays again, and if neither can move the side with more disks
/// wins. Taking longer than the remaining budget, failing to answer or
/// playing an illegal move loses immediately.
pub fn play_match(
    dark: &mut dyn Actor,
    light: &mut dyn Actor,
    config: &MatchConfig,
    mut observer: impl FnMut(&MatchEvent),
) -> MatchOutcome {
    let mut board = Board::new();
    let mut budgets = [config.dark_budget, config.light_budget];
    let mut player = Player::Dark;
    let mut plies = 0;

    info!(dark = dark.name(), light = light.name(), "match started");
    observer(&MatchEvent::Started { board });

    let termination = loop {
        let actor: &mut dyn Actor = match player {
            Player::Dark => &mut *dark,
            Player::Light => &mut *light,
        };
        let budget = budgets[slot(player)];

        let start = Instant::now();
        let decision = actor.decide(&board, player, budget);
        let elapsed = start.elapsed();

        if let Some(budget) = budget {
            if elapsed > budget {
                warn!(%player, actor = actor.name(), elapsed_ms = elapsed.as_millis() as u64, "time budget exceeded");
                break Termination::Timeout { player };
            }
            budgets[slot(player)] = Some(budget - elapsed);
        }

        let mv = match decision {
            Ok(mv) => mv,
            Err(error) => {
                warn!(%player, actor = actor.name(), %error, "actor failed");
                break Termination::ActorFailed { player, error };
            }
        };

        let Some(next) = board.next_board(mv, player) else {
            warn!(%player, actor = actor.name(), mv = %mv, "illegal move");
            break Termination::IllegalMove { player, mv };
        };

        board = next;
        plies += 1;
        info!(
            ply = plies,
            %player,
            mv = %mv,
            elapsed_ms = elapsed.as_millis() as u64,
            remaining_s = budgets[slot(player)].map(|b| b.as_secs()),
            "move played"
        );
        observer(&MatchEvent::Moved {
            player,
            mv,
            board,
            elapsed,
            remaining: budgets[slot(player)],
        });

        let opponent = player.opponent();
        if board.has_legal_move(opponent) {
            player = opponent;
        } else if board.has_legal_move(player) {
            info!(player = %opponent, "forced pass");
            observer(&MatchEvent::Passed { player: opponent });
        } else {
            break Termination::Completed;
        }
    };

    let winner = match termination.forfeited_by() {
        Some(loser) => Some(loser.opponent()),
        None => board.leader(),
    };

    info!(
        winner = winner.map_or("draw".to_string(), |p| p.to_string()),
        dark = board.count(Player::Dark.disk()),
        light = board.count(Player::Light.disk()),
        plies,
        "match finished"
    );

    MatchOutcome {
        winner,
        termination,
        board,
        plies,
        remaining_budgets: budgets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{FirstMoveActor, HumanActor};
    use std::io::Cursor;
    use std::thread;

    /// Plays the same square every turn
    struct Fixed(Move);

    impl Actor for Fixed {
        fn decide(&mut self, _: &Board, _: Player, _: Option<Duration>) -> Result<Move, ActorError> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// First legal move after a pause
    struct Slow(Duration);

    impl Actor for Slow {
        fn decide(
            &mut self,
            board: &Board,
            player: Player,
            budget: Option<Duration>,
        ) -> Result<Move, ActorError> {
            thread::sleep(self.0);
            FirstMoveActor.decide(board, player, budget)
        }

        fn name(&self) -> &str {
            "slow"
        }
    }

    #[test]
    fn test_first_move_match() {
        let mut events = Vec::new();
        let outcome = play_match(
            &mut FirstMoveActor,
            &mut FirstMoveActor,
            &MatchConfig::default(),
            |e| events.push(e.clone()),
        );

        assert!(matches!(outcome.termination, Termination::Completed));
        assert_eq!(outcome.plies, 60);
        assert_eq!(outcome.board.empty_squares(), 0);
        assert_eq!(outcome.board.disk_difference(), -26);
        assert_eq!(outcome.winner, Some(Player::Light));
        assert!(outcome.board.game_over());

        assert_eq!(events[0], MatchEvent::Started { board: Board::new() });
        let moves = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::Moved { .. }))
            .count();
        assert_eq!(moves, 60);
        match events.last() {
            Some(MatchEvent::Moved { board, .. }) => assert_eq!(*board, outcome.board),
            other => panic!("unexpected last event {:?}", other),
        }
    }

    #[test]
    fn test_budgets_are_charged() {
        let hour = Duration::from_secs(3600);
        let config = MatchConfig {
            dark_budget: Some(hour),
            light_budget: None,
        };
        let outcome = play_match(&mut FirstMoveActor, &mut FirstMoveActor, &config, |_| {});

        assert!(matches!(outcome.termination, Termination::Completed));
        let left = outcome.remaining(Player::Dark).unwrap();
        assert!(left <= hour);
        assert!(left > Duration::from_secs(3500));
        assert_eq!(outcome.remaining(Player::Light), None);
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let outcome = play_match(
            &mut Fixed(Move::new(0, 0)),
            &mut FirstMoveActor,
            &MatchConfig::default(),
            |_| {},
        );

        assert!(matches!(
            outcome.termination,
            Termination::IllegalMove { player: Player::Dark, .. }
        ));
        assert_eq!(outcome.winner, Some(Player::Light));
        assert_eq!(outcome.plies, 0);
        assert_eq!(outcome.board, Board::new());
    }

    #[test]
    fn test_occupied_square_forfeits() {
        // d3 is legal for dark, then light tries the same square
        let outcome = play_match(
            &mut FirstMoveActor,
            &mut Fixed(Move::new(3, 2)),
            &MatchConfig::default(),
            |_| {},
        );

        assert!(matches!(
            outcome.termination,
            Termination::IllegalMove { player: Player::Light, .. }
        ));
        assert_eq!(outcome.winner, Some(Player::Dark));
        assert_eq!(outcome.plies, 1);
    }

    #[test]
    fn test_timeout_forfeits() {
        let config = MatchConfig {
            dark_budget: None,
            light_budget: Some(Duration::from_millis(1)),
        };
        let outcome = play_match(
            &mut FirstMoveActor,
            &mut Slow(Duration::from_millis(20)),
            &config,
            |_| {},
        );

        assert!(matches!(
            outcome.termination,
            Termination::Timeout { player: Player::Light }
        ));
        assert_eq!(outcome.winner, Some(Player::Dark));
        assert_eq!(outcome.plies, 1);
        assert_eq!(outcome.remaining(Player::Light), Some(Duration::from_millis(1)));
    }

    #[test]
    fn test_actor_error_forfeits() {
        let mut human = HumanActor::new(Cursor::new(Vec::new()), Vec::new());
        let outcome = play_match(
            &mut human,
            &mut FirstMoveActor,
            &MatchConfig::default(),
            |_| {},
        );

        assert!(matches!(
            outcome.termination,
            Termination::ActorFailed {
                player: Player::Dark,
                error: ActorError::InputClosed
            }
        ));
        assert_eq!(outcome.winner, Some(Player::Light));
        assert_eq!(outcome.termination.forfeited_by(), Some(Player::Dark));
    }
}
