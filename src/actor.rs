//! Players that choose moves
//!
//! The match driver only knows the [`Actor`] trait; the search engine, the
//! console player and the deterministic baseline all implement it.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::board::{Board, Move, Player};

/// Reasons an actor could not produce a move
#[derive(Debug, Error)]
pub enum ActorError {
    #[error("no legal move available")]
    NoLegalMove,
    #[error("input closed before a move was confirmed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Anything that can pick a move for a side.
///
/// `budget` is the side's whole remaining time, `None` meaning unlimited.
/// Returning a move that is not legal is allowed; the match driver treats it
/// as a forfeit.
pub trait Actor {
    fn decide(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> Result<Move, ActorError>;

    /// Short label for logs and the final report
    fn name(&self) -> &str;
}

/// Always plays the first legal move in enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveActor;

impl Actor for FirstMoveActor {
    fn decide(
        &mut self,
        board: &Board,
        player: Player,
        _budget: Option<Duration>,
    ) -> Result<Move, ActorError> {
        board
            .legal_moves(player)
            .first()
            .copied()
            .ok_or(ActorError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

const FORMAT_HINT: &str = "Invalid input format. The move has to be entered in the format e5.";

/// Console player reading moves line by line.
///
/// Each legal move is shown on the resulting board and has to be confirmed
/// with `y` before it is returned.
pub struct HumanActor<R, W> {
    input: R,
    output: W,
}

impl HumanActor<StdinLock<'static>, Stdout> {
    /// Human playing on the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanActor<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String, ActorError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ActorError::InputClosed);
        }
        Ok(line)
    }

    /// Prompt until a legal move is entered and confirmed.
    fn prompt(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> Result<Move, ActorError> {
        let start = Instant::now();
        writeln!(self.output, "It's {}'s turn.", player)?;

        loop {
            if let Some(budget) = budget {
                let left = budget.saturating_sub(start.elapsed());
                writeln!(self.output, "You have {} seconds left.", left.as_secs())?;
            }

            write!(self.output, "Current board:\n{}Enter your move: ", board)?;
            self.output.flush()?;

            let mv = match self.read_line()?.parse::<Move>() {
                Ok(mv) => mv,
                Err(_) => {
                    writeln!(self.output, "{}", FORMAT_HINT)?;
                    continue;
                }
            };

            let Some(next) = board.next_board(mv, player) else {
                writeln!(self.output, "Illegal move.")?;
                continue;
            };

            write!(
                self.output,
                "The resulting board would look like this:\n{}continue? [y/N] ",
                next
            )?;
            self.output.flush()?;

            if matches!(self.read_line()?.trim(), "y" | "Y") {
                return Ok(mv);
            }
        }
    }
}

impl<R: BufRead, W: Write> Actor for HumanActor<R, W> {
    fn decide(
        &mut self,
        board: &Board,
        player: Player,
        budget: Option<Duration>,
    ) -> Result<Move, ActorError> {
        if !board.has_legal_move(player) {
            return Err(ActorError::NoLegalMove);
        }
        self.prompt(board, player, budget)
    }

    fn name(&self) -> &str {
        "human"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn human(input: &str) -> HumanActor<Cursor<Vec<u8>>, Vec<u8>> {
        HumanActor::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(actor: HumanActor<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(actor.into_inner().1).unwrap()
    }

    #[test]
    fn test_first_move_actor() {
        let mv = FirstMoveActor
            .decide(&Board::new(), Player::Dark, None)
            .unwrap();
        assert_eq!(mv.to_string(), "d3");

        let mv = FirstMoveActor
            .decide(&Board::new(), Player::Light, None)
            .unwrap();
        assert_eq!(mv.to_string(), "e3");
    }

    #[test]
    fn test_first_move_actor_without_moves() {
        let full: Board = "
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
            oooooooo
            oooooooo
            oooooooo
            oooooooo
        "
        .parse()
        .unwrap();
        let err = FirstMoveActor.decide(&full, Player::Dark, None).unwrap_err();
        assert!(matches!(err, ActorError::NoLegalMove));
    }

    #[test]
    fn test_human_confirms_move() {
        let mut actor = human("c4\ny\n");
        let mv = actor.decide(&Board::new(), Player::Dark, None).unwrap();
        assert_eq!(mv, Move::new(2, 3));

        let out = transcript(actor);
        assert!(out.starts_with("It's dark's turn.\n"));
        assert!(out.contains("The resulting board would look like this:"));
        assert!(out.contains("4..xxx..."));
        assert!(!out.contains("seconds left"));
    }

    #[test]
    fn test_human_reprompts_on_bad_input() {
        let mut actor = human("z9\na1\nc4\nn\nf5\nY\n");
        let mv = actor.decide(&Board::new(), Player::Dark, None).unwrap();
        assert_eq!(mv, Move::new(5, 4));

        let out = transcript(actor);
        assert_eq!(out.matches(FORMAT_HINT).count(), 1);
        assert_eq!(out.matches("Illegal move.").count(), 1);
        assert_eq!(out.matches("Enter your move: ").count(), 4);
    }

    #[test]
    fn test_human_shows_remaining_time() {
        let mut actor = human("e3\ny\n");
        actor
            .decide(&Board::new(), Player::Light, Some(Duration::from_secs(90)))
            .unwrap();

        let out = transcript(actor);
        assert!(out.starts_with("It's light's turn.\n"));
        assert!(out.contains("You have 89 seconds left.") || out.contains("You have 90 seconds left."));
    }

    #[test]
    fn test_human_input_closed() {
        let mut actor = human("c4\n");
        let err = actor.decide(&Board::new(), Player::Dark, None).unwrap_err();
        assert!(matches!(err, ActorError::InputClosed));
    }
}
