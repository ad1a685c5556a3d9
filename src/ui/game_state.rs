//! Game state management for the Reversi GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::search::SearchConfig;
use crate::{AIEngine, Board, Disk, Move, MoveResult, Player};

/// Thinking time the AI gets per move in the GUI
const AI_MOVE_TIME: Duration = Duration::from_secs(2);
/// Depth of the hint search
const HINT_DEPTH: usize = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human against the AI
    PvE { human: Player },
    /// Two humans sharing the screen
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::Dark,
        }
    }
}

/// What a background search was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiTask {
    /// The AI's own move, played as soon as it arrives
    Move,
    /// Suggestion for the human, only shown on the board
    Hint,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        task: AiTask,
    },
}

/// Final disk count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// `None` for a draw
    pub winner: Option<Player>,
    pub dark: usize,
    pub light: usize,
}

impl GameResult {
    fn from_board(board: &Board) -> Self {
        Self {
            winner: board.leader(),
            dark: board.count(Disk::Dark),
            light: board.count(Disk::Light),
        }
    }
}

/// Position before a move, for undo
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    board: Board,
    turn: Player,
    last_move: Option<Move>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    history: Vec<Snapshot>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Player::Dark,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Number of moves played so far
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Legal moves of the side to move, empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_turn)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// The running background search, if any
    pub fn ai_task(&self) -> Option<AiTask> {
        match &self.ai_state {
            AiState::Thinking { task, .. } => Some(*task),
            AiState::Idle => None,
        }
    }

    /// Attempt to play the given square for the human
    pub fn try_place_disk(&mut self, mv: Move) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if self.execute_move(mv) {
            Ok(())
        } else {
            Err(format!("Illegal move {}", mv))
        }
    }

    /// Apply a move for the side to move (human or AI).
    ///
    /// Returns `false` and leaves the state untouched if the move flips
    /// nothing.
    fn execute_move(&mut self, mv: Move) -> bool {
        let player = self.current_turn;
        let Some(next) = self.board.next_board(mv, player) else {
            return false;
        };

        self.history.push(Snapshot {
            board: self.board,
            turn: player,
            last_move: self.last_move,
        });
        self.board = next;
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        debug!(%player, mv = %mv, "move applied");
        self.advance_turn(player);
        true
    }

    /// Hand the turn over after `player` moved, applying forced passes.
    fn advance_turn(&mut self, player: Player) {
        let opponent = player.opponent();

        if self.board.has_legal_move(opponent) {
            self.current_turn = opponent;
        } else if self.board.has_legal_move(player) {
            self.current_turn = player;
            self.message = Some(format!("{} has no legal move and passes", opponent));
        } else {
            let result = GameResult::from_board(&self.board);
            info!(
                winner = result.winner.map_or("draw".to_string(), |p| p.to_string()),
                dark = result.dark,
                light = result.light,
                "game over"
            );
            self.game_over = Some(result);
            return;
        }

        self.move_timer.start();
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let config = SearchConfig {
            fallback_window: AI_MOVE_TIME,
            ..SearchConfig::default()
        };
        self.spawn_search(config, AiTask::Move);
    }

    /// Search the current position on a background thread
    fn spawn_search(&mut self, config: SearchConfig, task: AiTask) {
        let board = self.board;
        let player = self.current_turn;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board, player, None);
            let _ = tx.send(result);
        });

        debug!(%player, ?task, "search started");
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            task,
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                task,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed(), *task)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed, task)) = result {
            self.ai_state = AiState::Idle;

            if task == AiTask::Hint {
                self.suggested_move = move_result.best_move;
                self.last_ai_result = Some(move_result);
                return;
            }

            self.move_timer.set_ai_time(elapsed);
            match move_result.best_move {
                Some(mv) if self.execute_move(mv) => {}
                _ => self.message = Some("AI could not find a move".to_string()),
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Shallow search for the side to move; the result is shown on the
    /// board once `check_ai_result` picks it up
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() || !self.is_human_turn() {
            return;
        }

        self.suggested_move = None;
        self.spawn_search(SearchConfig::with_max_depth(HINT_DEPTH), AiTask::Hint);
    }

    /// Take back the last move; against the AI, back to the human's turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        while let Some(snapshot) = self.history.pop() {
            self.board = snapshot.board;
            self.current_turn = snapshot.turn;
            self.last_move = snapshot.last_move;

            if self.is_human_turn() {
                break;
            }
        }

        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameMode::PvP);
        assert_eq!(state.current_turn, Player::Dark);
        assert_eq!(state.legal_moves().len(), 4);
        assert_eq!(state.move_count(), 0);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_place_and_undo() {
        let mut state = GameState::new(GameMode::PvP);

        assert!(state.try_place_disk(Move::new(0, 0)).is_err());
        state.try_place_disk(Move::new(2, 3)).unwrap();
        assert_eq!(state.current_turn, Player::Light);
        assert_eq!(state.last_move, Some(Move::new(2, 3)));
        assert_eq!(state.board.count(Disk::Dark), 4);

        state.undo();
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn, Player::Dark);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_forced_pass_keeps_turn() {
        let mut state = GameState::new(GameMode::PvP);
        // after dark takes a1 light has nothing left to flip
        state.board = "
            .ox.....
            ........
            ........
            ........
            ........
            ........
            ........
            xo......
        "
        .parse()
        .unwrap();

        state.try_place_disk(Move::new(0, 0)).unwrap();
        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.message.as_deref().unwrap().contains("passes"));
    }

    #[test]
    fn test_game_over_result() {
        let mut state = GameState::new(GameMode::PvP);
        state.board = "
            .xxxxxxx
            oxxxxxxx
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
            xxxxxxxx
        "
        .parse()
        .unwrap();

        state.try_place_disk(Move::new(0, 0)).unwrap();
        let result = state.game_over.unwrap();
        assert_eq!(result.winner, Some(Player::Dark));
        assert_eq!((result.dark, result.light), (64, 0));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_ai_plays_opening() {
        let mut state = GameState::new(GameMode::PvE {
            human: Player::Light,
        });
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        wait_for_ai(&mut state);

        assert_eq!(state.move_count(), 1);
        assert_eq!(state.current_turn, Player::Light);
        assert!(state.is_human_turn());
        assert_eq!(state.last_move, Some(Move::new(3, 2)));
        assert!(state.move_timer.ai_thinking_time.is_some());

        // undo returns to the AI's first move position, which is not the
        // human's turn, so the whole history is unwound
        state.undo();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_hint_runs_in_background() {
        let mut state = GameState::new(GameMode::PvP);
        state.try_place_disk(Move::new(2, 3)).unwrap();
        state.request_suggestion();

        assert_eq!(state.ai_task(), Some(AiTask::Hint));
        assert!(state.suggested_move.is_none());
        assert!(state.try_place_disk(Move::new(2, 2)).is_err());

        wait_for_ai(&mut state);

        let hint = state.suggested_move.unwrap();
        assert!(state.board.legal_move(hint, Player::Light));
        // the hint is shown, not played
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.current_turn, Player::Light);
        assert_eq!(state.last_ai_result.as_ref().unwrap().best_move, Some(hint));
    }

    #[test]
    fn test_no_hint_on_ai_turn() {
        let mut state = GameState::new(GameMode::PvE {
            human: Player::Light,
        });
        state.request_suggestion();
        assert_eq!(state.ai_task(), None);
    }

    #[test]
    fn test_move_timer_records_last_move() {
        let mut state = GameState::new(GameMode::PvP);
        assert!(state.move_timer.last_move_duration.is_none());

        state.try_place_disk(Move::new(2, 3)).unwrap();
        assert!(state.move_timer.last_move_duration.is_some());
        assert!(state.move_timer.start_time.is_some());
    }
}
