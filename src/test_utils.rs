//! Helpers shared by unit tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Move, Player};

/// Play a game from the initial board, choosing each move with `choose`.
///
/// Returns every position reached together with the side to move in it,
/// forced passes already applied; the last entry is terminal.
pub(crate) fn playthrough(mut choose: impl FnMut(&[Move]) -> usize) -> Vec<(Board, Player)> {
    let mut board = Board::new();
    let mut player = Player::Dark;
    let mut positions = vec![(board, player)];

    while !board.game_over() {
        let moves = board.legal_moves(player);
        let mv = moves[choose(&moves)];
        board = board.next_board(mv, player).unwrap();
        if board.has_legal_move(player.opponent()) {
            player = player.opponent();
        }
        positions.push((board, player));
    }

    positions
}

/// Game where both sides always play their first legal move.
pub(crate) fn first_move_game() -> Vec<(Board, Player)> {
    playthrough(|_| 0)
}

/// Game with uniformly random moves from a fixed seed.
pub(crate) fn random_game(seed: u64) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    playthrough(|moves| rng.random_range(0..moves.len()))
}

/// A first-move-game position with exactly `empty` empty squares where the
/// side to move has a legal move.
pub(crate) fn endgame_position(empty: usize) -> (Board, Player) {
    let (board, player) = first_move_game()
        .into_iter()
        .find(|(b, _)| b.empty_squares() == empty)
        .unwrap();
    assert!(board.has_legal_move(player));
    (board, player)
}
