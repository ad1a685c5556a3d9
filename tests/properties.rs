//! Board, evaluation and stability properties over random games

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reversi::board::TOTAL_CELLS;
use reversi::eval::{
    corners_captured, disk_parity, evaluate, mobility, stability, stable_disks, static_positional,
};
use reversi::{Board, Disk, Move, Player, BOARD_SIZE};

const SEEDS: [u64; 6] = [1, 2, 3, 5, 8, 13];

/// Random game from the initial board; each entry is a position and the
/// side to move in it, forced passes applied.
///
/// Kept here because integration tests cannot reach the crate's
/// `#[cfg(test)]` helpers in `src/test_utils.rs`.
fn random_game(seed: u64) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut player = Player::Dark;
    let mut positions = vec![(board, player)];

    while !board.game_over() {
        let moves = board.legal_moves(player);
        let mv = moves[rng.random_range(0..moves.len())];
        board = board.next_board(mv, player).unwrap();
        if board.has_legal_move(player.opponent()) {
            player = player.opponent();
        }
        positions.push((board, player));
    }

    positions
}

fn all_squares() -> impl Iterator<Item = Move> {
    (0..TOTAL_CELLS).map(Move::from_index)
}

#[test]
fn evaluation_is_bounded_and_antisymmetric() {
    for seed in SEEDS {
        for (board, _) in random_game(seed) {
            let dark = evaluate(&board, Player::Dark);
            assert_eq!(dark, -evaluate(&board, Player::Light), "seed {}\n{}", seed, board);
            assert!((-1.0..=1.0).contains(&dark), "seed {}\n{}", seed, board);

            for term in [corners_captured, disk_parity, static_positional, mobility, stability] {
                let value = term(&board, Player::Dark);
                assert!((-1.0..=1.0).contains(&value));
                assert_eq!(value, -term(&board, Player::Light));
            }
        }
    }
}

#[test]
fn game_over_iff_neither_side_can_move() {
    for seed in SEEDS {
        for (board, _) in random_game(seed) {
            let stuck = board.legal_moves(Player::Dark).is_empty()
                && board.legal_moves(Player::Light).is_empty();
            assert_eq!(board.game_over(), stuck);
        }
    }
}

#[test]
fn next_board_agrees_with_legal_move() {
    for (board, _) in random_game(7).into_iter().step_by(5) {
        for player in Player::ALL {
            for mv in all_squares() {
                let next = board.next_board(mv, player);
                assert_eq!(next.is_some(), board.legal_move(mv, player));

                if !board.is_empty(mv) {
                    assert!(next.is_none());
                }

                if let Some(next) = next {
                    let mine = player.disk();
                    assert_eq!(next.disk_no(), board.disk_no() + 1);
                    assert!(next.count(mine) >= board.count(mine) + 2);
                    assert_eq!(next.get(mv), mine);

                    // flips never remove the mover's disks
                    for sq in all_squares() {
                        if board.get(sq) == mine {
                            assert_eq!(next.get(sq), mine);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn occupied_squares_stay_occupied() {
    for seed in SEEDS {
        let game = random_game(seed);
        for pair in game.windows(2) {
            let (before, after) = (&pair[0].0, &pair[1].0);
            for sq in all_squares() {
                if before.get(sq) != Disk::Empty {
                    assert_ne!(after.get(sq), Disk::Empty);
                }
            }
        }
    }
}

#[test]
fn stable_disks_never_flip() {
    for seed in SEEDS {
        let game = random_game(seed);

        for (i, (board, _)) in game.iter().enumerate() {
            let stable = stable_disks(board);

            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    if !stable[row][col] {
                        continue;
                    }
                    let sq = Move::new(col as u8, row as u8);
                    let disk = board.get(sq);
                    assert_ne!(disk, Disk::Empty);

                    for (later, _) in &game[i + 1..] {
                        assert_eq!(later.get(sq), disk, "seed {} square {}", seed, sq);
                    }
                }
            }
        }
    }
}

#[test]
fn random_games_end_within_sixty_plies() {
    for seed in SEEDS {
        let game = random_game(seed);
        let plies = game.len() - 1;
        assert!(plies <= TOTAL_CELLS - 4);

        let (last, _) = game.last().unwrap();
        assert!(last.game_over());
        assert_eq!(
            last.count(Disk::Dark) + last.count(Disk::Light),
            last.disk_no()
        );
    }
}
