//! End-to-end matches through the public API

use std::io::Cursor;
use std::time::Duration;

use reversi::search::Searcher;
use reversi::{
    play_match, AIEngine, Actor, Board, Disk, FirstMoveActor, HumanActor, MatchConfig, MatchEvent,
    Move, Player, SearchConfig, SearchType, Termination,
};

#[test]
fn opening_moves_and_first_flip() {
    let board = Board::new();
    assert_eq!(board.disk_no(), 4);

    let dark: Vec<String> = board
        .legal_moves(Player::Dark)
        .iter()
        .map(Move::to_string)
        .collect();
    assert_eq!(dark, ["d3", "c4", "f5", "e6"]);

    let c4: Move = "c4".parse().unwrap();
    assert_eq!(c4, Move::new(2, 3));
    let next = board.next_board(c4, Player::Dark).unwrap();
    assert_eq!(next.get(Move::new(3, 3)), Disk::Dark);
    assert_eq!(next.get(Move::new(4, 3)), Disk::Dark);
    assert_eq!(next.get(Move::new(3, 4)), Disk::Dark);
    assert_eq!(next.get(Move::new(4, 4)), Disk::Light);
    assert_eq!(board, Board::new());
}

#[test]
fn first_move_players_finish_with_consistent_winner() {
    let outcome = play_match(
        &mut FirstMoveActor,
        &mut FirstMoveActor,
        &MatchConfig::default(),
        |_| {},
    );

    assert!(matches!(outcome.termination, Termination::Completed));
    assert!(outcome.plies <= 60);
    assert_eq!(outcome.winner, outcome.board.leader());
    assert_eq!(outcome.winner, Some(Player::Light));
}

#[test]
fn engine_beats_first_move_baseline() {
    let mut engine = AIEngine::with_config(SearchConfig::with_max_depth(3));
    let mut moves = Vec::new();
    let outcome = play_match(
        &mut engine,
        &mut FirstMoveActor,
        &MatchConfig::default(),
        |event| {
            if let MatchEvent::Moved { player, mv, .. } = event {
                moves.push((*player, *mv));
            }
        },
    );

    assert!(matches!(outcome.termination, Termination::Completed));
    assert!(outcome.board.game_over());
    assert_eq!(moves.len(), outcome.plies);
    assert_eq!(moves[0], (Player::Dark, Move::new(3, 2)));
    assert_eq!(outcome.winner, Some(Player::Dark));
}

#[test]
fn engine_under_budget_keeps_time() {
    let config = MatchConfig {
        dark_budget: Some(Duration::from_secs(60)),
        light_budget: Some(Duration::from_secs(60)),
    };
    let mut dark = AIEngine::with_config(SearchConfig::with_max_depth(2));
    let mut light = AIEngine::with_config(SearchConfig::with_max_depth(2));

    let outcome = play_match(&mut dark, &mut light, &config, |_| {});

    assert!(matches!(outcome.termination, Termination::Completed));
    for player in Player::ALL {
        let left = outcome.remaining(player).unwrap();
        assert!(left < Duration::from_secs(60));
    }
}

#[test]
fn human_script_against_engine() {
    // dark opens c4 (confirmed), then the input runs out
    let mut human = HumanActor::new(Cursor::new(b"c4\ny\n".to_vec()), Vec::new());
    let mut engine = AIEngine::with_config(SearchConfig::with_max_depth(2));

    let outcome = play_match(&mut human, &mut engine, &MatchConfig::default(), |_| {});

    assert_eq!(outcome.plies, 2);
    assert_eq!(outcome.termination.forfeited_by(), Some(Player::Dark));
    assert_eq!(outcome.winner, Some(Player::Light));
    assert_eq!(outcome.board.get(Move::new(2, 3)), Disk::Dark);
}

#[test]
fn engine_matches_deep_search_near_the_end() {
    // play first moves until four squares are empty
    let mut board = Board::new();
    let mut player = Player::Dark;
    while board.empty_squares() > 4 {
        let mv = FirstMoveActor.decide(&board, player, None).unwrap();
        board = board.next_board(mv, player).unwrap();
        if board.has_legal_move(player.opponent()) {
            player = player.opponent();
        }
    }
    assert!(board.has_legal_move(player));

    let mut engine = AIEngine::new();
    let result = engine.get_move_with_stats(&board, player, Some(Duration::from_secs(3600)));
    let deep = Searcher::new().search_depth(&board, player, 12);

    assert_eq!(result.search_type, SearchType::AlphaBeta);
    assert_eq!(result.best_move, deep.best_move);
    assert_eq!(result.score, deep.score);
}
