use territory_core::Board;
use territory_engine::{EngineError, SearchConfig, SearchOrchestrator, SearchRequest};

fn config(board_size: u8, time_ms: u64, max_depth: u8) -> SearchConfig {
    SearchConfig { board_size, ai_search_time_ms: time_ms, ai_max_depth: max_depth, ..SearchConfig::default() }
}

#[test]
fn s1_opening_reply_is_a_single_interior_placement() {
    let board = Board::new(11).unwrap();
    let request = SearchRequest { board, current_player_index: 0, turn_count: 1, config: config(11, 300, 1) };

    let orchestrator = SearchOrchestrator::with_pool_size(2);
    let reply = orchestrator.search(&request).expect("opening position always has a legal move");

    assert_eq!(reply.depth, 1);
    assert_eq!(reply.best_move.placements.len(), 1);
    let p = reply.best_move.placements[0];
    assert!((2..=8).contains(&p.row) && (2..=8).contains(&p.col));
}

#[test]
fn no_legal_move_on_a_saturated_small_board() {
    // Every cell filled: no unoccupied cell can satisfy `is_valid_placement`.
    let mut board = Board::new(3).unwrap();
    for (r, c) in board.all_cells().collect::<Vec<_>>() {
        board.set(r, c, Some(territory_core::Piece::new(territory_core::Color::A, territory_core::Posture::Old)));
    }
    let request = SearchRequest { board, current_player_index: 0, turn_count: 5, config: config(3, 300, 1) };

    let orchestrator = SearchOrchestrator::with_pool_size(1);
    let err = orchestrator.search(&request).unwrap_err();
    assert!(matches!(err, EngineError::NoLegalMove));
}

#[test]
fn invalid_config_is_rejected_before_search_starts() {
    let board = Board::new(3).unwrap();
    let request = SearchRequest { board, current_player_index: 0, turn_count: 1, config: config(2, 300, 1) };

    let orchestrator = SearchOrchestrator::with_pool_size(1);
    let err = orchestrator.search(&request).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)));
}

#[test]
fn zero_time_budget_is_rejected_by_validate() {
    let board = Board::new(5).unwrap();
    let request = SearchRequest { board, current_player_index: 0, turn_count: 1, config: config(5, 0, 24) };

    let orchestrator = SearchOrchestrator::with_pool_size(2);
    let err = orchestrator.search(&request).unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)));
}

#[test]
fn s6_tiny_time_budget_never_returns_a_depth_past_what_completed() {
    // A 1ms budget may or may not let the first depth finish depending on
    // machine speed, but the orchestrator must never report a `depth`
    // beyond `ai_max_depth`, and must still return *some* legal move
    // (the best-effort first root move when no depth completes at all,
    // per spec.md §6/§7).
    let board = Board::new(5).unwrap();
    let request = SearchRequest { board, current_player_index: 0, turn_count: 1, config: config(5, 1, 24) };

    let orchestrator = SearchOrchestrator::with_pool_size(2);
    let reply = orchestrator.search(&request).expect("opening always has a legal move");

    assert!(reply.depth <= 24);
    assert_eq!(reply.best_move.placements.len(), 1);
}

#[test]
fn shallow_depth_completes_within_a_generous_budget() {
    let board = Board::new(5).unwrap();
    let request = SearchRequest { board, current_player_index: 0, turn_count: 1, config: config(5, 2000, 1) };

    let orchestrator = SearchOrchestrator::with_pool_size(2);
    let reply = orchestrator.search(&request).expect("opening always has a legal move");
    assert_eq!(reply.depth, 1);
}
