//! Rules engine and time-bounded alpha-beta search for 8x8 Othello.
//!
//! The presentation layer owns the live [`Board`], mutates it only through
//! [`attempt_move`] (or a [`logic::game::GameState`]), and asks
//! [`choose_move`] for the computer's reply.

pub mod engine;
pub mod logic;
pub mod worker;

use crate::engine::config::EngineConfig;
use crate::engine::search::AlphaBetaEngine;
use crate::engine::Searcher;
use std::sync::Arc;

pub use crate::engine::Move;
pub use crate::logic::board::{Board, Cell, Player};
pub use crate::logic::rules::GameOutcome;

#[must_use]
pub fn new_game() -> Board {
    Board::new()
}

/// Plays `player` at (row, col). `false` means the move was illegal and the
/// board is unchanged.
pub fn attempt_move(board: &mut Board, player: Player, row: usize, col: usize) -> bool {
    logic::rules::apply_move(board, player, row, col)
}

pub fn legal_moves_exist(board: &Board, player: Player) -> bool {
    logic::rules::has_any_legal_move(board, player)
}

pub fn game_outcome(board: &Board) -> GameOutcome {
    logic::rules::game_outcome(board)
}

/// Best move for `player` found within `time_budget_ms`, or `None` when
/// `player` has no legal move. Never mutates `board`.
pub fn choose_move(board: &Board, player: Player, time_budget_ms: u64) -> Option<Move> {
    let config = Arc::new(EngineConfig {
        time_budget_ms,
        ..EngineConfig::default()
    });
    let limit = config.time_limit();
    let mut engine = AlphaBetaEngine::new(config);
    engine
        .search(board, player, limit)
        .map(|(mv, _stats)| mv)
}
