use crate::logic::board::{Board, Player};
use serde::{Deserialize, Serialize};

pub mod clock;
pub mod config;
pub mod eval;
pub mod move_list;
pub mod movegen;
pub mod search;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
    pub score: i32,
}

impl Move {
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
            score: 0,
        }
    }

    pub const fn coords(&self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Same square, ignoring the attached score.
    pub const fn same_square(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SearchLimit {
    /// Fixed depth, no clock.
    Depth(u8),
    /// Configured depth under a wall-clock budget in milliseconds.
    Time(u64),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
    pub score: i32,
}

pub trait Evaluator {
    /// Score of `board` from `player`'s point of view.
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

pub trait Searcher {
    fn search(
        &mut self,
        board: &Board,
        player: Player,
        limit: SearchLimit,
    ) -> Option<(Move, SearchStats)>;
}
