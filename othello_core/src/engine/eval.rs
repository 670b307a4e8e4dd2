use crate::engine::config::EngineConfig;
use crate::engine::Evaluator;
use crate::logic::board::{Board, Cell, Player, NUM_SQUARES};
use crate::logic::eval_constants::{square_class, SquareClass};

/// Weighted disc count: each square carries a fixed weight, added for the
/// evaluating player's discs and subtracted for the opponent's.
#[derive(Debug, Clone)]
pub struct PositionalEvaluator {
    weights: [i32; NUM_SQUARES],
}

impl Default for PositionalEvaluator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl PositionalEvaluator {
    pub fn new(config: &EngineConfig) -> Self {
        let mut weights = [0; NUM_SQUARES];
        for (sq, weight) in weights.iter_mut().enumerate() {
            let (r, c) = Board::index_to_coord(sq);
            let class_weight = match square_class(r, c) {
                SquareClass::Corner => config.weight_corner,
                SquareClass::CSquare => config.weight_c_square,
                SquareClass::XSquare => config.weight_x_square,
                SquareClass::Edge => config.weight_edge,
                SquareClass::Interior => 0,
            };
            *weight = class_weight + config.weight_disc;
        }
        Self { weights }
    }

    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.weights[Board::square_index(row, col)]
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own = Cell::from(player);
        board
            .cells()
            .map(|(r, c, cell)| match cell {
                Cell::Empty => 0,
                cell if cell == own => self.weight(r, c),
                _ => -self.weight(r, c),
            })
            .sum()
    }
}
