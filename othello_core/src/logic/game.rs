use crate::engine::move_list::MoveList;
use crate::engine::movegen::generate_moves;
use crate::engine::Move;
use crate::logic::board::{Board, Cell, Player, BOARD_SIZE};
use crate::logic::rules::{
    apply_move, count_discs, game_outcome, has_any_legal_move, GameOutcome, MoveError,
};
use serde::{Deserialize, Serialize};

/// Turn-state gate around the live board: whose turn it is, whether the last
/// move forced a pass, and the outcome once the game has ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub status: GameOutcome,
    pub last_move: Option<Move>,
    /// Player skipped after the last move because they had no legal move.
    pub passed: Option<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Black,
            status: GameOutcome::Ongoing,
            last_move: None,
            passed: None,
        }
    }

    /// Starts from an arbitrary position with `turn` to move.
    #[must_use]
    pub fn from_position(board: Board, turn: Player) -> Self {
        let mut state = Self {
            board,
            turn,
            status: GameOutcome::Ongoing,
            last_move: None,
            passed: None,
        };
        state.update_status();
        state
    }

    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status != GameOutcome::Ongoing {
            return Err(MoveError::GameOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        if self.board.get(row, col) != Cell::Empty {
            return Err(MoveError::CellOccupied);
        }
        if !apply_move(&mut self.board, self.turn, row, col) {
            return Err(MoveError::NoCapture);
        }

        self.last_move = Some(Move::new(row, col));
        self.turn = self.turn.opponent();
        self.update_status();

        Ok(())
    }

    pub fn legal_moves(&self) -> MoveList {
        if self.status != GameOutcome::Ongoing {
            return MoveList::new();
        }
        generate_moves(&self.board, self.turn)
    }

    /// (black, white) disc counts.
    pub fn score(&self) -> (usize, usize) {
        (
            count_discs(&self.board, Player::Black),
            count_discs(&self.board, Player::White),
        )
    }

    pub fn is_over(&self) -> bool {
        self.status != GameOutcome::Ongoing
    }

    fn update_status(&mut self) {
        self.passed = None;
        self.status = game_outcome(&self.board);

        if self.status != GameOutcome::Ongoing {
            log::trace!("game over: {:?}", self.status);
            return;
        }

        // Not terminal, so if the side to move is stuck the other side can move.
        if !has_any_legal_move(&self.board, self.turn) {
            log::trace!("{:?} has no legal move, passing", self.turn);
            self.passed = Some(self.turn);
            self.turn = self.turn.opponent();
        }
    }
}
