use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Player, BOARD_SIZE};
use crate::logic::rules::is_legal_move;

/// Legal moves for `player` in row-major order.
pub fn generate_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if is_legal_move(board, player, r, c) {
                moves.push(Move::new(r, c));
            }
        }
    }
    moves
}
