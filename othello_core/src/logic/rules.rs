use crate::logic::board::{Board, Cell, Player, BOARD_SIZE, DIRECTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    CellOccupied,
    NoCapture,
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::OutOfBounds => "square is off the board",
            Self::CellOccupied => "square is already occupied",
            Self::NoCapture => "move does not capture any disc",
            Self::GameOver => "game is already over",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Ongoing,
    BlackWins,
    WhiteWins,
    Draw,
}

/// Bitmask (one bit per square index) of the opposing discs captured in
/// direction `dir` by `player` moving at (row, col). Zero when the run hits
/// an empty square or the edge before a disc of `player`.
fn capture_line(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dir: (isize, isize),
) -> u64 {
    let own = Cell::from(player);
    let theirs = Cell::from(player.opponent());
    let mut mask = 0u64;
    let mut pos = Board::neighbor(row, col, dir);

    while let Some((r, c)) = pos {
        match board.get(r, c) {
            cell if cell == theirs => mask |= 1u64 << Board::square_index(r, c),
            cell if cell == own => return mask,
            _ => return 0,
        }
        pos = Board::neighbor(r, c, dir);
    }
    0
}

/// All discs `player` would flip by moving at (row, col); zero if the move
/// is occupied or captures nothing.
pub fn captures(board: &Board, player: Player, row: usize, col: usize) -> u64 {
    if !board.get(row, col).is_empty() {
        return 0;
    }
    DIRECTIONS
        .iter()
        .fold(0, |mask, &dir| mask | capture_line(board, player, row, col, dir))
}

pub fn is_legal_move(board: &Board, player: Player, row: usize, col: usize) -> bool {
    board.get(row, col).is_empty()
        && DIRECTIONS
            .iter()
            .any(|&dir| capture_line(board, player, row, col, dir) != 0)
}

/// Places a disc for `player` and flips every captured line. Returns `false`
/// and leaves the board untouched when the move is illegal.
pub fn apply_move(board: &mut Board, player: Player, row: usize, col: usize) -> bool {
    let flips = captures(board, player, row, col);
    if flips == 0 {
        return false;
    }

    let cell = Cell::from(player);
    let mut remaining = flips;
    while remaining != 0 {
        let sq = remaining.trailing_zeros() as usize;
        let (r, c) = Board::index_to_coord(sq);
        board.set(r, c, cell);
        remaining &= remaining - 1;
    }
    board.set(row, col, cell);
    true
}

pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    (0..BOARD_SIZE).any(|r| (0..BOARD_SIZE).any(|c| is_legal_move(board, player, r, c)))
}

/// Full board, or neither side can move. One side being stuck is a pass,
/// not the end of the game.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        || (!has_any_legal_move(board, Player::Black) && !has_any_legal_move(board, Player::White))
}

pub fn count_discs(board: &Board, player: Player) -> usize {
    board.count(Cell::from(player))
}

pub fn game_outcome(board: &Board) -> GameOutcome {
    if !is_terminal(board) {
        return GameOutcome::Ongoing;
    }
    let black = count_discs(board, Player::Black);
    let white = count_discs(board, Player::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::BlackWins,
        std::cmp::Ordering::Less => GameOutcome::WhiteWins,
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_opening_move_captures_one_disc() {
        let mut b = Board::new();
        assert!(is_legal_move(&b, Player::Black, 2, 3));
        assert!(apply_move(&mut b, Player::Black, 2, 3));

        assert_eq!(b.get(2, 3), Cell::Black);
        assert_eq!(b.get(3, 3), Cell::Black);
        assert_eq!(b.get(3, 4), Cell::Black);
        assert_eq!(b.get(4, 3), Cell::Black);
        assert_eq!(b.get(4, 4), Cell::White);
        assert_eq!(count_discs(&b, Player::Black), 4);
        assert_eq!(count_discs(&b, Player::White), 1);
    }

    #[test]
    fn test_opening_legal_moves() {
        let b = Board::new();
        let mut legal = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if is_legal_move(&b, Player::Black, r, c) {
                    legal.push((r, c));
                }
            }
        }
        assert_eq!(legal, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut b = Board::new();
        let before = b;
        assert!(!apply_move(&mut b, Player::Black, 3, 3));
        assert!(!apply_move(&mut b, Player::White, 3, 4));
        assert_eq!(b, before);
    }

    #[test]
    fn test_non_capturing_move_is_noop() {
        let mut b = Board::new();
        let before = b;
        assert!(!is_legal_move(&b, Player::Black, 0, 0));
        assert!(!apply_move(&mut b, Player::Black, 0, 0));
        // Adjacent to a White disc but no Black disc closes the line.
        assert!(!apply_move(&mut b, Player::Black, 2, 2));
        assert_eq!(b, before);
    }

    #[test]
    fn test_line_open_at_edge_does_not_capture() {
        let b = board([
            "..WWWWWW",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!is_legal_move(&b, Player::Black, 0, 1));
        assert_eq!(captures(&b, Player::Black, 0, 1), 0);
    }

    #[test]
    fn test_line_broken_by_gap_does_not_capture() {
        let b = board([
            ".W.B....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!is_legal_move(&b, Player::Black, 0, 0));
    }

    #[test]
    fn test_flips_every_direction_at_once() {
        let mut b = board([
            "B..B..B.",
            ".W.W.W..",
            "..WWW...",
            "BWW.WWWB",
            "..WWW...",
            ".W.W.W..",
            "B..B..B.",
            "........",
        ]);
        assert!(apply_move(&mut b, Player::Black, 3, 3));
        let expected = board([
            "B..B..B.",
            ".B.B.B..",
            "..BBB...",
            "BBBBBBBB",
            "..BBB...",
            ".B.B.B..",
            "B..B..B.",
            "........",
        ]);
        assert_eq!(b, expected);
    }

    #[test]
    fn test_only_bounded_lines_flip() {
        let mut b = board([
            "........",
            "........",
            "........",
            "..WWB...",
            "..W.....",
            "........",
            "........",
            "........",
        ]);
        // East line is closed by B at (3,4); the diagonal through (4,2) is open.
        assert!(apply_move(&mut b, Player::Black, 3, 1));
        assert_eq!(b.get(3, 2), Cell::Black);
        assert_eq!(b.get(3, 3), Cell::Black);
        assert_eq!(b.get(4, 2), Cell::White);
    }

    #[test]
    fn test_full_board_is_terminal() {
        let b = board([
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
        ]);
        assert!(is_terminal(&b));
        assert_eq!(game_outcome(&b), GameOutcome::Draw);
    }

    #[test]
    fn test_both_players_stuck_is_terminal() {
        let b = board([
            "BBB.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "......W.",
        ]);
        assert!(!has_any_legal_move(&b, Player::Black));
        assert!(!has_any_legal_move(&b, Player::White));
        assert!(is_terminal(&b));
        assert_eq!(game_outcome(&b), GameOutcome::BlackWins);
    }

    #[test]
    fn test_one_player_stuck_is_not_terminal() {
        // White cannot move, Black can capture at (0,2).
        let b = board([
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(has_any_legal_move(&b, Player::Black));
        assert!(!has_any_legal_move(&b, Player::White));
        assert!(!is_terminal(&b));
        assert_eq!(game_outcome(&b), GameOutcome::Ongoing);
    }

    #[test]
    fn test_white_wins_on_count() {
        let b = board([
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "WWWWWWWW",
            "BBBBBBBB",
            "BBBBBBBB",
            "BBBBBBBB",
        ]);
        assert_eq!(game_outcome(&b), GameOutcome::WhiteWins);
    }

    #[test]
    fn test_initial_board_is_ongoing() {
        assert_eq!(game_outcome(&Board::new()), GameOutcome::Ongoing);
    }
}
