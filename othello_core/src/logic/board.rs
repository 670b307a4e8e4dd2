use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Compass directions as (row delta, col delta).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Player::Black),
            Self::White => Some(Player::White),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'B',
            Self::White => 'W',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '-' => Some(Self::Empty),
            'B' | 'b' | 'X' | 'x' => Some(Self::Black),
            'W' | 'w' | 'O' | 'o' => Some(Self::White),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Self::Black,
            Player::White => Self::White,
        }
    }
}

/// The 8x8 grid. `Copy`, so search branches take their own snapshot with a
/// plain assignment and never alias the live game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    cells: [Cell; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: d4/e5 White, e4/d5 Black.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(3, 3, Cell::White);
        board.set(3, 4, Cell::Black);
        board.set(4, 3, Cell::Black);
        board.set(4, 4, Cell::White);
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Parses eight rows of eight cells each (`.` empty, `B`/`X` black,
    /// `W`/`O` white). Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::WrongRowCount(rows.len()));
        }
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let mut c = 0;
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                if c >= BOARD_SIZE {
                    return Err(BoardParseError::WrongRowLength { row: r });
                }
                let cell = Cell::from_char(ch).ok_or(BoardParseError::InvalidCell {
                    row: r,
                    col: c,
                    ch,
                })?;
                board.set(r, c, cell);
                c += 1;
            }
            if c != BOARD_SIZE {
                return Err(BoardParseError::WrongRowLength { row: r });
            }
        }
        Ok(board)
    }

    #[must_use]
    pub fn square_index(row: usize, col: usize) -> usize {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        row * BOARD_SIZE + col
    }

    #[must_use]
    pub const fn index_to_coord(sq: usize) -> (usize, usize) {
        (sq / BOARD_SIZE, sq % BOARD_SIZE)
    }

    /// Steps one square from (row, col) in direction `dir`, or `None` at the edge.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn neighbor(row: usize, col: usize, dir: (isize, isize)) -> Option<(usize, usize)> {
        let r = row as isize + dir.0;
        let c = col as isize + dir.1;
        if r < 0 || c < 0 || r >= BOARD_SIZE as isize || c >= BOARD_SIZE as isize {
            return None;
        }
        Some((r as usize, c as usize))
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::square_index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::square_index(row, col)] = cell;
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(sq, &cell)| {
            let (r, c) = Self::index_to_coord(sq);
            (r, c, cell)
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                write!(f, "{}", self.get(r, c).to_char())?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    WrongRowCount(usize),
    WrongRowLength { row: usize },
    InvalidCell { row: usize, col: usize, ch: char },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(n) => write!(f, "expected {BOARD_SIZE} rows, found {n}"),
            Self::WrongRowLength { row } => {
                write!(f, "row {row} does not have {BOARD_SIZE} cells")
            }
            Self::InvalidCell { row, col, ch } => {
                write!(f, "invalid cell {ch:?} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}
