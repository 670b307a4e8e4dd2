use crate::logic::board::BOARD_SIZE;

// Positional class weights. Every disc also earns WEIGHT_DISC on top of
// its class weight.
pub const WEIGHT_CORNER: i32 = 50;
pub const WEIGHT_C_SQUARE: i32 = -20;
pub const WEIGHT_X_SQUARE: i32 = -30;
pub const WEIGHT_EDGE: i32 = 5;
pub const WEIGHT_DISC: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareClass {
    Corner,
    /// Edge square orthogonally next to a corner.
    CSquare,
    /// Square diagonally next to a corner.
    XSquare,
    Edge,
    Interior,
}

pub const fn square_class(row: usize, col: usize) -> SquareClass {
    const LAST: usize = BOARD_SIZE - 1;
    // Fold onto the top-left quadrant.
    let r = if row > LAST / 2 { LAST - row } else { row };
    let c = if col > LAST / 2 { LAST - col } else { col };
    match (r, c) {
        (0, 0) => SquareClass::Corner,
        (0, 1) | (1, 0) => SquareClass::CSquare,
        (1, 1) => SquareClass::XSquare,
        (0, _) | (_, 0) => SquareClass::Edge,
        _ => SquareClass::Interior,
    }
}

// Default table: class weight plus WEIGHT_DISC.
#[cfg(test)]
#[rustfmt::skip]
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [ 51, -19,   6,   6,   6,   6, -19,  51],
    [-19, -29,   1,   1,   1,   1, -29, -19],
    [  6,   1,   1,   1,   1,   1,   1,   6],
    [  6,   1,   1,   1,   1,   1,   1,   6],
    [  6,   1,   1,   1,   1,   1,   1,   6],
    [  6,   1,   1,   1,   1,   1,   1,   6],
    [-19, -29,   1,   1,   1,   1, -29, -19],
    [ 51, -19,   6,   6,   6,   6, -19,  51],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn class_weight(class: SquareClass) -> i32 {
        match class {
            SquareClass::Corner => WEIGHT_CORNER,
            SquareClass::CSquare => WEIGHT_C_SQUARE,
            SquareClass::XSquare => WEIGHT_X_SQUARE,
            SquareClass::Edge => WEIGHT_EDGE,
            SquareClass::Interior => 0,
        }
    }

    #[test]
    fn test_table_matches_classes() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert_eq!(
                    POSITION_WEIGHTS[r][c],
                    class_weight(square_class(r, c)) + WEIGHT_DISC,
                    "square ({r}, {c})"
                );
            }
        }
    }

    #[test]
    fn test_square_classes() {
        assert_eq!(square_class(7, 0), SquareClass::Corner);
        assert_eq!(square_class(0, 6), SquareClass::CSquare);
        assert_eq!(square_class(6, 6), SquareClass::XSquare);
        assert_eq!(square_class(4, 7), SquareClass::Edge);
        assert_eq!(square_class(3, 4), SquareClass::Interior);
    }
}
