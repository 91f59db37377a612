//! Direction enums and neighbour-offset tables.
//!
//! Offsets are `(dx, dy)` with `y` growing downwards.

/// Square-grid offsets in [`SquareDirection`] order.
pub const SQUARE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),  // up
    (1, 0),   // right
    (0, 1),   // down
    (-1, 0),  // left
    (-1, -1), // up-left
    (-1, 1),  // down-left
    (1, 1),   // down-right
    (1, -1),  // up-right
];

/// Hex offsets for cells on even rows, in [`HexDirection`] order.
pub const HEX_OFFSETS_EVEN: [(i32, i32); 6] = [
    (0, -1),  // right-up
    (1, 0),   // right
    (0, 1),   // right-down
    (-1, 1),  // left-down
    (-1, 0),  // left
    (-1, -1), // left-up
];

/// Hex offsets for cells on odd rows, in [`HexDirection`] order.
///
/// Odd rows sit half a cell to the right of even rows, so the diagonal
/// offsets shift one column right.
pub const HEX_OFFSETS_ODD: [(i32, i32); 6] = [
    (1, -1), // right-up
    (1, 0),  // right
    (1, 1),  // right-down
    (0, 1),  // left-down
    (-1, 0), // left
    (0, -1), // left-up
];

/// One of the eight square-grid movement directions.
///
/// Discriminants are the indices into [`SQUARE_OFFSETS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SquareDirection {
    /// `(0, -1)`.
    Up = 0,
    /// `(1, 0)`.
    Right = 1,
    /// `(0, 1)`.
    Down = 2,
    /// `(-1, 0)`.
    Left = 3,
    /// `(-1, -1)`.
    UpLeft = 4,
    /// `(-1, 1)`.
    DownLeft = 5,
    /// `(1, 1)`.
    DownRight = 6,
    /// `(1, -1)`.
    UpRight = 7,
}

impl SquareDirection {
    /// All directions in table order.
    pub const ALL: [SquareDirection; 8] = [
        Self::Up,
        Self::Right,
        Self::Down,
        Self::Left,
        Self::UpLeft,
        Self::DownLeft,
        Self::DownRight,
        Self::UpRight,
    ];

    /// Look up a direction by table index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of this direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        SQUARE_OFFSETS[self.index()]
    }
}

/// One of the six hex-grid movement directions.
///
/// Discriminants are the indices into the hex offset tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HexDirection {
    /// Up and to the right.
    RightUp = 0,
    /// Same row, one to the right.
    Right = 1,
    /// Down and to the right.
    RightDown = 2,
    /// Down and to the left.
    LeftDown = 3,
    /// Same row, one to the left.
    Left = 4,
    /// Up and to the left.
    LeftUp = 5,
}

impl HexDirection {
    /// All directions in table order.
    pub const ALL: [HexDirection; 6] = [
        Self::RightUp,
        Self::Right,
        Self::RightDown,
        Self::LeftDown,
        Self::Left,
        Self::LeftUp,
    ];

    /// Look up a direction by table index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Table index of this direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` for this direction when standing on row `y`.
    pub fn offset(self, y: i32) -> (i32, i32) {
        if y.rem_euclid(2) == 0 {
            HEX_OFFSETS_EVEN[self.index()]
        } else {
            HEX_OFFSETS_ODD[self.index()]
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_round_trip() {
        for dir in SquareDirection::ALL {
            assert_eq!(SquareDirection::from_index(dir.index()), Some(dir));
        }
        assert_eq!(SquareDirection::from_index(8), None);
    }

    #[test]
    fn square_offsets_match_names() {
        assert_eq!(SquareDirection::Up.offset(), (0, -1));
        assert_eq!(SquareDirection::DownLeft.offset(), (-1, 1));
        assert_eq!(SquareDirection::UpRight.offset(), (1, -1));
    }

    #[test]
    fn hex_offsets_depend_on_row_parity() {
        assert_eq!(HexDirection::RightUp.offset(0), (0, -1));
        assert_eq!(HexDirection::RightUp.offset(1), (1, -1));
        assert_eq!(HexDirection::LeftDown.offset(2), (-1, 1));
        assert_eq!(HexDirection::LeftDown.offset(3), (0, 1));
        // Same-row moves ignore parity.
        assert_eq!(HexDirection::Right.offset(0), HexDirection::Right.offset(1));
    }

    #[test]
    fn hex_negative_rows_use_euclidean_parity() {
        assert_eq!(HexDirection::RightUp.offset(-1), HEX_OFFSETS_ODD[0]);
        assert_eq!(HexDirection::RightUp.offset(-2), HEX_OFFSETS_EVEN[0]);
    }

    #[test]
    fn hex_opposite_undoes_step() {
        for y in 0..4 {
            for dir in HexDirection::ALL {
                let (dx, dy) = dir.offset(y);
                let (bx, by) = dir.opposite().offset(y + dy);
                assert_eq!((dx + bx, dy + by), (0, 0), "{dir:?} on row {y}");
            }
        }
    }
}
