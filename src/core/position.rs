//! Board coordinates.
//!
//! Cells live on a 9×9 grid, `(1, 1)` bottom-left to `(9, 9)` top-right.
//! Wall anchors live on the 8×8 grid of interior cell-corner intersections,
//! `(1, 1)` to `(8, 8)`. The same [`Position`] type carries both; the two
//! range checks are [`Position::is_cell`] and [`Position::is_anchor`].
//!
//! On the wire a position is a two-element array `[x, y]`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Lowest valid cell coordinate.
pub const BOARD_MIN: u8 = 1;

/// Highest valid cell coordinate.
pub const BOARD_MAX: u8 = 9;

/// Highest valid wall-anchor coordinate (anchors share `BOARD_MIN` as lower bound).
pub const ANCHOR_MAX: u8 = 8;

/// A board coordinate.
///
/// ```
/// use quoridor::core::Position;
///
/// let p = Position::new(5, 9);
/// assert!(p.is_cell());
/// assert!(!p.is_anchor());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 2]", into = "[u8; 2]")]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    /// Create a position. No range check; see `is_cell` / `is_anchor`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this position is a cell of the 9×9 board.
    #[must_use]
    pub fn is_cell(self) -> bool {
        (BOARD_MIN..=BOARD_MAX).contains(&self.x) && (BOARD_MIN..=BOARD_MAX).contains(&self.y)
    }

    /// Whether this position is a valid wall anchor on the 8×8 intersection grid.
    #[must_use]
    pub fn is_anchor(self) -> bool {
        (BOARD_MIN..=ANCHOR_MAX).contains(&self.x) && (BOARD_MIN..=ANCHOR_MAX).contains(&self.y)
    }

    /// The orthogonal neighbours of this cell that are still on the board.
    ///
    /// At most 4 entries; 2 in a corner, 3 on an edge.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if self.x > BOARD_MIN {
            out.push(Position::new(self.x - 1, self.y));
        }
        if self.x < BOARD_MAX {
            out.push(Position::new(self.x + 1, self.y));
        }
        if self.y > BOARD_MIN {
            out.push(Position::new(self.x, self.y - 1));
        }
        if self.y < BOARD_MAX {
            out.push(Position::new(self.x, self.y + 1));
        }
        out
    }
}

impl From<[u8; 2]> for Position {
    fn from([x, y]: [u8; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [u8; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
