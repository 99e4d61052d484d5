//! Wall orientations and the placed-wall set.
//!
//! A wall is identified by its anchor, a cell-corner intersection on the
//! 8×8 grid, plus an orientation. Anchor semantics:
//!
//! - a **horizontal** wall at `(x, y)` blocks vertical movement between
//!   rows y and y+1 in columns x and x+1;
//! - a **vertical** wall at `(x, y)` blocks horizontal movement between
//!   columns x and x+1 in rows y and y+1.
//!
//! Walls are append-only. The set preserves insertion order so that a
//! state serializes back to the wire exactly as it was received.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::error::GameError;

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "mh" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "mv" | "vertical" => Ok(Orientation::Vertical),
            other => Err(GameError::InvalidOrientation(other.to_string())),
        }
    }
}

/// All walls placed so far, split by orientation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSet {
    pub horizontal: Vec<Position>,
    pub vertical: Vec<Position>,
}

impl WallSet {
    /// An empty wall set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The anchors of one orientation, in placement order.
    #[must_use]
    pub fn of(&self, orientation: Orientation) -> &[Position] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Whether an anchor of this orientation is already occupied.
    #[must_use]
    pub fn contains(&self, orientation: Orientation, anchor: Position) -> bool {
        self.of(orientation).contains(&anchor)
    }

    /// Append a wall. No legality check; that is the rules engine's job.
    pub fn place(&mut self, orientation: Orientation, anchor: Position) {
        match orientation {
            Orientation::Horizontal => self.horizontal.push(anchor),
            Orientation::Vertical => self.vertical.push(anchor),
        }
    }

    /// Total number of placed walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Whether no wall has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}
