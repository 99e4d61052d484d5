//! Move descriptors.
//!
//! A move is a kind plus a target position: a pawn destination for
//! [`MoveKind::Move`], a wall anchor for the two wall kinds. Wire tokens
//! are `"D"`, `"MH"`, `"MV"`; parsing also accepts the long spellings used
//! at the interactive prompt.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::walls::Orientation;
use crate::error::GameError;

/// The three kinds of move a player can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Single-step pawn move.
    #[serde(rename = "D")]
    Move,
    /// Horizontal wall placement.
    #[serde(rename = "MH")]
    WallHorizontal,
    /// Vertical wall placement.
    #[serde(rename = "MV")]
    WallVertical,
}

impl MoveKind {
    /// Short wire token for this kind.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            MoveKind::Move => "D",
            MoveKind::WallHorizontal => "MH",
            MoveKind::WallVertical => "MV",
        }
    }

    /// The wall orientation this kind places, if any.
    #[must_use]
    pub const fn orientation(self) -> Option<Orientation> {
        match self {
            MoveKind::Move => None,
            MoveKind::WallHorizontal => Some(Orientation::Horizontal),
            MoveKind::WallVertical => Some(Orientation::Vertical),
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl std::str::FromStr for MoveKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "move" | "deplacement" | "déplacement" => Ok(MoveKind::Move),
            "mh" | "horizontal" | "wall-h" => Ok(MoveKind::WallHorizontal),
            "mv" | "vertical" | "wall-v" => Ok(MoveKind::WallVertical),
            other => Err(GameError::InvalidOrientation(other.to_string())),
        }
    }
}

/// The normalized descriptor returned once a move has been accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub kind: MoveKind,
    pub target: Position,
}

impl AppliedMove {
    #[must_use]
    pub const fn new(kind: MoveKind, target: Position) -> Self {
        Self { kind, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_spellings() {
        assert_eq!("D".parse::<MoveKind>().unwrap(), MoveKind::Move);
        assert_eq!("move".parse::<MoveKind>().unwrap(), MoveKind::Move);
        assert_eq!("mh".parse::<MoveKind>().unwrap(), MoveKind::WallHorizontal);
        assert_eq!(
            "horizontal".parse::<MoveKind>().unwrap(),
            MoveKind::WallHorizontal
        );
        assert_eq!("MV".parse::<MoveKind>().unwrap(), MoveKind::WallVertical);
        assert!(matches!(
            "diag".parse::<MoveKind>(),
            Err(GameError::InvalidOrientation(_))
        ));
    }

    #[test]
    fn test_wire_tokens() {
        assert_eq!(serde_json::to_string(&MoveKind::Move).unwrap(), "\"D\"");
        assert_eq!(
            serde_json::to_string(&MoveKind::WallHorizontal).unwrap(),
            "\"MH\""
        );
        let kind: MoveKind = serde_json::from_str("\"MV\"").unwrap();
        assert_eq!(kind, MoveKind::WallVertical);
    }
}
