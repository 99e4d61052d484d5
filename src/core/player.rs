//! Players and player slots.
//!
//! ## PlayerSide
//!
//! A game always has exactly two players. `PlayerSide` names the slot in
//! turn order: `First` races toward row y = 9, `Second` toward row y = 1.
//!
//! ## Player
//!
//! Per-player data as it appears on the wire: a unique name, the number of
//! walls still in hand, and the pawn position. Only the rules engine
//! mutates a `Player`.

use serde::{Deserialize, Serialize};

use super::position::{Position, BOARD_MAX, BOARD_MIN};

/// Walls each player holds at the start of a game.
pub const STARTING_WALLS: u8 = 7;

/// Turn-order slot of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    First,
    Second,
}

impl PlayerSide {
    /// Both sides, in turn order.
    pub const ALL: [PlayerSide; 2] = [PlayerSide::First, PlayerSide::Second];

    /// Index of this side into `GameState::players`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSide::First => 0,
            PlayerSide::Second => 1,
        }
    }

    /// The row this side is racing toward.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            PlayerSide::First => BOARD_MAX,
            PlayerSide::Second => BOARD_MIN,
        }
    }

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerSide::First => PlayerSide::Second,
            PlayerSide::Second => PlayerSide::First,
        }
    }

    /// Starting pawn position for this side.
    #[must_use]
    pub const fn start_position(self) -> Position {
        match self {
            PlayerSide::First => Position::new(5, BOARD_MIN),
            PlayerSide::Second => Position::new(5, BOARD_MAX),
        }
    }
}

impl std::fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSide::First => write!(f, "player 1"),
            PlayerSide::Second => write!(f, "player 2"),
        }
    }
}

/// One player's slice of the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique name, used as the key in every engine operation.
    pub name: String,

    /// Walls still in hand.
    #[serde(rename = "wallsRemaining")]
    pub walls: u8,

    /// Current pawn position.
    pub position: Position,
}

impl Player {
    /// A player at the default starting layout for `side`.
    #[must_use]
    pub fn starting(name: impl Into<String>, side: PlayerSide) -> Self {
        Self {
            name: name.into(),
            walls: STARTING_WALLS,
            position: side.start_position(),
        }
    }

    /// Whether this player's pawn stands on the goal row of `side`.
    #[must_use]
    pub fn has_reached_goal(&self, side: PlayerSide) -> bool {
        self.position.y == side.goal_row()
    }
}
