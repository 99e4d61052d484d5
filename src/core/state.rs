//! Authoritative game state.
//!
//! `GameState` is the unit of persistence exchanged with the remote
//! game-session service:
//!
//! ```json
//! {
//!   "players": [
//!     {"name": "alice", "wallsRemaining": 7, "position": [5, 1]},
//!     {"name": "bob", "wallsRemaining": 7, "position": [5, 9]}
//!   ],
//!   "walls": {"horizontal": [[5, 5]], "vertical": []},
//!   "turnIndex": 0
//! }
//! ```
//!
//! Deserializing and re-serializing a state reproduces it unchanged.
//! Mutation goes through [`crate::rules::Game`] exclusively; this module
//! only offers queries.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerSide};
use super::position::Position;
use super::walls::WallSet;

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The two players, in turn order.
    pub players: [Player; 2],

    /// Every wall placed so far.
    pub walls: WallSet,

    /// The global turn counter. Incremented only when the second player's
    /// move is accepted, so it counts completed rounds; see `rules`.
    #[serde(rename = "turnIndex", default)]
    pub turn: u32,
}

impl GameState {
    /// A fresh game at the default layout: both pawns on column 5, facing
    /// each other across the board, 7 walls each.
    #[must_use]
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            players: [
                Player::starting(first_name, PlayerSide::First),
                Player::starting(second_name, PlayerSide::Second),
            ],
            walls: WallSet::new(),
            turn: 0,
        }
    }

    /// The player in a given slot.
    #[must_use]
    pub fn player(&self, side: PlayerSide) -> &Player {
        &self.players[side.index()]
    }

    /// Look a player up by name.
    #[must_use]
    pub fn side_of(&self, name: &str) -> Option<PlayerSide> {
        PlayerSide::ALL
            .into_iter()
            .find(|side| self.player(*side).name == name)
    }

    /// Both pawn positions, in turn order.
    #[must_use]
    pub fn positions(&self) -> [Position; 2] {
        [
            self.players[0].position,
            self.players[1].position,
        ]
    }

    /// The winner's name, if either pawn stands on its goal row.
    ///
    /// The first player's win condition is evaluated first. Pure query;
    /// calling it repeatedly without an intervening move returns the same
    /// answer.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        PlayerSide::ALL
            .into_iter()
            .find(|side| self.player(*side).has_reached_goal(*side))
            .map(|side| self.player(side).name.as_str())
    }
}
