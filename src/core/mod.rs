//! Core game types: positions, players, walls, state, move descriptors.
//!
//! Everything here is plain data with serde support for the wire shape
//! exchanged with the remote game-session service. Rule enforcement lives
//! in [`crate::rules`]; nothing in this module validates a move.

pub mod moves;
pub mod player;
pub mod position;
pub mod state;
pub mod walls;

pub use moves::{AppliedMove, MoveKind};
pub use player::{Player, PlayerSide, STARTING_WALLS};
pub use position::{Position, ANCHOR_MAX, BOARD_MAX, BOARD_MIN};
pub use state::GameState;
pub use walls::{Orientation, WallSet};
