//! Move validation and state transitions.
//!
//! The rules live in two layers:
//!
//! - `engine`: pure validation functions over `&GameState` that return a
//!   new state or a [`GameError`](crate::error::GameError), plus the
//!   mutable [`Game`] wrapper that owns the authoritative state and
//!   commits what the pure layer produced;
//! - `auto`: the shortest-path move selector.

pub mod auto;
pub mod engine;

pub use auto::select_auto_move;
pub use engine::{apply_move, move_pawn, place_wall, Game};
