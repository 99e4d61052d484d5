//! # quoridor
//!
//! A board legality engine for two-player Quoridor on a 9×9 grid, plus the
//! glue around it: text rendering, a remote game-session client, and an
//! automatic move selector.
//!
//! ## Design Principles
//!
//! 1. **Correctness by reconstruction**: the reachability graph is rebuilt
//!    from scratch on every validation call. The board is tiny (81 cells),
//!    so a fresh build is cheaper than getting incremental edge maintenance
//!    wrong.
//!
//! 2. **Pure validation core**: every rule check is a function of
//!    `&GameState` returning a new state or a typed error. The mutable
//!    [`Game`](rules::Game) wrapper only commits states the pure core
//!    produced, so a rejected move can never leave partial changes behind.
//!
//! 3. **One owner per state**: a `GameState` belongs to exactly one `Game`.
//!    Collaborators that render or sync it get copies, never mutable access.
//!
//! ## Modules
//!
//! - `core`: positions, players, walls, game state, move descriptors
//! - `graph`: the per-call reachability graph with goal sentinels
//! - `rules`: move validation, state transitions, the auto-move selector
//! - `render`: text rendering of the board
//! - `client`: blocking HTTP client for the remote game-session service
//! - `error`: engine and API error taxonomies

pub mod client;
pub mod core;
pub mod error;
pub mod graph;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AppliedMove, GameState, MoveKind, Orientation, Player, PlayerSide, Position, WallSet,
    BOARD_MAX, BOARD_MIN, STARTING_WALLS,
};

pub use crate::error::{ApiError, GameError};

pub use crate::graph::BoardGraph;

pub use crate::rules::Game;

pub use crate::client::{
    submit_and_sync, Credentials, GameClient, MoveReply, RemoteSession, Session, SyncOutcome,
};
