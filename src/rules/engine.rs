//! The legality and mutation engine.
//!
//! ## Pure layer
//!
//! [`move_pawn`], [`place_wall`] and [`apply_move`] never touch their
//! input: they validate against a freshly built [`BoardGraph`] and return
//! a complete successor state, or an error with the input state intact.
//! All-or-nothing semantics fall out of this shape for free; there is no
//! rollback path to get wrong.
//!
//! ## Validation order
//!
//! Checks run in a fixed order, and the first failure wins. For a wall:
//! unknown player, wall count, anchor bounds, anchor conflict, enclosure.
//! A duplicate anchor therefore always reports `WallConflict`, never
//! `PlayerWouldBeEnclosed`.
//!
//! ## Turn counter
//!
//! The global counter increments only when the second player's move is
//! accepted, i.e. `turn` counts completed rounds rather than individual
//! moves. The remote service shares this convention; tests pin it.

use crate::core::{AppliedMove, GameState, MoveKind, Orientation, PlayerSide, Position};
use crate::error::GameError;
use crate::graph::BoardGraph;

use super::auto;

fn side_of(state: &GameState, name: &str) -> Result<PlayerSide, GameError> {
    state
        .side_of(name)
        .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
}

/// Validate a single pawn step and return the resulting state.
///
/// Only the named player's position differs between input and output.
pub fn move_pawn(
    state: &GameState,
    name: &str,
    destination: Position,
) -> Result<GameState, GameError> {
    let side = side_of(state, name)?;

    if !destination.is_cell() {
        return Err(GameError::OutOfBounds(destination));
    }

    let graph = BoardGraph::build(state.positions(), &state.walls);
    let from = state.player(side).position;
    if !graph.has_move(from, destination) {
        return Err(GameError::IllegalMove {
            from,
            to: destination,
        });
    }

    let mut next = state.clone();
    next.players[side.index()].position = destination;
    Ok(next)
}

/// Validate a wall placement and return the resulting state.
///
/// The wall is added to a scratch copy first; only if both players can
/// still reach their goal row does the copy become the successor state,
/// with the placing player's wall count decremented by exactly one.
pub fn place_wall(
    state: &GameState,
    name: &str,
    anchor: Position,
    orientation: Orientation,
) -> Result<GameState, GameError> {
    let side = side_of(state, name)?;

    if state.player(side).walls == 0 {
        return Err(GameError::NoWallsLeft(name.to_string()));
    }
    if !anchor.is_anchor() {
        return Err(GameError::OutOfBounds(anchor));
    }
    if state.walls.contains(orientation, anchor) {
        return Err(GameError::WallConflict {
            orientation,
            anchor,
        });
    }

    let mut next = state.clone();
    next.walls.place(orientation, anchor);

    let graph = BoardGraph::build(next.positions(), &next.walls);
    for s in PlayerSide::ALL {
        if !graph.can_reach_goal(s) {
            return Err(GameError::PlayerWouldBeEnclosed(
                state.player(s).name.clone(),
            ));
        }
    }

    next.players[side.index()].walls -= 1;
    Ok(next)
}

/// Validate any move and return the successor state plus the normalized
/// move descriptor.
///
/// Fails with `GameAlreadyFinished` once a winner exists, whatever the
/// move. The turn counter increments only for the second player.
pub fn apply_move(
    state: &GameState,
    name: &str,
    kind: MoveKind,
    target: Position,
) -> Result<(GameState, AppliedMove), GameError> {
    let side = side_of(state, name)?;

    if let Some(winner) = state.winner() {
        return Err(GameError::GameAlreadyFinished {
            winner: winner.to_string(),
        });
    }

    let mut next = match kind {
        MoveKind::Move => move_pawn(state, name, target)?,
        MoveKind::WallHorizontal => place_wall(state, name, target, Orientation::Horizontal)?,
        MoveKind::WallVertical => place_wall(state, name, target, Orientation::Vertical)?,
    };

    if side == PlayerSide::Second {
        next.turn += 1;
    }

    Ok((next, AppliedMove::new(kind, target)))
}

/// The mutable engine: owns the authoritative [`GameState`] and commits
/// successor states produced by the pure layer.
///
/// Every public operation is atomic from the caller's perspective: either
/// the state advances by one accepted move, or it is byte-for-byte
/// unchanged.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a game at the default layout.
    #[must_use]
    pub fn new(first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            state: GameState::new(first_name, second_name),
        }
    }

    /// Resume a game from a deserialized state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Copy of the current state, for rendering and synchronization.
    ///
    /// A copy on purpose: collaborators must not mutate engine-internal
    /// state, all transitions go through this instance.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Move a pawn one step. See [`move_pawn`].
    pub fn move_pawn(&mut self, name: &str, destination: Position) -> Result<(), GameError> {
        self.state = move_pawn(&self.state, name, destination)?;
        Ok(())
    }

    /// Place a wall. See [`place_wall`].
    pub fn place_wall(
        &mut self,
        name: &str,
        anchor: Position,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        self.state = place_wall(&self.state, name, anchor, orientation)?;
        Ok(())
    }

    /// Apply any move and return its normalized descriptor. See [`apply_move`].
    pub fn apply_move(
        &mut self,
        name: &str,
        kind: MoveKind,
        target: Position,
    ) -> Result<AppliedMove, GameError> {
        let (next, applied) = apply_move(&self.state, name, kind, target)?;
        self.state = next;
        Ok(applied)
    }

    /// The winner's name, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.state.winner()
    }

    /// Select a shortest-path pawn step for `name` and commit it.
    pub fn play_auto(&mut self, name: &str) -> Result<AppliedMove, GameError> {
        let proposal = auto::select_auto_move(&self.state, name)?;
        self.apply_move(name, proposal.kind, proposal.target)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.state, f)
    }
}
