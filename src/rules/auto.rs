//! Automatic move selection.
//!
//! A pawn-advance heuristic, not an opponent AI: it follows an unweighted
//! shortest path to the goal sentinel and never proposes a wall.

use crate::core::{AppliedMove, GameState, MoveKind};
use crate::error::GameError;
use crate::graph::BoardGraph;

/// Propose the next pawn step for `name` along a shortest path to their
/// goal row.
///
/// Pure: the state is not touched. Commit the proposal through
/// [`Game::apply_move`](super::Game::apply_move) or
/// [`Game::play_auto`](super::Game::play_auto).
pub fn select_auto_move(state: &GameState, name: &str) -> Result<AppliedMove, GameError> {
    // A finished game refuses every proposal, known player or not.
    if let Some(winner) = state.winner() {
        return Err(GameError::GameAlreadyFinished {
            winner: winner.to_string(),
        });
    }

    let side = state
        .side_of(name)
        .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

    let graph = BoardGraph::build(state.positions(), &state.walls);
    match graph.first_step_toward_goal(side) {
        Some(step) => Ok(AppliedMove::new(MoveKind::Move, step)),
        // Unreachable while the enclosure rule holds: every accepted wall
        // placement preserved a path for both players.
        None => Err(GameError::PlayerWouldBeEnclosed(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_selects_the_forced_step() {
        let state = GameState::new("alice", "bob");
        let proposal = select_auto_move(&state, "bob").unwrap();
        assert_eq!(proposal.kind, MoveKind::Move);
        assert_eq!(proposal.target, Position::new(5, 8));
    }

    #[test]
    fn test_finished_game_checked_before_the_name() {
        let mut state = GameState::new("alice", "bob");
        state.players[0].position = Position::new(5, 9);
        // Once a winner exists, even an unknown name gets the terminal error.
        assert!(matches!(
            select_auto_move(&state, "mallory"),
            Err(GameError::GameAlreadyFinished { .. })
        ));
        assert!(matches!(
            select_auto_move(&state, "bob"),
            Err(GameError::GameAlreadyFinished { .. })
        ));

        // On a live game an unknown name is still rejected.
        let live = GameState::new("alice", "bob");
        assert!(matches!(
            select_auto_move(&live, "mallory"),
            Err(GameError::UnknownPlayer(_))
        ));
    }
}
