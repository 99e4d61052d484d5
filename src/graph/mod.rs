//! The reachability graph.
//!
//! ## Shape
//!
//! 81 cell nodes plus two goal sentinels. Edges are directed: one per legal
//! single orthogonal step between adjacent cells not separated by a wall
//! (blocked steps lose both directions), plus an edge from every cell on
//! row y = 9 to the first player's sentinel and from every cell on row
//! y = 1 to the second player's. Sentinel edges model the finish line, not
//! a physical cell boundary, so walls never block them.
//!
//! ## Lifecycle
//!
//! A `BoardGraph` is ephemeral: rebuilt from `(positions, walls)` on every
//! validation call and dropped afterwards. The board is tiny, so a fresh
//! brute-force build per call is preferred over incremental edge
//! maintenance; do not cache one across moves.

use petgraph::algo::{astar, has_path_connecting};
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Orientation, PlayerSide, Position, WallSet, BOARD_MAX, BOARD_MIN};

/// A node of the reachability graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Node {
    Cell(Position),
    Goal(PlayerSide),
}

/// The directed legality graph for one `(positions, walls)` snapshot.
pub struct BoardGraph {
    graph: DiGraph<Node, ()>,
    cells: FxHashMap<Position, NodeIndex>,
    pawns: [NodeIndex; 2],
    goals: [NodeIndex; 2],
}

impl BoardGraph {
    /// Build the graph for the given pawn positions and wall set.
    ///
    /// Pure function of its inputs. Both positions must be valid cells.
    #[must_use]
    pub fn build(positions: [Position; 2], walls: &WallSet) -> Self {
        let cell_count = (BOARD_MAX as usize) * (BOARD_MAX as usize);
        let mut graph = DiGraph::with_capacity(cell_count + 2, cell_count * 4);
        let mut cells = FxHashMap::default();

        for y in BOARD_MIN..=BOARD_MAX {
            for x in BOARD_MIN..=BOARD_MAX {
                let pos = Position::new(x, y);
                cells.insert(pos, graph.add_node(Node::Cell(pos)));
            }
        }

        let goals = [
            graph.add_node(Node::Goal(PlayerSide::First)),
            graph.add_node(Node::Goal(PlayerSide::Second)),
        ];

        // Orthogonal adjacencies minus wall-blocked crossings. Each
        // unordered pair is visited once from each endpoint, which yields
        // exactly the two directed edges of an open crossing.
        for (&pos, &idx) in &cells {
            for neighbor in pos.neighbors() {
                if !blocked(walls, pos, neighbor) {
                    graph.add_edge(idx, cells[&neighbor], ());
                }
            }
        }

        // Finish-line edges, never blocked by walls.
        for side in PlayerSide::ALL {
            for x in BOARD_MIN..=BOARD_MAX {
                let cell = cells[&Position::new(x, side.goal_row())];
                graph.add_edge(cell, goals[side.index()], ());
            }
        }

        let pawns = [cells[&positions[0]], cells[&positions[1]]];

        Self {
            graph,
            cells,
            pawns,
            goals,
        }
    }

    /// The cells reachable from `from` in one legal step.
    #[must_use]
    pub fn successors(&self, from: Position) -> SmallVec<[Position; 4]> {
        let Some(&idx) = self.cells.get(&from) else {
            return SmallVec::new();
        };
        self.graph
            .neighbors(idx)
            .filter_map(|n| match self.graph[n] {
                Node::Cell(pos) => Some(pos),
                Node::Goal(_) => None,
            })
            .collect()
    }

    /// Whether `to` is a direct successor of `from`.
    #[must_use]
    pub fn has_move(&self, from: Position, to: Position) -> bool {
        self.successors(from).contains(&to)
    }

    /// Whether a side's pawn can still reach its goal sentinel.
    #[must_use]
    pub fn can_reach_goal(&self, side: PlayerSide) -> bool {
        has_path_connecting(
            &self.graph,
            self.pawns[side.index()],
            self.goals[side.index()],
            None,
        )
    }

    /// First cell of an unweighted shortest path from a side's pawn to its
    /// goal sentinel, or `None` if the pawn is enclosed.
    ///
    /// Returns `None` as well when the pawn already stands on its goal row
    /// (the path's only intermediate node is the sentinel).
    #[must_use]
    pub fn first_step_toward_goal(&self, side: PlayerSide) -> Option<Position> {
        let goal = self.goals[side.index()];
        let (_, path) = astar(
            &self.graph,
            self.pawns[side.index()],
            |n| n == goal,
            |_| 1u32,
            |_| 0u32,
        )?;
        match self.graph[*path.get(1)?] {
            Node::Cell(pos) => Some(pos),
            Node::Goal(_) => None,
        }
    }
}

/// Whether a wall blocks the single step between two adjacent cells.
///
/// Works in both directions: the crossing is identified by the lower
/// coordinate of the pair.
fn blocked(walls: &WallSet, from: Position, to: Position) -> bool {
    if from.x == to.x {
        // Vertical step across the boundary between rows y and y+1.
        let y = from.y.min(to.y);
        let x = from.x;
        walls.contains(Orientation::Horizontal, Position::new(x, y))
            || (x > BOARD_MIN && walls.contains(Orientation::Horizontal, Position::new(x - 1, y)))
    } else {
        // Horizontal step across the boundary between columns x and x+1.
        let x = from.x.min(to.x);
        let y = from.y;
        walls.contains(Orientation::Vertical, Position::new(x, y))
            || (y > BOARD_MIN && walls.contains(Orientation::Vertical, Position::new(x, y - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_positions() -> [Position; 2] {
        [Position::new(5, 1), Position::new(5, 9)]
    }

    #[test]
    fn test_open_board_successors() {
        let graph = BoardGraph::build(start_positions(), &WallSet::new());

        assert_eq!(graph.successors(Position::new(5, 5)).len(), 4);
        assert_eq!(graph.successors(Position::new(1, 1)).len(), 2);
        assert_eq!(graph.successors(Position::new(1, 5)).len(), 3);
        assert!(graph.has_move(Position::new(5, 1), Position::new(5, 2)));
        assert!(!graph.has_move(Position::new(5, 1), Position::new(5, 3)));
    }

    #[test]
    fn test_horizontal_wall_blocks_both_spanned_columns() {
        let mut walls = WallSet::new();
        walls.place(Orientation::Horizontal, Position::new(5, 5));
        let graph = BoardGraph::build(start_positions(), &walls);

        // Columns 5 and 6 lose the row-5/row-6 crossing, both directions.
        assert!(!graph.has_move(Position::new(5, 5), Position::new(5, 6)));
        assert!(!graph.has_move(Position::new(5, 6), Position::new(5, 5)));
        assert!(!graph.has_move(Position::new(6, 5), Position::new(6, 6)));

        // Column 4 and the crossing below are untouched.
        assert!(graph.has_move(Position::new(4, 5), Position::new(4, 6)));
        assert!(graph.has_move(Position::new(5, 4), Position::new(5, 5)));
    }

    #[test]
    fn test_vertical_wall_blocks_both_spanned_rows() {
        let mut walls = WallSet::new();
        walls.place(Orientation::Vertical, Position::new(3, 3));
        let graph = BoardGraph::build(start_positions(), &walls);

        assert!(!graph.has_move(Position::new(3, 3), Position::new(4, 3)));
        assert!(!graph.has_move(Position::new(4, 4), Position::new(3, 4)));
        assert!(graph.has_move(Position::new(3, 2), Position::new(4, 2)));
        assert!(graph.has_move(Position::new(3, 5), Position::new(4, 5)));
    }

    #[test]
    fn test_goal_reachability_on_open_board() {
        let graph = BoardGraph::build(start_positions(), &WallSet::new());
        assert!(graph.can_reach_goal(PlayerSide::First));
        assert!(graph.can_reach_goal(PlayerSide::Second));
    }

    #[test]
    fn test_first_step_heads_straight_for_the_goal() {
        let graph = BoardGraph::build(start_positions(), &WallSet::new());

        // Only one neighbour shortens the distance; the step is forced.
        assert_eq!(
            graph.first_step_toward_goal(PlayerSide::First),
            Some(Position::new(5, 2))
        );
        assert_eq!(
            graph.first_step_toward_goal(PlayerSide::Second),
            Some(Position::new(5, 8))
        );
    }

    #[test]
    fn test_first_step_detours_around_a_wall() {
        let mut walls = WallSet::new();
        // Block the straight descent from (5, 9).
        walls.place(Orientation::Horizontal, Position::new(5, 8));
        let graph = BoardGraph::build(start_positions(), &walls);

        let step = graph.first_step_toward_goal(PlayerSide::Second);
        assert!(
            step == Some(Position::new(4, 9)) || step == Some(Position::new(6, 9)),
            "expected a sidestep, got {step:?}"
        );
    }

    #[test]
    fn test_sealed_off_pawn_has_no_path() {
        let mut walls = WallSet::new();
        for x in [1, 3, 5, 7] {
            walls.place(Orientation::Horizontal, Position::new(x, 8));
        }
        walls.place(Orientation::Vertical, Position::new(8, 8));
        let graph = BoardGraph::build(start_positions(), &walls);

        assert!(!graph.can_reach_goal(PlayerSide::Second));
        assert!(graph.first_step_toward_goal(PlayerSide::Second).is_none());
        // The first player still slips through column 9.
        assert!(graph.can_reach_goal(PlayerSide::First));
    }
}
