//! Text rendering of the board.
//!
//! A legend names each player and their remaining walls as tally bars,
//! then the 9×9 grid is drawn top row first with `.` cell markers, the
//! pawns as `1` and `2`, and wall overlays.
//!
//! ```text
//! Legend:
//!    1=alice, walls=|||||||
//!    2=bob,   walls=|||||||
//!    -----------------------------------
//! 9 | .   .   .   .   2   .   .   .   . |
//!   |                                   |
//! 8 | .   .   .   .   .   .   .   .   . |
//!   ...
//! 1 | .   .   .   .   1   .   .   .   . |
//! --|-----------------------------------
//!   | 1   2   3   4   5   6   7   8   9
//! ```

use std::fmt;

use crate::core::{GameState, Player, WallSet, BOARD_MAX, BOARD_MIN};

const INNER_WIDTH: usize = 35;

/// Column of the interior character strip where cell `x` is drawn.
fn cell_col(x: u8) -> usize {
    4 * (x as usize - 1) + 1
}

/// Grid row where the cell row `y` is drawn (row 9 is at the top).
fn cell_row(y: u8) -> usize {
    1 + 2 * (BOARD_MAX - y) as usize
}

/// The legend block: one line per player, names padded to equal width.
#[must_use]
pub fn legend(players: &[Player; 2]) -> String {
    let width = players.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let mut lines = vec!["Legend:".to_string()];
    for (i, player) in players.iter().enumerate() {
        let tally = "|".repeat(player.walls as usize);
        lines.push(format!(
            "   {}={},{} walls={}",
            i + 1,
            player.name,
            " ".repeat(width - player.name.len()),
            tally
        ));
    }
    lines.join("\n")
}

/// The board block: bordered grid with pawns and wall overlays.
#[must_use]
pub fn board(players: &[Player; 2], walls: &WallSet) -> String {
    let mut grid: Vec<Vec<char>> = Vec::new();

    grid.push(format!("   {}", "-".repeat(INNER_WIDTH)).chars().collect());
    for y in (BOARD_MIN..=BOARD_MAX).rev() {
        let mut inner = vec![' '; INNER_WIDTH];
        for x in BOARD_MIN..=BOARD_MAX {
            inner[cell_col(x)] = '.';
        }
        for (i, player) in players.iter().enumerate() {
            if player.position.y == y {
                inner[cell_col(player.position.x)] =
                    char::from_digit(i as u32 + 1, 10).unwrap_or('?');
            }
        }
        let row: String = inner.into_iter().collect();
        grid.push(format!("{y} |{row}|").chars().collect());
        if y > BOARD_MIN {
            grid.push(format!("  |{}|", " ".repeat(INNER_WIDTH)).chars().collect());
        }
    }
    grid.push(format!("--|{}", "-".repeat(INNER_WIDTH)).chars().collect());
    let axis: Vec<String> = (BOARD_MIN..=BOARD_MAX).map(|x| x.to_string()).collect();
    grid.push(format!("  | {}", axis.join("   ")).chars().collect());

    // A vertical wall at (x, y) stands right of column x, covering the
    // cell rows y+1 and y and the interstice between them.
    for anchor in &walls.vertical {
        let col = 3 + 4 * anchor.x as usize;
        let top = cell_row(anchor.y + 1);
        grid[top][col] = '|';
        grid[top + 1][col] = '|';
        grid[top + 2][col] = '|';
    }

    // A horizontal wall at (x, y) lies on the interstice above row y,
    // spanning the cells in columns x and x+1.
    for anchor in &walls.horizontal {
        let row = cell_row(anchor.y) - 1;
        let start = 3 + cell_col(anchor.x);
        // Clamp so a wall in column 8 does not overwrite the right border.
        for col in start..(start + 7).min(3 + INNER_WIDTH) {
            grid[row][col] = '-';
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            legend(&self.players),
            board(&self.players, &self.walls)
        )
    }
}
