#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of hand-drawn mazes, mostly used to check pathing and rendering

use crate::grid::{CellState, Grid};
use serde::{Deserialize, Serialize};

const I: CellState = CellState::Wall;
#[allow(non_upper_case_globals)]
const o: CellState = CellState::Passage;

/// Names for the hand-drawn mazes in this module
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// [`MAZE_MINIMAL`]
    Minimal,
    /// [`MAZE_SMALL`]
    #[default]
    Small,
    /// [`MAZE_BLOCKED`]
    Blocked,
    /// [`MAZE_SERPENTINE`]
    Serpentine,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 4] {
        [Self::Minimal, Self::Small, Self::Blocked, Self::Serpentine]
    }

    /// Get the [`Grid`] associated with this enum
    pub fn get_grid(&self) -> Grid {
        match self {
            Self::Minimal => Grid::from_fixture(&MAZE_MINIMAL),
            Self::Small => Grid::from_fixture(&MAZE_SMALL),
            Self::Blocked => Grid::from_fixture(&MAZE_BLOCKED),
            Self::Serpentine => Grid::from_fixture(&MAZE_SERPENTINE),
        }
    }
}

/// The only maze a 3x3 grid can hold: one junction, entrance and exit on either side
pub const MAZE_MINIMAL: [[CellState; 3]; 3] = [
    [I, I, I],
    [o, o, o],
    [I, I, I],
];

/// A 5x5 perfect maze
///
/// ```
/// use maze_gen::grid::standard_grids::StandardMaze;
/// use maze_gen::pathing::shortest_path;
///
/// let grid = StandardMaze::Small.get_grid();
/// assert!(shortest_path(&grid, grid.entrance(), grid.exit()).is_some());
/// ```
pub const MAZE_SMALL: [[CellState; 5]; 5] = [
    [I, I, I, I, I],
    [o, o, o, o, I],
    [I, I, I, o, I],
    [I, o, o, o, o],
    [I, I, I, I, I],
];

/// A 5x5 grid where the exit cannot be reached from the entrance
pub const MAZE_BLOCKED: [[CellState; 5]; 5] = [
    [I, I, I, I, I],
    [o, o, o, I, I],
    [I, I, I, I, I],
    [I, o, o, o, o],
    [I, I, I, I, I],
];

/// A 7x7 perfect maze with a single winding corridor
pub const MAZE_SERPENTINE: [[CellState; 7]; 7] = [
    [I, I, I, I, I, I, I],
    [o, o, o, o, o, o, I],
    [I, I, I, I, I, o, I],
    [I, o, o, o, o, o, I],
    [I, o, I, I, I, I, I],
    [I, o, o, o, o, o, o],
    [I, I, I, I, I, I, I],
];
