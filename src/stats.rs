//! Summary numbers for a generated maze

use crate::grid::{CellState, Grid};
use std::fmt;

/// Counts of walls and passages, and the solution length if one was found
#[derive(Clone, Debug, PartialEq)]
pub struct MazeStats {
    /// Grid width
    pub width: usize,
    /// Grid height
    pub height: usize,
    /// Number of wall cells
    pub walls: usize,
    /// Number of passage cells
    pub passages: usize,
    /// Number of cells on the shortest walk from entrance to exit, both included
    pub solution_length: Option<usize>,
}

impl MazeStats {
    /// Counts the cells of a grid
    pub fn collect(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            walls: grid.count(CellState::Wall),
            passages: grid.count(CellState::Passage),
            solution_length: None,
        }
    }

    /// Records the length of a solution
    pub fn with_solution_length(mut self, length: Option<usize>) -> Self {
        self.solution_length = length;
        self
    }

    /// Share of passage cells, as a percentage rounded to two decimals
    ///
    /// ```
    /// use maze_gen::grid::standard_grids::StandardMaze;
    /// use maze_gen::stats::MazeStats;
    ///
    /// let stats = MazeStats::collect(&StandardMaze::Small.get_grid());
    /// assert_eq!(stats.passable_percent(), 36.0);
    /// ```
    pub fn passable_percent(&self) -> f64 {
        let total = self.walls + self.passages;
        if total == 0 {
            return 0.0;
        }
        let percent = self.passages as f64 / total as f64 * 100.0;
        (percent * 100.0).round() / 100.0
    }
}

impl fmt::Display for MazeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}x{}", self.width, self.height)?;
        writeln!(f, "Walls: {}", self.walls)?;
        writeln!(f, "Passages: {}", self.passages)?;
        write!(f, "Passable: {}%", self.passable_percent())?;
        if let Some(length) = self.solution_length {
            write!(f, "\nSolution length: {length}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::StandardMaze;

    #[test]
    fn counts() {
        let stats = MazeStats::collect(&StandardMaze::Serpentine.get_grid());
        assert_eq!(stats.width, 7);
        assert_eq!(stats.height, 7);
        assert_eq!(stats.passages, 19);
        assert_eq!(stats.walls, 30);
        assert_eq!(stats.solution_length, None);
    }

    #[test]
    fn percent_rounding() {
        // 19 / 49 = 38.775...
        let stats = MazeStats::collect(&StandardMaze::Serpentine.get_grid());
        assert_eq!(stats.passable_percent(), 38.78);
    }

    #[test]
    fn display() {
        let stats =
            MazeStats::collect(&StandardMaze::Minimal.get_grid()).with_solution_length(Some(3));
        assert_eq!(
            stats.to_string(),
            "Size: 3x3\nWalls: 6\nPassages: 3\nPassable: 33.33%\nSolution length: 3"
        );
    }

    #[test]
    fn display_without_solution() {
        let stats = MazeStats::collect(&StandardMaze::Blocked.get_grid());
        assert!(!stats.to_string().contains("Solution"));
    }
}
