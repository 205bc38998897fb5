//! Logical grid structs and utilities.

use crate::constants::MIN_DIMENSION;
use crate::error::MazeError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

pub mod standard_grids;

/// An integer location on the maze grid
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Column - increases to the right
    pub x: usize,
    /// Row - increases downwards
    pub y: usize,
}

impl Location {
    /// Create a new Location
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the [`Location`] `distance` cells away in the given direction, or `None` if that
    /// either coordinate would leave the range of `usize`.
    ///
    /// Upper bounds are not checked; see [`Grid::in_bounds`].
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_gen::grid::{Direction, Location};
    ///
    /// let p = Location::new(1, 1);
    /// assert_eq!(p.step(Direction::Right, 2), Some(Location::new(3, 1)));
    /// assert_eq!(p.step(Direction::Up, 1), Some(Location::new(1, 0)));
    /// assert_eq!(p.step(Direction::Up, 2), None);
    /// ```
    pub fn step(&self, direction: Direction, distance: usize) -> Option<Self> {
        match direction {
            Direction::Up => self.y.checked_sub(distance).map(|y| Self::new(self.x, y)),
            Direction::Right => self.x.checked_add(distance).map(|x| Self::new(x, self.y)),
            Direction::Down => self.y.checked_add(distance).map(|y| Self::new(self.x, y)),
            Direction::Left => self.x.checked_sub(distance).map(|x| Self::new(x, self.y)),
        }
    }
}

/// Enum for direction values.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// Up, or -y
    Up = 0,
    /// Right, or +x
    Right = 1,
    /// Down, or +y
    Down = 2,
    /// Left, or -x
    Left = 3,
}

impl Direction {
    /// Every direction, clockwise from [`Direction::Up`]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
}

/// The state of one cell of a [`Grid`]
///
/// The numeric values are the 0/1 encoding used when a maze is exported as a matrix.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum CellState {
    /// Open, can be walked through
    Passage = 0,
    /// Blocks movement
    #[default]
    Wall = 1,
}

/// A 2D grid of walls and passages
///
/// Cells are stored row by row and addressed by `(x, y)`. The size is fixed when the grid is
/// created; both dimensions are odd and at least [`MIN_DIMENSION`], so that junction cells sit at
/// odd coordinates with a border of walls around them.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

/// Checks the size rules for a [`Grid`]
/// Checks the dimensions and returns the number of cells
fn validate_dimensions(width: usize, height: usize) -> Result<usize, MazeError> {
    let valid = |n: usize| n >= MIN_DIMENSION && n % 2 == 1;
    if !(valid(width) && valid(height)) {
        return Err(MazeError::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&cells| cells <= isize::MAX as usize)
        .ok_or(MazeError::TooLarge { width, height })
}

impl Grid {
    /// Creates a grid where every cell is a [`CellState::Wall`]
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_gen::grid::{CellState, Grid};
    ///
    /// let grid = Grid::new(5, 5).unwrap();
    /// assert_eq!(grid.get(2, 2), Ok(CellState::Wall));
    /// assert!(Grid::new(2, 5).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let cells = validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Wall; cells],
        })
    }

    /// Builds a grid from rows that are already known to be valid
    pub(crate) fn from_fixture<const W: usize, const H: usize>(rows: &[[CellState; W]; H]) -> Self {
        debug_assert!(validate_dimensions(W, H).is_ok());
        Self {
            width: W,
            height: H,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Returns `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the location lies inside the grid
    pub fn in_bounds(&self, p: &Location) -> bool {
        p.x < self.width && p.y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the state of the cell at `(x, y)`
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_gen::grid::{CellState, Grid};
    /// use maze_gen::MazeError;
    ///
    /// let grid = Grid::new(3, 3).unwrap();
    /// assert_eq!(grid.get(0, 0), Ok(CellState::Wall));
    /// assert!(matches!(grid.get(3, 0), Err(MazeError::OutOfBounds { .. })));
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, MazeError> {
        Ok(self.cells[self.index(x, y)?])
    }

    /// Changes the state of the cell at `(x, y)`
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), MazeError> {
        let i = self.index(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Returns the state at a location, treating everything outside the grid as a wall
    pub fn state_at(&self, p: &Location) -> CellState {
        self.get(p.x, p.y).unwrap_or(CellState::Wall)
    }

    /// Whether the location is inside the grid and open
    pub fn is_passage(&self, p: &Location) -> bool {
        self.state_at(p) == CellState::Passage
    }

    /// Opens a location that the caller has already bounds-checked
    pub(crate) fn open(&mut self, p: Location) {
        debug_assert!(self.in_bounds(&p));
        let i = p.y * self.width + p.x;
        self.cells[i] = CellState::Passage;
    }

    /// Sets every cell to the given state
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterates over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// The entrance, on the left edge
    pub fn entrance(&self) -> Location {
        Location::new(0, 1)
    }

    /// The exit opened by carving, on the right edge
    pub fn exit(&self) -> Location {
        Location::new(self.width - 1, self.height - 2)
    }

    /// The bottom right corner
    pub fn corner(&self) -> Location {
        Location::new(self.width - 1, self.height - 1)
    }

    /// Returns all the open neighbors of the given position, in the order up, right, down, left.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_gen::grid::standard_grids::StandardMaze;
    /// use maze_gen::grid::Location;
    ///
    /// let grid = StandardMaze::Small.get_grid();
    /// assert_eq!(
    ///     grid.neighbors(&Location::new(1, 1)),
    ///     vec![Location::new(2, 1), Location::new(0, 1)]
    /// );
    /// ```
    pub fn neighbors(&self, p: &Location) -> Vec<Location> {
        Direction::ALL
            .iter()
            .filter_map(|&d| p.step(d, 1))
            .filter(|n| self.is_passage(n))
            .collect()
    }

    /// Exports the grid as rows of `0` (passage) and `1` (wall)
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<CellState>>> for Grid {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<CellState>>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(MazeError::Ragged {
                    row,
                    len: cells.len(),
                    expected: width,
                });
            }
        }
        validate_dimensions(width, height)?;

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
