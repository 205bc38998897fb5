//! Randomized depth-first carving of perfect mazes

use crate::constants::{CARVE_START, CARVE_STEP};
use crate::error::MazeError;
use crate::grid::{CellState, Direction, Grid, Location};
use crate::pathing::is_reachable;
use crate::rng::{RandomShuffle, ShuffleSource};
use log::debug;
use serde::{Deserialize, Serialize};

/// Which cell [`MazeGenerator::is_solvable_to`] looks for
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvabilityTarget {
    /// `(width - 1, height - 2)`, the exit that carving opens
    #[default]
    CarvedExit,
    /// `(width - 1, height - 1)`, the bottom right corner
    ///
    /// Carving never opens this cell, so no generated maze is solvable against it.
    Corner,
}

impl SolvabilityTarget {
    /// The location this target refers to on the given grid
    pub fn location(&self, grid: &Grid) -> Location {
        match self {
            Self::CarvedExit => grid.exit(),
            Self::Corner => grid.corner(),
        }
    }
}

/// Generates mazes of a fixed size
///
/// Each call to [`MazeGenerator::generate`] starts again from solid walls and carves a new maze
/// into the generator's grid.
///
/// # Examples
///
/// ```
/// use maze_gen::grid::CellState;
/// use maze_gen::MazeGenerator;
///
/// let mut generator = MazeGenerator::seeded(11, 9, 5).unwrap();
/// let grid = generator.generate();
/// assert_eq!(grid.rows().count(), 9);
/// assert_eq!(grid.get(0, 1), Ok(CellState::Passage));
/// assert!(generator.is_solvable());
/// ```
pub struct MazeGenerator<S = RandomShuffle> {
    grid: Grid,
    shuffle: S,
}

impl MazeGenerator<RandomShuffle> {
    /// A generator seeded from the operating system
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::with_shuffle(width, height, RandomShuffle::from_entropy())
    }

    /// A generator that always produces the same sequence of mazes for a seed
    pub fn seeded(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        Self::with_shuffle(width, height, RandomShuffle::seeded(seed))
    }
}

impl<S: ShuffleSource> MazeGenerator<S> {
    /// A generator that takes its direction order from `shuffle`
    pub fn with_shuffle(width: usize, height: usize, shuffle: S) -> Result<Self, MazeError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            shuffle,
        })
    }

    /// Carves a new maze and returns it
    pub fn generate(&mut self) -> &Grid {
        self.grid.fill(CellState::Wall);
        carve(&mut self.grid, &mut self.shuffle);
        open_boundary(&mut self.grid);
        debug!(
            "Carved {}x{} maze with {} passages",
            self.grid.width(),
            self.grid.height(),
            self.grid.count(CellState::Passage)
        );
        &self.grid
    }

    /// The current grid; all walls until [`MazeGenerator::generate`] is called
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gives up the generator and keeps the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Returns `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Returns the state of a single cell
    pub fn cell(&self, x: usize, y: usize) -> Result<CellState, MazeError> {
        self.grid.get(x, y)
    }

    /// Whether the carved exit can be reached from the entrance
    pub fn is_solvable(&self) -> bool {
        self.is_solvable_to(SolvabilityTarget::CarvedExit)
    }

    /// Whether the given target can be reached from the entrance
    pub fn is_solvable_to(&self, target: SolvabilityTarget) -> bool {
        is_reachable(&self.grid, self.grid.entrance(), target.location(&self.grid))
    }
}

/// One cell on the carving stack, with the directions it still has to try
struct Frame {
    location: Location,
    directions: [Direction; 4],
    next: usize,
}

/// Marks a cell as visited and open, and picks the order its directions will be tried in
fn enter<S: ShuffleSource + ?Sized>(
    grid: &mut Grid,
    visited: &mut [bool],
    shuffle: &mut S,
    location: Location,
) -> Frame {
    visited[location.y * grid.width() + location.x] = true;
    grid.open(location);
    let mut directions = Direction::ALL;
    shuffle.shuffle(&mut directions);
    Frame {
        location,
        directions,
        next: 0,
    }
}

/// Whether carving may move into this cell; the outer ring is never carved
fn is_interior(grid: &Grid, p: &Location) -> bool {
    p.x > 0 && p.x < grid.width() - 1 && p.y > 0 && p.y < grid.height() - 1
}

/// Carves a spanning tree of passages into `grid`, starting from [`CARVE_START`].
///
/// Equivalent to the recursive backtracker: a cell shuffles its directions once when it is
/// entered, and the next direction of the parent is only tried after the child is exhausted.
/// The stack holds one frame per open cell on the current branch.
pub fn carve<S: ShuffleSource + ?Sized>(grid: &mut Grid, shuffle: &mut S) {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut stack = vec![enter(grid, &mut visited, shuffle, CARVE_START)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.directions.len() {
            stack.pop();
            continue;
        }
        let direction = frame.directions[frame.next];
        frame.next += 1;
        let current = frame.location;

        let Some(target) = current.step(direction, CARVE_STEP) else {
            continue;
        };
        if !is_interior(grid, &target) || visited[target.y * grid.width() + target.x] {
            continue;
        }
        if let Some(between) = current.step(direction, 1) {
            grid.open(between);
        }
        stack.push(enter(grid, &mut visited, shuffle, target));
    }
}

/// Opens the entrance and the exit
fn open_boundary(grid: &mut Grid) {
    grid.open(grid.entrance());
    grid.open(grid.exit());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_grids::StandardMaze;
    use crate::rng::FixedOrder;

    /// Straightforward recursive carving, to compare against the stack version
    fn carve_recursive<S: ShuffleSource>(
        grid: &mut Grid,
        visited: &mut Vec<bool>,
        shuffle: &mut S,
        p: Location,
    ) {
        visited[p.y * grid.width() + p.x] = true;
        grid.set(p.x, p.y, CellState::Passage).unwrap();
        let mut directions = Direction::ALL;
        shuffle.shuffle(&mut directions);
        for direction in directions {
            let Some(target) = p.step(direction, 2) else {
                continue;
            };
            if is_interior(grid, &target) && !visited[target.y * grid.width() + target.x] {
                let between = p.step(direction, 1).unwrap();
                grid.set(between.x, between.y, CellState::Passage).unwrap();
                carve_recursive(grid, visited, shuffle, target);
            }
        }
    }

    fn odd_cells(grid: &Grid) -> Vec<Location> {
        let mut cells = vec![];
        for y in (1..grid.height() - 1).step_by(2) {
            for x in (1..grid.width() - 1).step_by(2) {
                cells.push(Location::new(x, y));
            }
        }
        cells
    }

    #[test]
    fn generate_11_by_9() {
        let mut generator = MazeGenerator::seeded(11, 9, 1).unwrap();
        let grid = generator.generate();
        assert_eq!(grid.rows().count(), 9);
        assert!(grid.rows().all(|row| row.len() == 11));
        assert_eq!(grid.get(0, 1), Ok(CellState::Passage));
        assert_eq!(grid.get(10, 7), Ok(CellState::Passage));
        assert_eq!(generator.dimensions(), (11, 9));
    }

    #[test]
    fn fresh_generator_is_all_walls() {
        let generator = MazeGenerator::seeded(5, 5, 0).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(generator.cell(x, y), Ok(CellState::Wall));
            }
        }
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(MazeGenerator::new(2, 9).is_err());
        assert!(MazeGenerator::new(9, 8).is_err());
        assert!(MazeGenerator::with_shuffle(1, 1, FixedOrder).is_err());
    }

    #[test]
    fn openings_always_passages() {
        for seed in 0..20 {
            for (w, h) in [(3, 3), (5, 7), (9, 9), (21, 15)] {
                let mut generator = MazeGenerator::seeded(w, h, seed).unwrap();
                let grid = generator.generate();
                assert!(grid.is_passage(&grid.entrance()));
                assert!(grid.is_passage(&grid.exit()));
            }
        }
    }

    #[test]
    fn spanning_tree() {
        for seed in 0..20 {
            for (w, h) in [(5, 5), (11, 9), (15, 21), (31, 31)] {
                let mut generator = MazeGenerator::seeded(w, h, seed).unwrap();
                let grid = generator.generate();
                let cells = odd_cells(grid);
                assert!(cells.iter().all(|c| grid.is_passage(c)));
                for c in &cells {
                    assert!(is_reachable(grid, CARVE_START, *c));
                }
                // n junctions joined by n - 1 openings, plus entrance and exit
                assert_eq!(
                    grid.count(CellState::Passage),
                    2 * cells.len() - 1 + 2,
                    "{w}x{h} seed {seed}"
                );
            }
        }
    }

    #[test]
    fn border_stays_closed() {
        let mut generator = MazeGenerator::seeded(13, 11, 3).unwrap();
        let grid = generator.generate().clone();
        let (w, h) = grid.dimensions();
        for x in 0..w {
            assert_eq!(grid.get(x, 0), Ok(CellState::Wall));
            assert_eq!(grid.get(x, h - 1), Ok(CellState::Wall));
        }
        for y in 0..h {
            let open_left = Location::new(0, y) == grid.entrance();
            let open_right = Location::new(w - 1, y) == grid.exit();
            assert_eq!(grid.get(0, y) == Ok(CellState::Passage), open_left);
            assert_eq!(grid.get(w - 1, y) == Ok(CellState::Passage), open_right);
        }
    }

    #[test]
    fn even_even_cells_stay_walls() {
        let mut generator = MazeGenerator::seeded(15, 15, 8).unwrap();
        let grid = generator.generate();
        for y in (0..15).step_by(2) {
            for x in (0..15).step_by(2) {
                assert_eq!(grid.get(x, y), Ok(CellState::Wall));
            }
        }
    }

    #[test]
    fn three_by_three_is_minimal() {
        let mut generator = MazeGenerator::seeded(3, 3, 42).unwrap();
        assert_eq!(*generator.generate(), StandardMaze::Minimal.get_grid());
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = MazeGenerator::seeded(21, 21, 1234).unwrap();
        let mut b = MazeGenerator::seeded(21, 21, 1234).unwrap();
        assert_eq!(a.generate(), b.generate());
        // and the second maze from each matches too
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn generate_is_not_memoized() {
        let mut generator = MazeGenerator::seeded(21, 21, 77).unwrap();
        let first = generator.generate().clone();
        let second = generator.generate().clone();
        assert_ne!(first, second);
        // old passages do not leak into the new maze
        let cells = odd_cells(&second).len();
        assert_eq!(second.count(CellState::Passage), 2 * cells + 1);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = MazeGenerator::seeded(21, 21, 1).unwrap();
        let mut b = MazeGenerator::seeded(21, 21, 2).unwrap();
        assert_ne!(a.generate(), b.generate());
    }

    #[test]
    fn stack_matches_recursion() {
        for seed in 0..10 {
            for (w, h) in [(5, 5), (9, 13), (25, 17)] {
                let mut expected = Grid::new(w, h).unwrap();
                let mut visited = vec![false; w * h];
                let mut rng = RandomShuffle::seeded(seed);
                carve_recursive(&mut expected, &mut visited, &mut rng, CARVE_START);

                let mut actual = Grid::new(w, h).unwrap();
                carve(&mut actual, &mut RandomShuffle::seeded(seed));
                assert_eq!(actual, expected, "{w}x{h} seed {seed}");
            }
        }
    }

    #[test]
    fn borrowed_shuffle_continues_its_sequence() {
        let mut owned = MazeGenerator::seeded(9, 9, 3).unwrap();
        let first = owned.generate().clone();
        let second = owned.generate().clone();

        let mut rng = RandomShuffle::seeded(3);
        let mut a = MazeGenerator::with_shuffle(9, 9, &mut rng).unwrap();
        assert_eq!(a.generate(), &first);
        let mut b = MazeGenerator::with_shuffle(9, 9, &mut rng).unwrap();
        assert_eq!(b.generate(), &second);
    }

    #[test]
    fn fixed_order_carving() {
        // up and right are tried first, so the first row is opened left to right, then the
        // rest of the maze hangs off the last column
        let mut generator = MazeGenerator::with_shuffle(7, 7, FixedOrder).unwrap();
        let grid = generator.generate();
        for x in 1..6 {
            assert_eq!(grid.get(x, 1), Ok(CellState::Passage));
        }
        assert_eq!(grid.get(5, 2), Ok(CellState::Passage));
        assert!(generator.is_solvable());
    }

    #[test]
    fn large_maze_does_not_overflow() {
        let mut generator = MazeGenerator::seeded(1001, 1001, 9).unwrap();
        generator.generate();
        assert!(generator.is_solvable());
    }

    #[test]
    fn solvable_to_carved_exit() {
        for seed in 0..20 {
            let mut generator = MazeGenerator::seeded(9, 9, seed).unwrap();
            generator.generate();
            assert!(generator.is_solvable());
            assert!(generator.is_solvable_to(SolvabilityTarget::CarvedExit));
        }
    }

    #[test]
    fn corner_target_is_never_solvable() {
        // the corner is a border cell that carving never opens; this pins that behaviour
        for seed in 0..20 {
            let mut generator = MazeGenerator::seeded(9, 9, seed).unwrap();
            generator.generate();
            assert_eq!(generator.cell(8, 8), Ok(CellState::Wall));
            assert!(!generator.is_solvable_to(SolvabilityTarget::Corner));
        }
    }

    #[test]
    fn solvability_is_read_only() {
        let mut generator = MazeGenerator::seeded(9, 9, 3).unwrap();
        generator.generate();
        let snapshot = generator.grid().clone();
        let first = generator.is_solvable();
        let second = generator.is_solvable();
        assert_eq!(first, second);
        assert_eq!(*generator.grid(), snapshot);
        assert!(!generator.is_solvable_to(SolvabilityTarget::Corner));
        assert_eq!(*generator.grid(), snapshot);
    }

    #[test]
    fn unsolvable_before_generate() {
        let generator = MazeGenerator::seeded(9, 9, 3).unwrap();
        assert!(!generator.is_solvable());
    }

    #[test]
    fn accessors_are_stable() {
        let mut generator = MazeGenerator::seeded(11, 9, 6).unwrap();
        generator.generate();
        let dims = generator.dimensions();
        let cells: Vec<_> = (0..9)
            .flat_map(|y| (0..11).map(move |x| (x, y)))
            .map(|(x, y)| generator.cell(x, y))
            .collect();
        for _ in 0..3 {
            assert_eq!(generator.dimensions(), dims);
            let again: Vec<_> = (0..9)
                .flat_map(|y| (0..11).map(move |x| (x, y)))
                .map(|(x, y)| generator.cell(x, y))
                .collect();
            assert_eq!(again, cells);
        }
        assert!(generator.cell(11, 0).is_err());
    }

    #[test]
    fn target_locations() {
        let grid = Grid::new(9, 9).unwrap();
        assert_eq!(
            SolvabilityTarget::CarvedExit.location(&grid),
            Location::new(8, 7)
        );
        assert_eq!(SolvabilityTarget::Corner.location(&grid), Location::new(8, 8));
    }
}
