//! Reachability and shortest paths over a finished [`Grid`]

use crate::grid::{Direction, Grid, Location};
use std::collections::{HashMap, VecDeque};

/// Whether `to` can be reached from `from` by single steps through passages.
///
/// Depth-first, with its own visited buffer; the grid is only read. Both endpoints have to be
/// passages for the answer to be `true`.
///
/// # Examples
///
/// ```
/// use maze_gen::grid::standard_grids::StandardMaze;
/// use maze_gen::pathing::is_reachable;
///
/// let grid = StandardMaze::Blocked.get_grid();
/// assert!(!is_reachable(&grid, grid.entrance(), grid.exit()));
/// ```
pub fn is_reachable(grid: &Grid, from: Location, to: Location) -> bool {
    let (width, height) = grid.dimensions();
    let mut visited = vec![false; width * height];
    let mut stack = vec![from];

    while let Some(p) = stack.pop() {
        if !grid.is_passage(&p) {
            continue;
        }
        let i = p.y * width + p.x;
        if visited[i] {
            continue;
        }
        if p == to {
            return true;
        }
        visited[i] = true;
        // reversed so that up is explored first
        for &direction in Direction::ALL.iter().rev() {
            if let Some(next) = p.step(direction, 1) {
                stack.push(next);
            }
        }
    }

    false
}

/// Returns the shortest walk from `from` to `to`, both ends included, or `None` if there is none.
///
/// # Examples
///
/// ```
/// use maze_gen::grid::standard_grids::StandardMaze;
/// use maze_gen::grid::Location;
/// use maze_gen::pathing::shortest_path;
///
/// let grid = StandardMaze::Small.get_grid();
/// let path = shortest_path(&grid, grid.entrance(), grid.exit()).unwrap();
/// assert_eq!(path.first(), Some(&Location::new(0, 1)));
/// assert_eq!(path.last(), Some(&Location::new(4, 3)));
/// assert_eq!(path.len(), 7);
/// ```
pub fn shortest_path(grid: &Grid, from: Location, to: Location) -> Option<Vec<Location>> {
    if !grid.is_passage(&from) || !grid.is_passage(&to) {
        return None;
    }
    let mut prev: HashMap<Location, Option<Location>> = HashMap::new();
    let mut queue: VecDeque<Location> = VecDeque::new();
    prev.insert(from, None);
    queue.push_back(from);
    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path = vec![to];
            let mut next = to;
            while let Some(Some(before_next)) = prev.get(&next) {
                path.push(*before_next);
                next = *before_next;
            }
            path.reverse();
            return Some(path);
        }
        for n in grid.neighbors(&current) {
            if !prev.contains_key(&n) {
                prev.insert(n, Some(current));
                queue.push_back(n);
            }
        }
    }
    None
}
