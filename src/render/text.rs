//! Plain text rendering, two characters per cell

use crate::grid::{Grid, Location};
use crate::render::{tile_at, Tile};
use std::collections::HashSet;

/// Drawn for walls
pub const WALL_GLYPH: &str = "██";
/// Drawn for open cells
pub const PATH_GLYPH: &str = "  ";
/// Drawn for the entrance
pub const START_GLYPH: &str = "S ";
/// Drawn for the exit
pub const END_GLYPH: &str = "E ";
/// Drawn for open cells on the solution, when one is overlaid
pub const SOLUTION_GLYPH: &str = "· ";

fn glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Wall => WALL_GLYPH,
        Tile::Path => PATH_GLYPH,
        Tile::Start => START_GLYPH,
        Tile::End => END_GLYPH,
    }
}

/// Renders the grid, one line per row
///
/// # Examples
///
/// ```
/// use maze_gen::grid::standard_grids::StandardMaze;
/// use maze_gen::render::text::render_text;
///
/// let grid = StandardMaze::Minimal.get_grid();
/// assert_eq!(render_text(&grid), "██████\nS   E \n██████\n");
/// ```
pub fn render_text(grid: &Grid) -> String {
    render_text_with_solution(grid, &[])
}

/// Renders the grid with the open cells of `solution` marked
pub fn render_text_with_solution(grid: &Grid, solution: &[Location]) -> String {
    let on_path: HashSet<&Location> = solution.iter().collect();
    let mut output = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Location::new(x, y);
            let tile = tile_at(grid, p);
            if tile == Tile::Path && on_path.contains(&p) {
                output.push_str(SOLUTION_GLYPH);
            } else {
                output.push_str(glyph(tile));
            }
        }
        output.push('\n');
    }
    output
}
