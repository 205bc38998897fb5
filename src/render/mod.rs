//! Text, image and HTML presentations of a [`Grid`]

use crate::grid::{CellState, Grid, Location};
use serde::{Deserialize, Serialize};

pub mod html;
pub mod raster;
pub mod text;

/// An RGB color
pub type Color = [u8; 3];

/// What a renderer draws for one cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    /// A wall
    Wall,
    /// An open cell
    Path,
    /// The entrance
    Start,
    /// The exit
    End,
}

/// Decides how a cell is drawn; walls win over the entrance and exit markers
pub fn tile_at(grid: &Grid, p: Location) -> Tile {
    if grid.state_at(&p) == CellState::Wall {
        Tile::Wall
    } else if p == grid.entrance() {
        Tile::Start
    } else if p == grid.exit() {
        Tile::End
    } else {
        Tile::Path
    }
}

/// Colors used by the image and HTML renderers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Walls
    pub wall: Color,
    /// Open cells
    pub path: Color,
    /// The entrance
    pub start: Color,
    /// The exit
    pub end: Color,
    /// The outline drawn around every cell of an image
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: [0, 0, 0],
            path: [255, 255, 255],
            start: [0, 255, 0],
            end: [255, 0, 0],
            border: [128, 128, 128],
        }
    }
}

impl Palette {
    /// The fill color of a tile
    pub fn color(&self, tile: Tile) -> Color {
        match tile {
            Tile::Wall => self.wall,
            Tile::Path => self.path,
            Tile::Start => self.start,
            Tile::End => self.end,
        }
    }
}

/// Formats a color as a CSS hex string
///
/// ```
/// use maze_gen::render::hex;
///
/// assert_eq!(hex([255, 0, 128]), "#ff0080");
/// ```
pub fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
