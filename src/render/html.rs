//! Standalone HTML page with the maze drawn in CSS

use crate::grid::{Grid, Location};
use crate::render::{hex, tile_at, Palette, Tile};
use std::fmt::{self, Write};

fn class(tile: Tile) -> &'static str {
    match tile {
        Tile::Wall => "wall",
        Tile::Path => "path",
        Tile::Start => "start",
        Tile::End => "end",
    }
}

/// Legend entries, in display order
const LEGEND: [(Tile, &str); 4] = [
    (Tile::Wall, "Wall"),
    (Tile::Path, "Path"),
    (Tile::Start, "Entrance"),
    (Tile::End, "Exit"),
];

/// Renders a complete HTML document: one `div` per cell inside flex rows, followed by a legend
pub fn render_html(
    grid: &Grid,
    cell_size: u32,
    palette: &Palette,
) -> Result<String, fmt::Error> {
    let mut html = String::new();
    write_html(&mut html, grid, cell_size, palette).map(|()| html)
}

/// Writes the document into any [`fmt::Write`] sink
pub fn write_html<W: Write>(
    out: &mut W,
    grid: &Grid,
    cell_size: u32,
    palette: &Palette,
) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"UTF-8\">")?;
    writeln!(
        out,
        "    <title>Maze {}x{}</title>",
        grid.width(),
        grid.height()
    )?;
    writeln!(out, "    <style>")?;
    writeln!(
        out,
        "        .maze-container {{ display: inline-block; border: 2px solid #333; padding: 10px; background: #f0f0f0; }}"
    )?;
    writeln!(out, "        .maze-row {{ display: flex; }}")?;
    writeln!(
        out,
        "        .maze-cell {{ width: {cell_size}px; height: {cell_size}px; border: 1px solid #ccc; }}"
    )?;
    for (tile, _) in LEGEND {
        writeln!(
            out,
            "        .{} {{ background-color: {}; }}",
            class(tile),
            hex(palette.color(tile))
        )?;
    }
    writeln!(
        out,
        "        .legend {{ margin-top: 20px; font-family: Arial, sans-serif; }}"
    )?;
    writeln!(
        out,
        "        .legend-item {{ display: inline-block; margin-right: 20px; }}"
    )?;
    writeln!(
        out,
        "        .legend-color {{ display: inline-block; width: 20px; height: 20px; border: 1px solid #333; margin-right: 5px; }}"
    )?;
    writeln!(out, "    </style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "    <div class=\"maze-container\">")?;
    for y in 0..grid.height() {
        write!(out, "        <div class=\"maze-row\">")?;
        for x in 0..grid.width() {
            let tile = tile_at(grid, Location::new(x, y));
            write!(out, "<div class=\"maze-cell {}\"></div>", class(tile))?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "    </div>")?;

    writeln!(out, "    <div class=\"legend\">")?;
    for (tile, label) in LEGEND {
        writeln!(out, "        <div class=\"legend-item\">")?;
        writeln!(
            out,
            "            <span class=\"legend-color\" style=\"background-color: {};\"></span>",
            hex(palette.color(tile))
        )?;
        writeln!(out, "            <span>{label}</span>")?;
        writeln!(out, "        </div>")?;
    }
    writeln!(out, "    </div>")?;
    writeln!(out, "</body>")?;
    write!(out, "</html>")
}
