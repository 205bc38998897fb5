//! PNG rendering

use crate::grid::{Grid, Location};
use crate::render::{tile_at, Palette};
use anyhow::{ensure, Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Draws every cell as a `cell_size` square, filled with its tile color and outlined in the
/// border color
pub fn render_image(grid: &Grid, cell_size: u32, palette: &Palette) -> Result<RgbImage> {
    ensure!(cell_size > 0, "cell size must be at least one pixel");
    let width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(cell_size))
        .context("image is too wide")?;
    let height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(cell_size))
        .context("image is too tall")?;

    let mut image = RgbImage::new(width, height);
    let border = Rgb(palette.border);
    for (px, py, pixel) in image.enumerate_pixels_mut() {
        let (cx, cy) = (px % cell_size, py % cell_size);
        let on_border = cx == 0 || cy == 0 || cx == cell_size - 1 || cy == cell_size - 1;
        *pixel = if on_border {
            border
        } else {
            let p = Location::new((px / cell_size) as usize, (py / cell_size) as usize);
            Rgb(palette.color(tile_at(grid, p)))
        };
    }
    Ok(image)
}

/// Renders the grid and writes it to `path` as a PNG
pub fn save_png(grid: &Grid, cell_size: u32, palette: &Palette, path: &Path) -> Result<()> {
    let image = render_image(grid, cell_size, palette)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to save image to {}", path.display()))?;
    info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
