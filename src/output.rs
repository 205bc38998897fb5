//! Writing rendered mazes to disk

use crate::config::MazeSettings;
use crate::constants::OUTPUT_FILE_PREFIX;
use crate::grid::Grid;
use crate::render::html::render_html;
use crate::render::raster::save_png;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds `maze_<date>_<time>.<extension>`
///
/// ```
/// use chrono::{Local, TimeZone};
/// use maze_gen::output::timestamped_file_name;
///
/// let time = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
/// assert_eq!(timestamped_file_name(&time, "png"), "maze_2024-03-09_14-05-07.png");
/// ```
pub fn timestamped_file_name(time: &DateTime<Local>, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        OUTPUT_FILE_PREFIX,
        time.format("%Y-%m-%d_%H-%M-%S"),
        extension
    )
}

/// Paths of the files written by [`write_outputs`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    /// The PNG, if one was requested
    pub image: Option<PathBuf>,
    /// The HTML page, if one was requested
    pub html: Option<PathBuf>,
}

/// Writes the HTML page to `path`
pub fn write_html(grid: &Grid, settings: &MazeSettings, path: &Path) -> Result<()> {
    let html = render_html(grid, settings.cell_size, &settings.palette)
        .context("Failed to render HTML")?;
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved HTML to {}", path.display());
    Ok(())
}

/// Writes the image and HTML outputs enabled in `settings` into its output directory
pub fn write_outputs(
    grid: &Grid,
    settings: &MazeSettings,
    time: &DateTime<Local>,
) -> Result<WrittenFiles> {
    let dir = &settings.output.directory;
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = WrittenFiles::default();
    if settings.output.image {
        let path = dir.join(timestamped_file_name(time, "png"));
        save_png(grid, settings.cell_size, &settings.palette, &path)?;
        written.image = Some(path);
    }
    if settings.output.html {
        let path = dir.join(timestamped_file_name(time, "html"));
        write_html(grid, settings, &path)?;
        written.html = Some(path);
    }
    Ok(written)
}
