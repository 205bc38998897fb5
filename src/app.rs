//! One complete maze run: generate, check, render, save

use crate::config::MazeSettings;
use crate::generator::MazeGenerator;
use crate::grid::{Grid, Location};
use crate::output::{write_outputs, WrittenFiles};
use crate::pathing::shortest_path;
use crate::render::text::{render_text, render_text_with_solution};
use crate::rng::RandomShuffle;
use crate::stats::MazeStats;
use anyhow::Result;
use chrono::Local;
use log::{info, warn};

/// Everything a run produced
#[derive(Debug)]
pub struct MazeReport {
    /// The generated maze
    pub grid: Grid,
    /// Whether the configured target is reachable from the entrance
    pub solvable: bool,
    /// Shortest walk from the entrance to the carved exit
    pub solution: Option<Vec<Location>>,
    /// Cell counts
    pub stats: MazeStats,
    /// Text rendering, if enabled
    pub text: Option<String>,
    /// Files written
    pub files: WrittenFiles,
}

/// Generates a maze according to `settings` and writes the requested outputs
pub fn run(settings: &MazeSettings) -> Result<MazeReport> {
    settings.validate()?;
    let shuffle = match settings.seed {
        Some(seed) => RandomShuffle::seeded(seed),
        None => RandomShuffle::from_entropy(),
    };
    let mut generator = MazeGenerator::with_shuffle(settings.width, settings.height, shuffle)?;
    info!("Generating {}x{} maze", settings.width, settings.height);
    generator.generate();

    let solvable = generator.is_solvable_to(settings.solvability_target);
    if solvable {
        info!("Maze is solvable ({:?})", settings.solvability_target);
    } else {
        warn!(
            "No path from entrance to {:?} target",
            settings.solvability_target
        );
    }

    let grid = generator.into_grid();
    let solution = shortest_path(&grid, grid.entrance(), grid.exit());
    let stats = MazeStats::collect(&grid).with_solution_length(solution.as_ref().map(Vec::len));

    let text = settings.output.text.then(|| match &solution {
        Some(path) if settings.output.show_solution => render_text_with_solution(&grid, path),
        _ => render_text(&grid),
    });

    let files = write_outputs(&grid, settings, &Local::now())?;

    Ok(MazeReport {
        grid,
        solvable,
        solution,
        stats,
        text,
        files,
    })
}
