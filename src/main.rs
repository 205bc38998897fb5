use anyhow::Result;
use clap::Parser;
use maze_gen::app::run;
use maze_gen::config::MazeSettings;
use std::path::PathBuf;

/// Generates a perfect maze and saves it as text, PNG and HTML
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maze width, odd and at least 3
    #[arg(long)]
    width: Option<usize>,

    /// Maze height, odd and at least 3
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pixels per cell in the image and HTML output
    #[arg(long)]
    cell_size: Option<u32>,

    /// Directory for the image and HTML files
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Don't write a PNG
    #[arg(long)]
    no_image: bool,

    /// Don't write an HTML page
    #[arg(long)]
    no_html: bool,

    /// Mark the solution in the text output
    #[arg(long)]
    solution: bool,
}

impl Args {
    fn into_settings(self) -> Result<MazeSettings> {
        let mut settings = match &self.config {
            Some(path) => MazeSettings::load(path)?,
            None => MazeSettings::default(),
        };
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(cell_size) = self.cell_size {
            settings.cell_size = cell_size;
        }
        if let Some(dir) = self.out_dir {
            settings.output.directory = dir;
        }
        settings.output.image &= !self.no_image;
        settings.output.html &= !self.no_html;
        settings.output.show_solution |= self.solution;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = Args::parse().into_settings()?;
    let report = run(&settings)?;

    if report.solvable {
        println!("The maze is solvable");
    } else {
        println!("The maze is NOT solvable");
    }
    if let Some(text) = &report.text {
        println!();
        print!("{text}");
    }
    println!();
    if let Some(path) = &report.files.image {
        println!("Image saved as {}", path.display());
    }
    if let Some(path) = &report.files.html {
        println!("HTML saved as {}", path.display());
    }
    println!("{}", report.stats);

    Ok(())
}
