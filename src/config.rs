//! Settings for a maze run, loadable from TOML

use crate::constants::{DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::generator::SolvabilityTarget;
use crate::render::Palette;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for generating and presenting one maze
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    /// Number of columns; odd, at least 3
    pub width: usize,
    /// Number of rows; odd, at least 3
    pub height: usize,
    /// Fixed seed, or `None` for a different maze every run
    pub seed: Option<u64>,
    /// Pixels per cell in the image and HTML output
    pub cell_size: u32,
    /// Which cell the reported solvability is checked against
    pub solvability_target: SolvabilityTarget,
    /// Colors for the image and HTML output
    pub palette: Palette,
    /// What gets written where
    pub output: OutputSettings,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            cell_size: DEFAULT_CELL_SIZE,
            solvability_target: Default::default(),
            palette: Default::default(),
            output: Default::default(),
        }
    }
}

/// Output options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for image and HTML files
    pub directory: PathBuf,
    /// Print the text rendering
    pub text: bool,
    /// Write a PNG
    pub image: bool,
    /// Write an HTML page
    pub html: bool,
    /// Mark the solution in the text rendering
    pub show_solution: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            text: true,
            image: true,
            html: true,
            show_solution: false,
        }
    }
}

impl MazeSettings {
    /// Parses settings from TOML; missing keys keep their defaults
    ///
    /// ```
    /// use maze_gen::config::MazeSettings;
    ///
    /// let settings = MazeSettings::from_toml_str("width = 31\n[output]\nhtml = false").unwrap();
    /// assert_eq!(settings.width, 31);
    /// assert_eq!(settings.height, 21);
    /// assert!(!settings.output.html);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s).context("Failed to parse maze settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("In {}", path.display()))
    }

    /// Serializes the settings back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize maze settings")
    }

    /// Checks values that the grid itself does not check
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be at least 1");
        Ok(())
    }
}
