//! Provides constants for the library.

use crate::grid::Location;

/// Smallest width or height a maze can have
pub const MIN_DIMENSION: usize = 3;
/// Width used when none is configured
pub const DEFAULT_WIDTH: usize = 21;
/// Height used when none is configured
pub const DEFAULT_HEIGHT: usize = 21;

/// The cell that carving starts from
pub const CARVE_START: Location = Location::new(1, 1);
/// Carving jumps from one junction cell to the next, over the wall cell between them
pub const CARVE_STEP: usize = 2;

/// Side length of one cell, in pixels, for image and HTML output
pub const DEFAULT_CELL_SIZE: u32 = 20;
/// Prefix of generated output file names
pub const OUTPUT_FILE_PREFIX: &str = "maze";
