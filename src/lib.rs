#![warn(missing_docs)]
//! Perfect maze generation by randomized depth-first carving, solvability checks, and text,
//! image and HTML renderers

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod grid;
pub mod output;
pub mod pathing;
pub mod render;
pub mod rng;
pub mod stats;

pub use error::MazeError;
pub use generator::MazeGenerator;
