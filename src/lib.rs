//! icopack - icon asset conversion pipeline
//!
//! Converts a directory of SVG icons into multi-resolution ICO files and
//! packages those into WinForms `.resx` bundles, one per category, each run
//! summarized by an `index.json` manifest.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{IcoBuildOptions, IcoBuildUseCase, ResxBuildOptions, ResxBuildUseCase};
pub use config::Config;
pub use domain::value_objects::{HexColor, RasterSizes};
pub use error::{IcopackError, IcopackResult};
