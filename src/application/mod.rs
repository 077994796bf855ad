//! Application Layer
//!
//! Use cases orchestrating domain services and infrastructure ports.
//!
//! - `pipeline` - Directory-wide conversion fan-out shared by both runs
//! - `ico` - SVG → ICO run
//! - `resx` - ICO → WinForms resource bundle run

pub mod ico;
pub mod pipeline;
pub mod resx;

pub use ico::{IcoBuildOptions, IcoBuildResult, IcoBuildUseCase};
pub use pipeline::{BatchOptions, BatchPipeline};
pub use resx::{ResxBuildOptions, ResxBuildResult, ResxBuildUseCase};
