//! Resx Module
//!
//! ICO files + metadata + category definitions → one WinForms `.resx` per
//! category, one `.resx` with every icon, and an `index.json` manifest.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`ResxBuildOptions`)
//! - `result` - Run outcome (`ResxBuildResult`)
//! - `use_case` - Orchestration (`ResxBuildUseCase`)

mod options;
mod result;
mod use_case;

pub use options::ResxBuildOptions;
pub use result::ResxBuildResult;
pub use use_case::ResxBuildUseCase;
