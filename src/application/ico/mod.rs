//! ICO Module
//!
//! SVG sources → one multi-resolution `.ico` per icon, optional alias
//! copies, and an `index.json` manifest.
//!
//! ## Structure
//!
//! - `options` - Run configuration (`IcoBuildOptions`)
//! - `result` - Run outcome (`IcoBuildResult`)
//! - `use_case` - Orchestration (`IcoBuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use icopack::application::ico::{IcoBuildOptions, IcoBuildUseCase};
//!
//! let use_case = IcoBuildUseCase::new(&converter, &fs);
//! let result = use_case.execute(&IcoBuildOptions::new("icons", "dist/#000000"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::IcoBuildOptions;
pub use result::IcoBuildResult;
pub use use_case::IcoBuildUseCase;
