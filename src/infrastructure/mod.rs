//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations
//! - `repositories/` - Loaders for icon sources, metadata and categories
//! - `converters/` - SVG → ICO rendering and ICO validation
//! - `resx/` - WinForms resource bundle writer
//! - `events/` - Console and NDJSON event sinks

pub mod converters;
pub mod events;
pub mod fs;
pub mod repositories;
pub mod resx;

// Re-export for convenience
pub use converters::{IcoCheckConverter, SvgIcoConverter};
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use repositories::{FsAssetRepository, FsCategoryRepository, FsMetadataRepository};
pub use resx::ResxBundle;
