//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod converter;
pub mod file_system;

#[cfg(test)]
pub use build_events::RecordingEventSink;
pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use converter::{AssetConverter, ConversionConfig};
pub use file_system::{FileSystem, FsError, FsResult};
