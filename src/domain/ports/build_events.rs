//! Build Event Port
//!
//! Observable interface for conversion runs.
//! Drives console progress, NDJSON event streams, and test recording.

use std::path::PathBuf;

/// Event emitted during a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Run started
    Started {
        command: &'static str,
        source: PathBuf,
        output: PathBuf,
        asset_count: usize,
    },

    /// One asset converted and written
    ItemConverted {
        index: usize,
        name: String,
        total: usize,
    },

    /// One asset failed; the run continues
    ItemFailed {
        index: usize,
        name: String,
        error: String,
    },

    /// Non-fatal input problem (malformed metadata, missing optional directory)
    Warning { file: PathBuf, message: String },

    /// A bundle artifact was written
    BundleWritten { path: PathBuf, icon_count: usize },

    /// The manifest was written
    ManifestWritten { path: PathBuf, icon_count: usize },

    /// Run completed
    Completed {
        attempted: usize,
        converted: usize,
        failed: usize,
    },
}

/// Trait for receiving build events
///
/// Sinks are shared across the conversion thread pool.
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Whether this sink wants per-item events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Event sink that keeps every event, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    pub events: std::sync::Mutex<Vec<BuildEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BuildEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl BuildEventSink for RecordingEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}
