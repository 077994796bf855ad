//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a single event
pub fn event_to_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::Started {
            command,
            source,
            output,
            asset_count,
        } => serde_json::json!({
            "event": "start",
            "command": command,
            "source": source.display().to_string(),
            "output": output.display().to_string(),
            "asset_count": asset_count,
        }),

        BuildEvent::ItemConverted { index, name, total } => serde_json::json!({
            "event": "item_converted",
            "index": index,
            "name": name,
            "total": total,
        }),

        BuildEvent::ItemFailed { index, name, error } => serde_json::json!({
            "event": "item_error",
            "index": index,
            "name": name,
            "error": error,
        }),

        BuildEvent::Warning { file, message } => serde_json::json!({
            "event": "warning",
            "file": file.display().to_string(),
            "message": message,
        }),

        BuildEvent::BundleWritten { path, icon_count } => serde_json::json!({
            "event": "bundle_written",
            "path": path.display().to_string(),
            "icon_count": icon_count,
        }),

        BuildEvent::ManifestWritten { path, icon_count } => serde_json::json!({
            "event": "manifest_written",
            "path": path.display().to_string(),
            "icon_count": icon_count,
        }),

        BuildEvent::Completed {
            attempted,
            converted,
            failed,
        } => {
            let status = if *failed == 0 { "success" } else { "partial" };
            serde_json::json!({
                "event": "complete",
                "status": status,
                "attempted": attempted,
                "converted": converted,
                "failed": failed,
            })
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_to_json(&event));
    }
}
