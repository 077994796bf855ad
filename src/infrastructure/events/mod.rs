//! Event Sink Implementations
//!
//! Concrete implementations of BuildEventSink:
//! - ConsoleEventSink: human-readable progress
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{ConsoleEventSink, PROGRESS_INTERVAL};
pub use json::{event_to_json, JsonEventSink};
