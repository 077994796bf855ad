//! Test fixtures - reusable content constants for tests.

#![allow(dead_code)]

/// A stroke-only icon in the usual 24x24 grid
pub const CIRCLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/></svg>"#;

/// An icon with a filled shape
pub const FILLED_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="currentColor"><rect x="4" y="4" width="16" height="16" rx="2"/></svg>"#;

/// Truncated markup that no SVG parser accepts
pub const BROKEN_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\"";

/// Metadata placing an icon in two categories
pub const ARROW_METADATA: &str = r#"{
  "tags": ["arrow", "down"],
  "categories": ["arrows", "navigation"],
  "aliases": ["arrow-down-01", { "name": "move-down", "deprecated": true }]
}"#;

/// Metadata placing an icon in one category
pub const TRAVEL_METADATA: &str = r#"{"categories": ["travel"]}"#;

/// Metadata that is not JSON
pub const MALFORMED_METADATA: &str = "{ categories: [travel";
