//! Property tests for icopack.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics", "sorted" and "deterministic".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/color.rs"]
mod color;

#[path = "properties/sizes.rs"]
mod sizes;

#[path = "properties/manifest.rs"]
mod manifest;
