//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod color;
mod resource_key;
mod sizes;

pub use color::HexColor;
pub use resource_key::{resource_key, to_pascal_case};
pub use sizes::{RasterSizes, DEFAULT_RASTER_SIZES, MAX_RASTER_SIZE};
