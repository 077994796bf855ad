//! Domain Layer
//!
//! Pure conversion logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - SourceAsset, IconMetadata, RunReport, manifests
//! - `value_objects/` - HexColor, RasterSizes, resource keys
//! - `services/` - CategoryIndex, manifest builders
//! - `ports/` - FileSystem, AssetConverter, BuildEventSink

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
