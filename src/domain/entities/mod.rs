//! Domain Entities
//!
//! - `SourceAsset` - an input file of a run
//! - `IconMetadata` - the JSON side-file of an icon
//! - `Artifact` / `RunReport` - conversion outcomes
//! - `IcoManifest` / `BundleManifest` - the `index.json` summaries

mod artifact;
mod asset;
mod manifest;
mod metadata;

pub use artifact::{Artifact, AssetFailure, ConversionResult, RunReport};
pub use asset::SourceAsset;
pub use manifest::{to_manifest_json, BundleManifest, IcoManifest, MANIFEST_FILE_NAME};
pub use metadata::{IconAlias, IconMetadata};
