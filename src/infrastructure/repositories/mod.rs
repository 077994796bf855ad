//! Repository Implementations
//!
//! Loaders for the input directories of a run.

mod asset;
mod category;
mod metadata;

pub use asset::FsAssetRepository;
pub use category::FsCategoryRepository;
pub use metadata::{FsMetadataRepository, MetadataSet, MetadataWarning};
