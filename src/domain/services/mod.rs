//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod categories;
mod manifest_builder;

pub use categories::{bundle_file_name, CategoryIndex};
pub use manifest_builder::{
    build_bundle_manifest, build_ico_manifest, PackageInfo, ICO_COLOR_DEPTH, ICO_FORMAT,
    RESX_FORMAT,
};
