//! Resx Options

use std::path::PathBuf;

use crate::config::{DEFAULT_RESX_PACKAGE, DEFAULT_RESX_PREFIX, DEFAULT_VERSION};
use crate::domain::services::PackageInfo;

/// Options for the resx use case
#[derive(Debug, Clone)]
pub struct ResxBuildOptions {
    /// Directory of `.ico` files produced by the ICO run
    pub source: PathBuf,
    /// Directory of `<icon>.json` metadata
    pub metadata: PathBuf,
    /// Directory of `<category>.json` definitions
    pub categories: PathBuf,
    /// Directory receiving the bundles and `index.json`
    pub output: PathBuf,
    pub package: PackageInfo,
    /// Bundle file prefix
    pub prefix: String,
    /// Worker threads for ICO validation; `None` uses rayon's default
    pub jobs: Option<usize>,
}

impl ResxBuildOptions {
    pub fn new(
        source: impl Into<PathBuf>,
        metadata: impl Into<PathBuf>,
        categories: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            metadata: metadata.into(),
            categories: categories.into(),
            output: output.into(),
            package: PackageInfo::new(DEFAULT_RESX_PACKAGE, DEFAULT_VERSION),
            prefix: DEFAULT_RESX_PREFIX.to_string(),
            jobs: None,
        }
    }

    pub fn with_package(mut self, package: PackageInfo) -> Self {
        self.package = package;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}
