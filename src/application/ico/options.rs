//! ICO Options

use std::path::PathBuf;

use crate::config::{DEFAULT_ICO_PACKAGE, DEFAULT_VERSION};
use crate::domain::ports::ConversionConfig;
use crate::domain::services::PackageInfo;

/// Options for the ICO use case
#[derive(Debug, Clone)]
pub struct IcoBuildOptions {
    /// Directory of `.svg` sources
    pub source: PathBuf,
    /// Directory of `<icon>.json` metadata (only read for aliases)
    pub metadata: PathBuf,
    /// Directory receiving the `.ico` files and `index.json`
    pub output: PathBuf,
    pub config: ConversionConfig,
    pub package: PackageInfo,
    /// Also write a copy of each icon under its alias names
    pub aliases: bool,
    /// Worker threads; `None` uses rayon's default
    pub jobs: Option<usize>,
}

impl IcoBuildOptions {
    /// Metadata is looked up next to the sources by default
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self {
            metadata: source.clone(),
            source,
            output: output.into(),
            config: ConversionConfig::default(),
            package: PackageInfo::new(DEFAULT_ICO_PACKAGE, DEFAULT_VERSION),
            aliases: false,
            jobs: None,
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<PathBuf>) -> Self {
        self.metadata = metadata.into();
        self
    }

    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_package(mut self, package: PackageInfo) -> Self {
        self.package = package;
        self
    }

    pub fn with_aliases(mut self, aliases: bool) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}
