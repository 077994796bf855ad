//! Resx Result

use std::path::PathBuf;

use crate::domain::entities::{BundleManifest, RunReport};

/// Result of a resx run
#[derive(Debug, Clone)]
pub struct ResxBuildResult {
    /// ICO validation outcome
    pub report: RunReport,
    pub manifest: BundleManifest,
    /// Every bundle written, the all-icons bundle last
    pub bundles: Vec<PathBuf>,
    pub manifest_path: PathBuf,
    /// Non-fatal problems (metadata, missing categories, duplicate keys)
    pub warnings: Vec<String>,
}

impl ResxBuildResult {
    pub fn is_success(&self) -> bool {
        self.report.is_success()
    }
}
