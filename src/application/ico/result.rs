//! ICO Result

use std::path::PathBuf;

use crate::domain::entities::{IcoManifest, RunReport};

/// Result of an ICO run
#[derive(Debug, Clone)]
pub struct IcoBuildResult {
    pub report: RunReport,
    pub manifest: IcoManifest,
    pub manifest_path: PathBuf,
    /// Non-fatal problems (metadata, alias collisions)
    pub warnings: Vec<String>,
}

impl IcoBuildResult {
    pub fn is_success(&self) -> bool {
        self.report.is_success()
    }
}
