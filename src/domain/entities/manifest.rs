//! Manifest entities - the `index.json` written at the end of a run
//!
//! Manifests carry no timestamps so identical inputs give identical bytes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// File name of the manifest in the output directory
pub const MANIFEST_FILE_NAME: &str = "index.json";

/// Manifest of an ICO conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IcoManifest {
    pub name: String,
    pub version: String,
    pub icon_count: usize,
    /// Sources found, converted or not
    pub attempted: usize,
    pub failed: usize,
    pub sizes: Vec<u32>,
    pub color_depth: String,
    pub format: String,
    pub color: String,
    pub icons: Vec<String>,
    /// alias → icon, only present when alias copies were written
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

/// Manifest of a resource bundle run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    pub name: String,
    pub version: String,
    pub icon_count: usize,
    /// ICO files checked, valid or not
    pub attempted: usize,
    pub failed: usize,
    pub category_count: usize,
    pub format: String,
    pub files: Vec<String>,
    /// category → number of icons written to its bundle
    pub categories: BTreeMap<String, usize>,
}

/// Render a manifest as indented JSON
pub fn to_manifest_json<T: Serialize>(manifest: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(manifest)
}
