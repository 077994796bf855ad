//! Manifest Builder Domain Service
//!
//! Pure folds from run outcomes to `index.json` contents.

use std::collections::BTreeMap;

use crate::domain::entities::{BundleManifest, IcoManifest, RunReport};
use crate::domain::ports::ConversionConfig;

use super::categories::bundle_file_name;

/// `colorDepth` of every ICO produced
pub const ICO_COLOR_DEPTH: &str = "32-bit with transparency";
/// `format` of every ICO produced
pub const ICO_FORMAT: &str = "PNG compressed ICO";
/// `format` of resx bundle runs
pub const RESX_FORMAT: &str = "WinForms .resx Resource Files";

/// Identity written into manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Build the manifest of an ICO run.
///
/// `icons` are the converted names, sorted and unique; `iconCount` is their number.
pub fn build_ico_manifest(
    package: &PackageInfo,
    config: &ConversionConfig,
    report: &RunReport,
    aliases: BTreeMap<String, String>,
) -> IcoManifest {
    let icons = report.converted_names();
    IcoManifest {
        name: package.name.clone(),
        version: package.version.clone(),
        icon_count: icons.len(),
        attempted: report.attempted(),
        failed: report.failed(),
        sizes: config.sizes.as_slice().to_vec(),
        color_depth: ICO_COLOR_DEPTH.to_string(),
        format: ICO_FORMAT.to_string(),
        color: config.color_label().to_string(),
        icons,
        aliases,
    }
}

/// Build the manifest of a resx run.
///
/// `icon_count` is the size of the all-icons bundle; `category_counts` holds
/// the number of icons written to each category bundle.
pub fn build_bundle_manifest(
    package: &PackageInfo,
    prefix: &str,
    report: &RunReport,
    icon_count: usize,
    category_counts: BTreeMap<String, usize>,
) -> BundleManifest {
    let files = std::iter::once(bundle_file_name(prefix, None))
        .chain(
            category_counts
                .keys()
                .map(|category| bundle_file_name(prefix, Some(category))),
        )
        .collect();

    BundleManifest {
        name: package.name.clone(),
        version: package.version.clone(),
        icon_count,
        attempted: report.attempted(),
        failed: report.failed(),
        category_count: category_counts.len(),
        format: RESX_FORMAT.to_string(),
        files,
        categories: category_counts,
    }
}
