//! AssetConverter port - the per-asset transform of a batch run
//!
//! Converters are pure: `(asset, config) -> bytes | error`. Reading the
//! source and writing the artifact are the pipeline's job.

use crate::domain::entities::SourceAsset;
use crate::domain::value_objects::{HexColor, RasterSizes};
use crate::error::IcopackResult;

/// Settings shared by every asset of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Square raster sizes to render
    pub sizes: RasterSizes,
    /// Replacement for `currentColor`, if any
    pub color: Option<HexColor>,
}

impl ConversionConfig {
    /// Label for manifests: the override or `currentColor`
    pub fn color_label(&self) -> &str {
        self.color
            .as_ref()
            .map(HexColor::as_str)
            .unwrap_or(HexColor::CURRENT_COLOR)
    }
}

/// Transforms one source asset into artifact bytes
pub trait AssetConverter: Send + Sync {
    /// Extension of the source files this converter reads (without dot)
    fn source_extension(&self) -> &'static str;

    /// Extension of the artifacts it produces (without dot)
    fn artifact_extension(&self) -> &'static str;

    /// Convert one asset
    fn convert(&self, asset: &SourceAsset, config: &ConversionConfig) -> IcopackResult<Vec<u8>>;
}
