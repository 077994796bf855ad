//! ICO pass-through converter
//!
//! Used by the bundle run: the artifact is the ICO file itself, accepted only
//! when its icon directory and every entry decode.

use std::io::Cursor;

use crate::domain::entities::SourceAsset;
use crate::domain::ports::{AssetConverter, ConversionConfig};
use crate::error::{IcopackError, IcopackResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct IcoCheckConverter;

impl IcoCheckConverter {
    pub fn new() -> Self {
        Self
    }
}

impl AssetConverter for IcoCheckConverter {
    fn source_extension(&self) -> &'static str {
        "ico"
    }

    fn artifact_extension(&self) -> &'static str {
        "ico"
    }

    fn convert(&self, asset: &SourceAsset, _config: &ConversionConfig) -> IcopackResult<Vec<u8>> {
        let dir = ico::IconDir::read(Cursor::new(asset.bytes()))
            .map_err(|e| IcopackError::encode(asset.name(), e))?;
        if dir.entries().is_empty() {
            return Err(IcopackError::encode(asset.name(), "icon contains no images"));
        }
        for entry in dir.entries() {
            entry
                .decode()
                .map_err(|e| IcopackError::encode(asset.name(), e))?;
        }
        Ok(asset.bytes().to_vec())
    }
}
