//! SourceAsset entity - one input file of a conversion run
//!
//! Assets are identified by their file stem (`arrow-down.svg` → `arrow-down`).

use std::path::{Path, PathBuf};

use crate::error::{IcopackError, IcopackResult};

/// A source file loaded for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    /// Stable name derived from the file name
    name: String,
    /// Path the asset was read from
    source_path: PathBuf,
    /// Raw file content
    content: Vec<u8>,
}

impl SourceAsset {
    /// Create a new SourceAsset
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
            content,
        }
    }

    /// Derive the asset name from a path (`icons/arrow-down.svg` → `arrow-down`)
    pub fn name_from_path(path: &Path) -> Option<String> {
        path.file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8 text (vector sources are textual)
    pub fn text(&self) -> IcopackResult<&str> {
        std::str::from_utf8(&self.content)
            .map_err(|e| IcopackError::render(self.name.clone(), format!("not valid UTF-8: {}", e)))
    }
}
