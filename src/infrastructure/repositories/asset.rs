//! File System Asset Repository
//!
//! Enumerates and loads source assets from a flat directory.

use std::path::{Path, PathBuf};

use crate::domain::entities::SourceAsset;
use crate::domain::ports::FileSystem;
use crate::error::{IcopackError, IcopackResult};

/// Asset repository backed by a FileSystem port
pub struct FsAssetRepository<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> FsAssetRepository<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// List asset files with `extension`, sorted by file name.
    ///
    /// Fails when `dir` is missing; this is the only fatal step of a scan.
    pub fn list(&self, dir: &Path, extension: &str) -> IcopackResult<Vec<PathBuf>> {
        if !self.fs.is_dir(dir) {
            return Err(IcopackError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        Ok(self.fs.list_files(dir, extension)?)
    }

    /// Load one asset
    pub fn load(&self, path: &Path) -> IcopackResult<SourceAsset> {
        let name = SourceAsset::name_from_path(path).ok_or_else(|| {
            IcopackError::render(path.display().to_string(), "file name is not valid UTF-8")
        })?;
        let content = self.fs.read(path)?;
        Ok(SourceAsset::new(name, path, content))
    }
}
