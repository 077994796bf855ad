//! File System Category Repository
//!
//! A category is defined by `<category>.json` in the categories directory;
//! only the file stem matters.

use std::path::Path;

use crate::domain::entities::SourceAsset;
use crate::domain::ports::FileSystem;
use crate::error::IcopackResult;

pub struct FsCategoryRepository<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> FsCategoryRepository<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Sorted category names, or `None` when the directory does not exist
    pub fn load_names(&self, dir: &Path) -> IcopackResult<Option<Vec<String>>> {
        if !self.fs.is_dir(dir) {
            return Ok(None);
        }

        let mut names: Vec<String> = self
            .fs
            .list_files(dir, "json")?
            .iter()
            .filter_map(|p| SourceAsset::name_from_path(p))
            .collect();
        names.sort();
        Ok(Some(names))
    }
}
