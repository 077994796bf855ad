//! File System Metadata Repository
//!
//! Loads `<icon>.json` side-files. A malformed file becomes a warning and the
//! icon simply has no metadata.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::{IconMetadata, SourceAsset};
use crate::domain::ports::FileSystem;
use crate::error::{IcopackError, IcopackResult};

/// Non-fatal problem with one metadata file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataWarning {
    pub file: PathBuf,
    pub message: String,
}

/// All metadata of a directory, keyed by icon name
#[derive(Debug, Clone, Default)]
pub struct MetadataSet {
    pub entries: BTreeMap<String, IconMetadata>,
    pub warnings: Vec<MetadataWarning>,
}

impl MetadataSet {
    pub fn get(&self, name: &str) -> Option<&IconMetadata> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconMetadata)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Metadata repository backed by a FileSystem port
pub struct FsMetadataRepository<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> FsMetadataRepository<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Load every `.json` file in `dir`
    pub fn load_all(&self, dir: &Path) -> IcopackResult<MetadataSet> {
        if !self.fs.is_dir(dir) {
            return Err(IcopackError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut set = MetadataSet::default();
        for path in self.fs.list_files(dir, "json")? {
            let Some(name) = SourceAsset::name_from_path(&path) else {
                continue;
            };
            match self.load_one(&path) {
                Ok(meta) => {
                    set.entries.insert(name, meta);
                }
                Err(err) => set.warnings.push(MetadataWarning {
                    file: path.clone(),
                    message: err.to_string(),
                }),
            }
        }
        Ok(set)
    }

    fn load_one(&self, path: &Path) -> IcopackResult<IconMetadata> {
        let content = self.fs.read_to_string(path)?;
        IconMetadata::from_json(&content).map_err(|e| IcopackError::InvalidMetadata {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;

    #[test]
    fn load_all_keys_by_file_stem() {
        let fs = MemoryFs::new()
            .with_file("icons/anchor.json", r#"{"categories":["navigation"]}"#)
            .with_file("icons/zap.json", r#"{"aliases":["bolt"]}"#)
            .with_file("icons/zap.svg", "<svg/>");
        let repo = FsMetadataRepository::new(&fs);

        let set = repo.load_all(Path::new("icons")).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("anchor").unwrap().categories, vec!["navigation"]);
        assert_eq!(set.get("zap").unwrap().aliases[0].name(), "bolt");
        assert!(set.warnings.is_empty());
    }

    #[test]
    fn malformed_metadata_is_a_warning() {
        let fs = MemoryFs::new()
            .with_file("icons/bad.json", "{ not json")
            .with_file("icons/good.json", "{}");
        let repo = FsMetadataRepository::new(&fs);

        let set = repo.load_all(Path::new("icons")).unwrap();

        assert_eq!(set.len(), 1);
        assert!(set.get("bad").is_none());
        assert_eq!(set.warnings.len(), 1);
        assert_eq!(set.warnings[0].file, PathBuf::from("icons/bad.json"));
        assert!(set.warnings[0].message.contains("invalid metadata"));
    }

    #[test]
    fn missing_dir_is_fatal() {
        let fs = MemoryFs::new();
        let repo = FsMetadataRepository::new(&fs);

        assert!(matches!(
            repo.load_all(Path::new("icons")),
            Err(IcopackError::DirectoryNotFound { .. })
        ));
    }
}
