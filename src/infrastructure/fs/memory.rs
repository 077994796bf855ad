//! In-memory file system for tests

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Mock file system; clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryFs {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<Vec<PathBuf>>>,
    /// Paths whose writes fail
    pub read_only: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.lock().unwrap().push(parent.to_path_buf());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path, content.as_ref().to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().push(path.into());
        self
    }

    pub fn deny_write(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().push(path.into());
        self
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.get(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        if self.read_only.lock().unwrap().iter().any(|p| p == path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().iter().any(|d| d == path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if !self.is_dir(path) {
            self.dirs.lock().unwrap().push(path.to_path_buf());
        }
        Ok(())
    }

    fn list_files(&self, dir: &Path, extension: &str) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(dir) {
            return Err(FsError::NotFound(dir.to_path_buf()));
        }
        // BTreeMap keys are already sorted
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
            .cloned()
            .collect())
    }
}
