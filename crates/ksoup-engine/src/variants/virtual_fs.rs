//! Virtual engine: files served from an in-memory file system.
//!
//! For sandboxed targets without a real file system and for tests that
//! inject fixture files.
//!
//! - `add_file` creates or replaces a file.
//! - `append_to_file` extends an existing file.
//! - Readers opened before a change keep the snapshot they started with.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use ksoup_io::{Buffer, IoEngine, Result};

use crate::file_source::FileOpener;
use crate::{Config, FileSource, KsoupEngine};

/// In-memory file system
#[derive(Debug, Default)]
pub struct VirtualFileSystem {
    files: RwLock<HashMap<PathBuf, Arc<[u8]>>>,
}

/// Drop redundant separators and `.` segments so lookups are stable
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let content: Vec<u8> = content.into();
        self.write_files().insert(normalize(path.as_ref()), content.into());
    }

    /// Append to an existing file
    pub fn append_to_file(&self, path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
        let key = normalize(path.as_ref());
        let mut files = self.write_files();
        let existing = files.get(&key).ok_or_else(|| not_found(&key))?;
        let mut grown = existing.to_vec();
        grown.extend_from_slice(data);
        files.insert(key, grown.into());
        Ok(())
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) -> bool {
        self.write_files().remove(&normalize(path.as_ref())).is_some()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.read_files().contains_key(&normalize(path.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.read_files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self, path: &Path) -> io::Result<Arc<[u8]>> {
        let key = normalize(path);
        self.read_files().get(&key).cloned().ok_or_else(|| not_found(&key))
    }

    fn read_files(&self) -> std::sync::RwLockReadGuard<'_, HashMap<PathBuf, Arc<[u8]>>> {
        self.files.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_files(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<PathBuf, Arc<[u8]>>> {
        self.files.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no virtual file at {}", path.display()),
    )
}

#[derive(Debug)]
struct VirtualOpener {
    fs: Arc<VirtualFileSystem>,
}

impl FileOpener for VirtualOpener {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.fs.snapshot(path)?)))
    }
}

#[derive(Debug)]
pub struct VirtualEngine {
    config: Config,
    opener: Arc<VirtualOpener>,
}

impl VirtualEngine {
    pub fn new(config: Config) -> Self {
        Self::with_file_system(config, Arc::new(VirtualFileSystem::new()))
    }

    /// Engine serving files from an existing file system
    pub fn with_file_system(config: Config, fs: Arc<VirtualFileSystem>) -> Self {
        tracing::debug!(files = fs.len(), "virtual engine created");
        Self {
            config,
            opener: Arc::new(VirtualOpener { fs }),
        }
    }

    pub fn file_system(&self) -> &Arc<VirtualFileSystem> {
        &self.opener.fs
    }
}

impl Default for VirtualEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl IoEngine for VirtualEngine {
    fn name(&self) -> &'static str {
        "virtual"
    }

    fn new_buffer(&self) -> Buffer {
        Buffer::with_capacity(self.config.buffer_capacity)
    }
}

impl KsoupEngine for VirtualEngine {
    fn config(&self) -> &Config {
        &self.config
    }

    fn resolve_file_source_path(&self, path: &Path) -> Result<FileSource> {
        Ok(FileSource::new(path, self.opener.clone()))
    }
}
