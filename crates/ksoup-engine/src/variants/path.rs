//! Path engine: files addressed by canonical path and read whole on open.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use canonical_path::CanonicalPathBuf;
use ksoup_io::{Buffer, IoEngine, Result};

use crate::file_source::FileOpener;
use crate::{Config, FileSource, KsoupEngine};

#[derive(Debug)]
struct PathOpener;

impl FileOpener for PathOpener {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read + Send>> {
        let canonical = CanonicalPathBuf::canonicalize(path)?.into_path_buf();
        let bytes = fs::read(&canonical)?;
        tracing::trace!(path = %canonical.display(), len = bytes.len(), "read file by path");
        Ok(Box::new(Cursor::new(bytes)))
    }
}

#[derive(Debug)]
pub struct PathEngine {
    config: Config,
    opener: Arc<PathOpener>,
}

impl PathEngine {
    pub fn new(config: Config) -> Self {
        tracing::debug!("path engine created");
        Self {
            config,
            opener: Arc::new(PathOpener),
        }
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl IoEngine for PathEngine {
    fn name(&self) -> &'static str {
        "path"
    }

    fn new_buffer(&self) -> Buffer {
        Buffer::with_capacity(self.config.buffer_capacity)
    }
}

impl KsoupEngine for PathEngine {
    fn config(&self) -> &Config {
        &self.config
    }

    fn resolve_file_source_path(&self, path: &Path) -> Result<FileSource> {
        Ok(FileSource::new(path, self.opener.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_open_through_relative_segments() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("page.html"), "<p>by path</p>").unwrap();

        let engine = PathEngine::default();
        let source = engine
            .resolve_file_source_path(&dir.path().join("sub").join("..").join("page.html"))
            .unwrap();
        assert_eq!(source.open().unwrap().read_all().unwrap(), b"<p>by path</p>");
    }

    #[test]
    fn test_missing_file_fails_on_open_only() {
        let dir = tempfile::tempdir().unwrap();
        let engine = PathEngine::default();
        let source = engine.resolve_file_source_path(&dir.path().join("gone.html")).unwrap();
        assert_eq!(source.open().unwrap_err().io_error().unwrap().kind(), ErrorKind::NotFound);
    }
}
