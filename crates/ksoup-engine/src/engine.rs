//! Ksoup engine facade
//!
//! Extends the core-IO facade with file-path resolution and access to the
//! process HTTP transport.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ksoup_io::{IoEngine, Result, validate};

use crate::transport::{self, HttpTransport};
use crate::{Config, FileSource};

/// Full engine facade: core I/O plus files and network
pub trait KsoupEngine: IoEngine {
    /// Configuration this engine was built with
    fn config(&self) -> &Config;

    /// Resolve a path into a [`FileSource`].
    ///
    /// Resolution is lazy: a missing file is reported by `open`, not here.
    fn resolve_file_source(&self, path: &str) -> Result<FileSource> {
        validate::not_empty(path, "path")?;
        self.resolve_file_source_path(Path::new(path))
    }

    fn resolve_file_source_path(&self, path: &Path) -> Result<FileSource>;

    /// Wrap an open native file handle
    fn resolve_file_handle(&self, file: File) -> Result<FileSource> {
        Ok(FileSource::from_handle(file))
    }

    /// The process-wide transport, created on first use.
    ///
    /// The first caller's transport settings win for the rest of the process.
    fn http_transport(&self) -> Result<Arc<dyn HttpTransport>> {
        transport::shared_transport(&self.config().transport)
    }
}
