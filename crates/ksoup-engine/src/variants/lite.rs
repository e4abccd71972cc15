//! Lite engine: charsets, readers and buffers only.
//!
//! Links no file or network library. Every file and transport request fails
//! with `UnsupportedOperation`.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use ksoup_io::{Buffer, EngineError, IoEngine, Result};

use crate::transport::HttpTransport;
use crate::{Config, FileSource, KsoupEngine};

#[derive(Debug, Default)]
pub struct LiteEngine {
    config: Config,
}

impl LiteEngine {
    pub fn new(config: Config) -> Self {
        tracing::debug!("lite engine created");
        Self { config }
    }
}

impl IoEngine for LiteEngine {
    fn name(&self) -> &'static str {
        "lite"
    }

    fn new_buffer(&self) -> Buffer {
        Buffer::with_capacity(self.config.buffer_capacity)
    }
}

impl KsoupEngine for LiteEngine {
    fn config(&self) -> &Config {
        &self.config
    }

    fn resolve_file_source(&self, path: &str) -> Result<FileSource> {
        Err(EngineError::unsupported(format!(
            "file access is not available in the lite engine (path `{path}`)"
        )))
    }

    fn resolve_file_source_path(&self, path: &Path) -> Result<FileSource> {
        Err(EngineError::unsupported(format!(
            "file access is not available in the lite engine (path `{}`)",
            path.display()
        )))
    }

    fn resolve_file_handle(&self, _file: File) -> Result<FileSource> {
        Err(EngineError::unsupported("file access is not available in the lite engine"))
    }

    fn http_transport(&self) -> Result<Arc<dyn HttpTransport>> {
        Err(EngineError::unsupported("network access is not available in the lite engine"))
    }
}
