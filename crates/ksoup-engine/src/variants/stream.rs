//! Stream engine: files read through buffered `std::fs` streams.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use ksoup_io::{Buffer, IoEngine, Result};

use crate::file_source::FileOpener;
use crate::{Config, FileSource, KsoupEngine};

#[derive(Debug)]
struct StreamOpener;

impl FileOpener for StreamOpener {
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read + Send>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[derive(Debug)]
pub struct StreamEngine {
    config: Config,
    opener: Arc<StreamOpener>,
}

impl StreamEngine {
    pub fn new(config: Config) -> Self {
        tracing::debug!("stream engine created");
        Self {
            config,
            opener: Arc::new(StreamOpener),
        }
    }
}

impl Default for StreamEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl IoEngine for StreamEngine {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn new_buffer(&self) -> Buffer {
        Buffer::with_capacity(self.config.buffer_capacity)
    }
}

impl KsoupEngine for StreamEngine {
    fn config(&self) -> &Config {
        &self.config
    }

    fn resolve_file_source_path(&self, path: &Path) -> Result<FileSource> {
        Ok(FileSource::new(path, self.opener.clone()))
    }
}
