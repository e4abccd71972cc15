//! File Source
//!
//! Lazy, reusable reference to file content. Resolving a path touches
//! nothing; each `open` asks the variant's [`FileOpener`] for a fresh stream.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "gzip")]
use flate2::read::GzDecoder;
use ksoup_io::{Result, SourceReader};

/// Backend hook a platform variant supplies to open file content
pub trait FileOpener: Send + Sync + fmt::Debug {
    /// Open a new stream positioned at the start of `path`
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// Opener over an already open file handle; the locator is ignored.
///
/// Every open rewinds the handle and copies the content out, so readers
/// never share a cursor.
#[derive(Debug)]
struct HandleOpener {
    file: Mutex<File>,
}

impl FileOpener for HandleOpener {
    fn open(&self, _path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.seek(SeekFrom::Start(0))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(Box::new(Cursor::new(content)))
    }
}

/// Unopened reference to file content
#[derive(Clone)]
pub struct FileSource {
    locator: PathBuf,
    opener: Arc<dyn FileOpener>,
}

impl FileSource {
    pub fn new(locator: impl Into<PathBuf>, opener: Arc<dyn FileOpener>) -> Self {
        Self {
            locator: locator.into(),
            opener,
        }
    }

    /// Source over a native file handle
    pub fn from_handle(file: File) -> Self {
        Self::new(PathBuf::new(), Arc::new(HandleOpener { file: Mutex::new(file) }))
    }

    pub fn locator(&self) -> &Path {
        &self.locator
    }

    pub fn file_name(&self) -> Option<&str> {
        self.locator.file_name().and_then(|name| name.to_str())
    }

    /// Open an independent reader over the file
    pub fn open(&self) -> Result<SourceReader> {
        tracing::debug!(path = %self.locator.display(), "opening file source");
        let stream = self.opener.open(&self.locator)?;
        Ok(SourceReader::from_boxed(stream))
    }

    /// Open an independent reader that gunzips the file
    #[cfg(feature = "gzip")]
    pub fn open_gzip(&self) -> Result<SourceReader> {
        tracing::debug!(path = %self.locator.display(), "opening gzip file source");
        let stream = self.opener.open(&self.locator)?;
        Ok(SourceReader::from_stream(GzDecoder::new(stream)))
    }
}

impl fmt::Debug for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSource")
            .field("locator", &self.locator)
            .field("opener", &self.opener)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "gzip")]
    use flate2::{Compression, write::GzEncoder};
    use std::io::Write;

    #[derive(Debug)]
    struct Fixed(Vec<u8>);

    impl FileOpener for Fixed {
        fn open(&self, _path: &Path) -> io::Result<Box<dyn Read + Send>> {
            Ok(Box::new(Cursor::new(self.0.clone())))
        }
    }

    #[derive(Debug)]
    struct Missing;

    impl FileOpener for Missing {
        fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
            Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
        }
    }

    #[test]
    fn test_each_open_is_independent() {
        let source = FileSource::new("pages/index.html", Arc::new(Fixed(b"<html>".to_vec())));
        let mut first = source.open().unwrap();
        first.skip(3).unwrap();
        let mut second = source.open().unwrap();

        assert_eq!(second.read_all().unwrap(), b"<html>");
        assert_eq!(first.read_all().unwrap(), b"ml>");
        assert_eq!(source.file_name(), Some("index.html"));
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_open_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"<p>compressed</p>").unwrap();
        let gz = encoder.finish().unwrap();

        let source = FileSource::new("page.html.gz", Arc::new(Fixed(gz)));
        assert_eq!(source.open_gzip().unwrap().read_all().unwrap(), b"<p>compressed</p>");
    }

    #[cfg(feature = "gzip")]
    #[test]
    fn test_gzip_of_plain_bytes_fails_on_read() {
        let source = FileSource::new("plain.html", Arc::new(Fixed(b"not gzip".to_vec())));
        let mut reader = source.open_gzip().unwrap();
        assert!(reader.read_all().unwrap_err().io_error().is_some());
    }

    #[test]
    fn test_missing_file_fails_on_open() {
        let source = FileSource::new("nope.html", Arc::new(Missing));
        let err = source.open().unwrap_err();
        assert_eq!(err.io_error().unwrap().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_handle_source_rewinds_each_open() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"<p>handle</p>").unwrap();

        let source = FileSource::from_handle(file);
        assert_eq!(source.file_name(), None);
        let mut first = source.open().unwrap();
        let mut second = source.open().unwrap();
        assert_eq!(first.read_all().unwrap(), b"<p>handle</p>");
        assert_eq!(second.read_all().unwrap(), b"<p>handle</p>");
    }
}
