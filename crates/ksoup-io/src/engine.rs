//! Core-IO facade
//!
//! The capability set parsing code depends on. Implementations decide how
//! each operation is satisfied; callers never learn which one is active.

use std::io::Read;

use crate::{Buffer, Charset, Result, SourceReader};

/// Initial capacity of buffers handed out by [`IoEngine::new_buffer`]
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Core-IO engine facade
///
/// Every method except [`name`](Self::name) has a working default, so a
/// platform variant only overrides what its backing library does differently.
pub trait IoEngine: Send + Sync {
    /// Short identifier of the implementation, used in logs and errors
    fn name(&self) -> &'static str;

    /// Resolve `relative` against `base`; `None` when it cannot be resolved
    fn resolve_url(&self, base: &str, relative: &str) -> Option<String> {
        crate::resolve_url(base, relative)
    }

    /// Reader over `content` encoded with `charset`, or the default charset
    fn open_reader(&self, content: &str, charset: Option<&Charset>) -> Result<SourceReader> {
        let charset = charset.copied().unwrap_or_else(|| self.default_charset());
        Ok(SourceReader::from_text(content, &charset))
    }

    fn open_reader_bytes(&self, bytes: Vec<u8>) -> SourceReader {
        SourceReader::from_bytes(bytes)
    }

    fn open_reader_stream(&self, stream: Box<dyn Read + Send>) -> SourceReader {
        SourceReader::from_boxed(stream)
    }

    fn default_charset(&self) -> Charset {
        Charset::utf8()
    }

    fn charset_by_name(&self, name: &str) -> Result<Charset> {
        Charset::for_name(name)
    }

    fn new_buffer(&self) -> Buffer {
        Buffer::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }
}
