//! Source Reader
//!
//! Sequential, mark/reset capable reading over bytes from memory, a stream or
//! a file. The origin is hidden behind `Read`; everything above this type is
//! origin-agnostic.

use std::fmt;
use std::io::{self, BufRead, Cursor, Read};

use crate::{Charset, EngineError, Result};

const CHUNK_SIZE: usize = 8 * 1024;

#[derive(Debug, Clone, Copy)]
struct Mark {
    /// Index into `buf` where the mark was set
    start: usize,
    /// Bytes that may be consumed past `start` before the mark is dropped
    limit: usize,
}

/// Stateful cursor over a byte sequence.
///
/// Bytes pulled from the origin are kept in an internal buffer for as long as
/// a mark needs them. A reader is owned by the operation that created it and
/// is not meant to be shared.
pub struct SourceReader {
    inner: Box<dyn Read + Send>,
    buf: Vec<u8>,
    pos: usize,
    /// Bytes already discarded from the front of `buf`
    discarded: u64,
    mark: Option<Mark>,
    eof: bool,
}

impl SourceReader {
    /// Reader over a live stream
    pub fn from_stream<R: Read + Send + 'static>(stream: R) -> Self {
        Self::from_boxed(Box::new(stream))
    }

    pub fn from_boxed(inner: Box<dyn Read + Send>) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            pos: 0,
            discarded: 0,
            mark: None,
            eof: false,
        }
    }

    /// Reader over an in-memory byte array
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            inner: Box::new(io::empty()),
            buf: bytes,
            pos: 0,
            discarded: 0,
            mark: None,
            eof: true,
        }
    }

    /// Reader over `text` encoded with `charset`
    pub fn from_text(text: &str, charset: &Charset) -> Self {
        Self::from_bytes(charset.encode(text))
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.discarded + self.pos as u64
    }

    /// Remember the current position.
    ///
    /// A later [`reset`](Self::reset) returns here as long as no more than
    /// `read_limit` bytes were consumed in between.
    pub fn mark(&mut self, read_limit: usize) {
        self.mark = Some(Mark {
            start: self.pos,
            limit: read_limit,
        });
    }

    /// Rewind to the last mark. The mark stays set.
    pub fn reset(&mut self) -> Result<()> {
        match self.mark {
            Some(mark) => {
                self.pos = mark.start;
                Ok(())
            }
            None => Err(EngineError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "resetting to invalid mark",
            ))),
        }
    }

    /// Skip up to `count` bytes, returning how many were skipped
    pub fn skip(&mut self, count: usize) -> Result<usize> {
        let mut skipped = 0;
        while skipped < count {
            self.fill(1)?;
            let step = self.available().min(count - skipped);
            if step == 0 {
                break;
            }
            self.advance(step);
            skipped += step;
        }
        Ok(skipped)
    }

    /// Read up to `count` bytes. Fewer are returned only at end of input.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.fill(count)?;
        let take = self.available().min(count);
        let bytes = self.buf[self.pos..self.pos + take].to_vec();
        self.advance(take);
        Ok(bytes)
    }

    /// Read everything left
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }

    /// Read up to `count` bytes and decode them.
    ///
    /// A multi-byte sequence cut at the end of the window decodes to U+FFFD.
    pub fn read_string(&mut self, count: usize, charset: &Charset) -> Result<String> {
        let bytes = self.read_bytes(count)?;
        Ok(charset.decode(&bytes))
    }

    /// Read and decode everything left
    pub fn read_text(&mut self, charset: &Charset) -> Result<String> {
        let bytes = self.read_all()?;
        Ok(charset.decode(&bytes))
    }

    /// True once no bytes remain
    pub fn exhausted(&mut self) -> Result<bool> {
        self.fill(1)?;
        Ok(self.available() == 0)
    }

    fn available(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn advance(&mut self, count: usize) {
        self.pos += count;
        if let Some(mark) = self.mark {
            if self.pos - mark.start > mark.limit {
                self.mark = None;
            }
        }
    }

    /// Drop bytes no mark can return to
    fn compact(&mut self) {
        let keep_from = self.mark.map_or(self.pos, |mark| mark.start);
        if keep_from == 0 {
            return;
        }
        self.buf.drain(..keep_from);
        self.pos -= keep_from;
        self.discarded += keep_from as u64;
        if let Some(mark) = self.mark.as_mut() {
            mark.start = 0;
        }
    }

    /// Pull from the origin until `want` bytes are buffered or input ends
    fn fill(&mut self, want: usize) -> io::Result<()> {
        if self.available() >= want || self.eof {
            return Ok(());
        }
        let mut chunk = [0u8; CHUNK_SIZE];
        while self.available() < want && !self.eof {
            self.compact();
            let read = loop {
                match self.inner.read(&mut chunk) {
                    Ok(n) => break n,
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                }
            };
            if read == 0 {
                self.eof = true;
            } else {
                self.buf.extend_from_slice(&chunk[..read]);
            }
            tracing::trace!(read, buffered = self.buf.len(), "source reader refill");
        }
        Ok(())
    }
}

impl Read for SourceReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        self.fill(1)?;
        let take = self.available().min(out.len());
        out[..take].copy_from_slice(&self.buf[self.pos..self.pos + take]);
        self.advance(take);
        Ok(take)
    }
}

impl BufRead for SourceReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.fill(1)?;
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.advance(amt.min(self.available()));
    }
}

impl From<Vec<u8>> for SourceReader {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Cursor<Vec<u8>>> for SourceReader {
    fn from(cursor: Cursor<Vec<u8>>) -> Self {
        let offset = cursor.position() as usize;
        let mut bytes = cursor.into_inner();
        bytes.drain(..offset.min(bytes.len()));
        Self::from_bytes(bytes)
    }
}

impl fmt::Debug for SourceReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceReader")
            .field("position", &self.position())
            .field("buffered", &self.available())
            .field("mark", &self.mark)
            .field("eof", &self.eof)
            .finish()
    }
}
