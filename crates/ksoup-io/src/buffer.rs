//! Staging buffer
//!
//! A growable byte area handed out by the active engine. Writes append at the
//! tail, reads consume from the head, and `clear` keeps the allocation so a
//! buffer can be reused across operations.

use std::io::{self, Read, Write};

use crate::{Charset, SourceReader};

/// Reusable growable byte buffer
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    data: Vec<u8>,
    read_pos: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            read_pos: 0,
        }
    }

    /// Unread byte count
    pub fn len(&self) -> usize {
        self.data.len() - self.read_pos
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Unread bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.read_pos..]
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append `text` encoded with `charset`
    pub fn write_str(&mut self, text: &str, charset: &Charset) {
        if charset.is_utf8() {
            self.write_bytes(text.as_bytes());
        } else {
            self.write_bytes(&charset.encode(text));
        }
    }

    /// Consume up to `count` bytes from the head
    pub fn read_bytes(&mut self, count: usize) -> Vec<u8> {
        let take = count.min(self.len());
        let bytes = self.data[self.read_pos..self.read_pos + take].to_vec();
        self.consume(take);
        bytes
    }

    /// Consume and decode everything unread
    pub fn read_text(&mut self, charset: &Charset) -> String {
        let text = charset.decode(self.as_bytes());
        self.clear();
        text
    }

    /// Drop all content, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
        self.read_pos = 0;
    }

    /// Hand the unread bytes to a [`SourceReader`]
    pub fn into_reader(mut self) -> SourceReader {
        self.data.drain(..self.read_pos);
        SourceReader::from_bytes(self.data)
    }

    fn consume(&mut self, count: usize) {
        self.read_pos += count;
        if self.read_pos == self.data.len() {
            self.clear();
        }
    }
}

impl Write for Buffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.write_bytes(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Buffer {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let take = out.len().min(self.len());
        out[..take].copy_from_slice(&self.data[self.read_pos..self.read_pos + take]);
        self.consume(take);
        Ok(take)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut buffer = Buffer::new();
        buffer.write_bytes(b"<div>");
        buffer.write_byte(b'x');
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.read_bytes(5), b"<div>");
        assert_eq!(buffer.as_bytes(), b"x");
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = Buffer::with_capacity(1024);
        buffer.write_bytes(&[7; 512]);
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= 1024);
    }

    #[test]
    fn test_charset_text() {
        let latin = Charset::for_name("windows-1252").unwrap();
        let mut buffer = Buffer::new();
        buffer.write_str("naïve", &latin);
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.read_text(&latin), "naïve");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_io_traits() {
        let mut buffer = Buffer::new();
        write!(buffer, "<p>{}</p>", 42).unwrap();

        let mut out = String::new();
        buffer.read_to_string(&mut out).unwrap();
        assert_eq!(out, "<p>42</p>");
    }

    #[test]
    fn test_into_reader_skips_consumed() {
        let mut buffer = Buffer::new();
        buffer.write_bytes(b"headbody");
        buffer.read_bytes(4);

        let mut reader = buffer.into_reader();
        assert_eq!(reader.read_all().unwrap(), b"body");
    }
}
