//! Charsets
//!
//! Named text encodings backed by `encoding_rs` and the WHATWG label table.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use encoding_rs::{Encoding, REPLACEMENT, UTF_8, UTF_16BE, UTF_16LE};

use crate::{EngineError, Result};

/// A text encoding identified by name.
///
/// Lookup happens once, in [`Charset::for_name`]; an unknown name never
/// produces a `Charset`, so encode and decode cannot fail on the name.
#[derive(Clone, Copy)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// UTF-8, the engine default
    pub fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// Look up a charset by label, ignoring case and surrounding whitespace
    pub fn for_name(name: &str) -> Result<Self> {
        let encoding = Encoding::for_label(name.trim().as_bytes())
            .filter(|encoding| *encoding != REPLACEMENT)
            .ok_or_else(|| EngineError::UnsupportedEncoding(name.to_string()))?;
        Ok(Self { encoding })
    }

    /// Extract the charset parameter of a `Content-Type` header value.
    ///
    /// Returns `None` when the parameter is missing or names an unknown
    /// encoding.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        content_type
            .split(';')
            .skip(1)
            .filter_map(|param| param.split_once('='))
            .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
            .and_then(|(_, value)| Self::for_name(value.trim().trim_matches(['"', '\''])).ok())
    }

    /// Canonical name, e.g. `UTF-8` or `windows-1252`
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Whether `c` has a representation in this charset
    pub fn can_encode(&self, c: char) -> bool {
        if self.is_unicode() {
            return true;
        }
        let mut scratch = [0u8; 4];
        let (_, _, unmappable) = self.encoding.encode(c.encode_utf8(&mut scratch));
        !unmappable
    }

    /// Encode text.
    ///
    /// Characters with no mapping become HTML numeric character references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.encoding == UTF_16LE {
            return text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        }
        if self.encoding == UTF_16BE {
            return text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        }
        let (bytes, _, _) = self.encoding.encode(text);
        bytes.into_owned()
    }

    /// Decode bytes. Malformed sequences become U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, _) = self.encoding.decode_without_bom_handling(bytes);
        text.into_owned()
    }

    /// Decode a sub-range of `bytes`
    pub fn decode_range(&self, bytes: &[u8], range: Range<usize>) -> Result<String> {
        let (start, end) = (range.start, range.end);
        let slice = bytes.get(range).ok_or_else(|| {
            EngineError::validation(format!(
                "range {start}..{end} out of bounds for {} bytes",
                bytes.len()
            ))
        })?;
        Ok(self.decode(slice))
    }

    fn is_unicode(&self) -> bool {
        self.encoding == UTF_8 || self.encoding == UTF_16LE || self.encoding == UTF_16BE
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding
    }
}

impl Eq for Charset {}

impl Hash for Charset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
