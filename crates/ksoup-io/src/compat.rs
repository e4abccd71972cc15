//! Legacy stream adapters.
//!
//! Older entry points took raw streams and charset names. They stay available
//! for existing callers and forward to [`SourceReader`].

use std::io::Read;

use crate::{Charset, Result, SourceReader};

#[deprecated(since = "0.1.0", note = "use `SourceReader::from_stream`")]
pub fn input_stream_reader<R: Read + Send + 'static>(stream: R) -> SourceReader {
    SourceReader::from_stream(stream)
}

#[deprecated(since = "0.1.0", note = "use `Charset::for_name` with `SourceReader::read_text`")]
pub fn read_stream_to_string<R: Read + Send + 'static>(stream: R, charset_name: &str) -> Result<String> {
    let charset = Charset::for_name(charset_name)?;
    SourceReader::from_stream(stream).read_text(&charset)
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use super::*;
    use crate::EngineError;
    use std::io::Cursor;

    #[test]
    fn test_input_stream_reader() {
        let mut reader = input_stream_reader(Cursor::new(b"legacy".to_vec()));
        assert_eq!(reader.read_all().unwrap(), b"legacy");
    }

    #[test]
    fn test_read_stream_to_string() {
        let text = read_stream_to_string(Cursor::new(vec![0x63, 0x61, 0x66, 0xE9]), "ISO-8859-1").unwrap();
        assert_eq!(text, "café");
        assert!(matches!(
            read_stream_to_string(Cursor::new(Vec::new()), "nope"),
            Err(EngineError::UnsupportedEncoding(_))
        ));
    }
}
