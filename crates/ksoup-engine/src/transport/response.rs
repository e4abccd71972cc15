//! HTTP response

use ksoup_io::{Charset, SourceReader};

/// Response produced by an [`HttpTransport`](super::HttpTransport).
///
/// Any status the server sends is a response; only transport failures are
/// errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Final URL after redirects
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Check if response is OK (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header with `name`, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Charset declared by `Content-Type`, falling back to UTF-8
    pub fn charset(&self) -> Charset {
        self.content_type()
            .and_then(Charset::from_content_type)
            .unwrap_or_default()
    }

    /// Body decoded with [`charset`](Self::charset)
    pub fn text(&self) -> String {
        self.charset().decode(&self.body)
    }

    pub fn into_reader(self) -> SourceReader {
        SourceReader::from_bytes(self.body)
    }
}
