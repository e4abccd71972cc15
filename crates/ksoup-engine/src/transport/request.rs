//! HTTP request

use ksoup_io::{EngineError, Result, Url};

/// Methods a transport can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
}

impl Method {
    /// Request-line token, as `ureq` takes it
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
        }
    }
}

/// Request handed to an [`HttpTransport`](super::HttpTransport).
///
/// Header names are matched ASCII case-insensitively; setting a name twice
/// keeps the last value.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn get(url: &str) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Headers to put on the wire: `defaults` first, minus any name this
    /// request sets itself, then the request's own headers.
    pub fn effective_headers<'a>(&'a self, defaults: &'a [(String, String)]) -> Vec<(&'a str, &'a str)> {
        defaults
            .iter()
            .filter(|(name, _)| !self.headers.iter().any(|(own, _)| own.eq_ignore_ascii_case(name)))
            .chain(self.headers.iter())
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    /// The target as an absolute http(s) URL
    pub fn validated_url(&self) -> Result<Url> {
        let url = Url::parse(self.url.trim())
            .map_err(|e| EngineError::validation(format!("invalid URL `{}`: {e}", self.url)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(EngineError::validation(format!(
                "unsupported URL scheme `{scheme}` in `{}`",
                self.url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportConfig;

    #[test]
    fn test_request_headers_override_defaults() {
        let config = TransportConfig::builder()
            .default_header("Accept", "*/*")
            .default_header("Accept-Language", "en")
            .build();
        let req = HttpRequest::get("https://example.com/").with_header("accept", "text/html");

        assert_eq!(
            req.effective_headers(&config.default_headers),
            vec![("Accept-Language", "en"), ("accept", "text/html")]
        );
    }

    #[test]
    fn test_defaults_pass_through_untouched() {
        let config = TransportConfig::builder().default_header("X-Client", "ksoup").build();
        let req = HttpRequest::get("https://example.com/");
        assert_eq!(req.effective_headers(&config.default_headers), vec![("X-Client", "ksoup")]);
        assert!(req.effective_headers(&[]).is_empty());
    }

    #[test]
    fn test_setting_header_twice_keeps_last() {
        let req = HttpRequest::get("https://example.com/")
            .with_header("X-Token", "one")
            .with_header("x-token", "two");
        assert_eq!(req.headers(), &[("x-token".to_string(), "two".to_string())]);
    }

    #[test]
    fn test_new_request_defaults() {
        let req = HttpRequest::new(Method::Post, "https://example.com/form").with_body(b"a=1".to_vec());
        assert_eq!(req.method.as_str(), "POST");
        assert_eq!(req.body.as_deref(), Some(&b"a=1"[..]));
        assert_eq!(HttpRequest::get("https://example.com/").method, Method::default());
    }

    #[test]
    fn test_validated_url() {
        assert_eq!(
            HttpRequest::get(" https://example.com/a ").validated_url().unwrap().as_str(),
            "https://example.com/a"
        );
        assert!(matches!(
            HttpRequest::get("relative/page.html").validated_url(),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            HttpRequest::get("file:///etc/hosts").validated_url(),
            Err(EngineError::Validation(_))
        ));
    }
}
