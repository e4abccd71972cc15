//! Transport for builds that cannot send requests: no `http` feature, or a
//! target without blocking sockets.

use std::sync::Arc;

use ksoup_io::{EngineError, Result};

use crate::TransportConfig;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

pub fn create_transport(config: &TransportConfig) -> Result<Arc<dyn HttpTransport>> {
    Ok(Arc::new(UnavailableTransport {
        config: config.clone(),
    }))
}

struct UnavailableTransport {
    config: TransportConfig,
}

impl HttpTransport for UnavailableTransport {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        request.validated_url()?;
        tracing::warn!(url = %request.url, platform = super::PLATFORM, "no HTTP client in this build");
        Err(EngineError::unsupported(format!(
            "HTTP transport is not available in this build ({})",
            super::PLATFORM
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_unsupported() {
        let transport = create_transport(&TransportConfig::default()).unwrap();
        assert_eq!(transport.name(), "unavailable");
        assert!(matches!(
            transport.execute(&HttpRequest::get("https://example.com/")),
            Err(EngineError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            transport.execute(&HttpRequest::get("not a url")),
            Err(EngineError::Validation(_))
        ));
    }
}
