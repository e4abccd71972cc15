//! HTTP transport
//!
//! One shared contract with one implementation per OS family, picked at
//! build time by `platform`. Without the `http` feature every request fails
//! with `UnsupportedOperation`. The process keeps a single transport, created
//! lazily on first network use.

mod platform;
mod request;
mod response;

use std::sync::{Arc, OnceLock};

use ksoup_io::Result;

use crate::TransportConfig;

pub use request::{HttpRequest, Method};
pub use response::HttpResponse;

/// Shared transport contract.
///
/// Implementations must be safe to use from several in-flight requests at
/// once. Timeouts come from [`TransportConfig`]; cancellation is not offered.
pub trait HttpTransport: Send + Sync {
    /// Name of the backing client, e.g. `ureq` or `reqwest`
    fn name(&self) -> &'static str;

    fn config(&self) -> &TransportConfig;

    /// Connect, send `request` and receive the full response
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

static SHARED: OnceLock<Arc<dyn HttpTransport>> = OnceLock::new();

/// The process transport, built from `config` on first call
pub fn shared_transport(config: &TransportConfig) -> Result<Arc<dyn HttpTransport>> {
    if let Some(transport) = SHARED.get() {
        return Ok(Arc::clone(transport));
    }
    let created = platform::create_transport(config)?;
    let transport = SHARED.get_or_init(|| {
        tracing::info!(
            transport = created.name(),
            platform = platform::PLATFORM,
            "HTTP transport created"
        );
        created
    });
    Ok(Arc::clone(transport))
}

/// A fresh transport for this platform, not shared with the process
pub fn platform_transport(config: &TransportConfig) -> Result<Arc<dyn HttpTransport>> {
    platform::create_transport(config)
}

/// OS family the transport was built for
pub fn platform_name() -> &'static str {
    platform::PLATFORM
}

/// User agent with the platform token appended
#[cfg(all(feature = "http", any(unix, windows)))]
fn user_agent(config: &TransportConfig) -> String {
    format!("{} ({})", config.user_agent, platform::PLATFORM)
}
