//! Linux, Android and the BSDs: `ureq` agent.

#[cfg(feature = "http")]
use std::sync::Arc;

pub const PLATFORM: &str = if cfg!(target_os = "android") { "android" } else { "unix" };

#[cfg(feature = "http")]
pub fn create_transport(
    config: &crate::TransportConfig,
) -> ksoup_io::Result<Arc<dyn crate::transport::HttpTransport>> {
    Ok(Arc::new(super::ureq_client::UreqTransport::new(config)))
}
