//! Windows: blocking `reqwest` client over rustls.

#[cfg(feature = "http")]
use std::sync::Arc;

pub const PLATFORM: &str = "windows";

#[cfg(feature = "http")]
pub fn create_transport(
    config: &crate::TransportConfig,
) -> ksoup_io::Result<Arc<dyn crate::transport::HttpTransport>> {
    Ok(Arc::new(super::reqwest_client::ReqwestTransport::new(config)?))
}
