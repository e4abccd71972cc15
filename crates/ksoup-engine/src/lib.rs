//! Ksoup Engine
//!
//! Platform layer on top of [`ksoup_io`]: lazily opened file sources, the
//! per-OS HTTP transport and the registry that holds the active engine.
//!
//! # Example
//! ```rust,ignore
//! ksoup_engine::init()?;
//!
//! let engine = ksoup_engine::registry::current()?;
//! let source = engine.resolve_file_source("index.html")?;
//! let html = source.open()?.read_text(&engine.default_charset())?;
//! ```

mod config;
mod engine;
mod file_source;

pub mod registry;
pub mod transport;
pub mod variants;

pub use config::{Config, TransportConfig, TransportConfigBuilder};
pub use engine::KsoupEngine;
pub use file_source::{FileOpener, FileSource};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use variants::{DefaultEngine, LiteEngine};
#[cfg(feature = "path-fs")]
pub use variants::PathEngine;
#[cfg(feature = "stream-fs")]
pub use variants::StreamEngine;
#[cfg(feature = "virtual-fs")]
pub use variants::{VirtualEngine, VirtualFileSystem};

pub use ksoup_io as io;
pub use ksoup_io::{Buffer, Charset, EngineError, IoEngine, Result, SourceReader, Url};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Activate the build's default engine with default configuration
pub fn init() -> Result<()> {
    init_with(Config::default())
}

/// Activate the build's default engine with `config`
pub fn init_with(config: Config) -> Result<()> {
    registry::activate(DefaultEngine::new(config))
}

/// Fetch `url` with the active engine's transport.
///
/// The blocking transport runs on smol's thread pool.
#[cfg(not(target_family = "wasm"))]
pub async fn fetch(url: &str) -> Result<HttpResponse> {
    let engine = registry::current()?;
    fetch_with(engine.as_ref(), url).await
}

/// Fetch `url` with the transport of `engine`
#[cfg(not(target_family = "wasm"))]
pub async fn fetch_with(engine: &dyn KsoupEngine, url: &str) -> Result<HttpResponse> {
    let request = HttpRequest::get(url);
    request.validated_url()?;
    let transport = engine.http_transport()?;
    smol::unblock(move || transport.execute(&request)).await
}
