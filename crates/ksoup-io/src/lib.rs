//! Ksoup I/O
//!
//! The core-IO layer every Ksoup build links: text encodings, mark/reset
//! capable byte readers, staging buffers and the [`IoEngine`] facade the
//! parsing code is written against.
//!
//! # Example
//! ```rust,ignore
//! use ksoup_io::registry;
//!
//! let engine = registry::current()?;
//! let mut reader = engine.open_reader("<p>hello</p>", None)?;
//! let html = reader.read_text(&engine.default_charset())?;
//! ```

mod buffer;
mod charset;
mod engine;
mod error;
mod resolve;
mod source_reader;

pub mod compat;
pub mod registry;
pub mod validate;

pub use buffer::Buffer;
pub use charset::Charset;
pub use engine::{DEFAULT_BUFFER_CAPACITY, IoEngine};
pub use error::{EngineError, Result};
pub use resolve::{resolve, resolve_url};
pub use source_reader::SourceReader;
pub use url::Url;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
