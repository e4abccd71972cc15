//! Platform engine variants
//!
//! Cargo features decide which variants are compiled. [`DefaultEngine`] is the
//! one `init` activates, by priority: stream, path, virtual, then lite.

mod lite;
#[cfg(feature = "path-fs")]
mod path;
#[cfg(feature = "stream-fs")]
mod stream;
#[cfg(feature = "virtual-fs")]
mod virtual_fs;

pub use lite::LiteEngine;
#[cfg(feature = "path-fs")]
pub use path::PathEngine;
#[cfg(feature = "stream-fs")]
pub use stream::StreamEngine;
#[cfg(feature = "virtual-fs")]
pub use virtual_fs::{VirtualEngine, VirtualFileSystem};

#[cfg(feature = "stream-fs")]
pub type DefaultEngine = StreamEngine;

#[cfg(all(not(feature = "stream-fs"), feature = "path-fs"))]
pub type DefaultEngine = PathEngine;

#[cfg(all(
    not(feature = "stream-fs"),
    not(feature = "path-fs"),
    feature = "virtual-fs"
))]
pub type DefaultEngine = VirtualEngine;

#[cfg(not(any(feature = "stream-fs", feature = "path-fs", feature = "virtual-fs")))]
pub type DefaultEngine = LiteEngine;
