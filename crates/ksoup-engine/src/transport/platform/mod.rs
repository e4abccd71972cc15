//! Build-time transport selection, one module per OS family.
//!
//! Each family module exports `PLATFORM`, and `create_transport` when the
//! `http` feature links its client. Builds without a client fall back to
//! `unavailable`.

#[cfg(all(feature = "http", any(windows, target_vendor = "apple")))]
mod reqwest_client;
#[cfg(all(feature = "http", unix, not(target_vendor = "apple")))]
mod ureq_client;
#[cfg(any(not(feature = "http"), not(any(unix, windows))))]
mod unavailable;

#[cfg(target_vendor = "apple")]
mod apple;
#[cfg(all(unix, not(target_vendor = "apple")))]
mod unix;
#[cfg(not(any(unix, windows)))]
mod web;
#[cfg(windows)]
mod windows;

#[cfg(target_vendor = "apple")]
pub(super) use apple::PLATFORM;
#[cfg(all(unix, not(target_vendor = "apple")))]
pub(super) use unix::PLATFORM;
#[cfg(not(any(unix, windows)))]
pub(super) use web::PLATFORM;
#[cfg(windows)]
pub(super) use windows::PLATFORM;

#[cfg(all(feature = "http", target_vendor = "apple"))]
pub(super) use apple::create_transport;
#[cfg(all(feature = "http", unix, not(target_vendor = "apple")))]
pub(super) use unix::create_transport;
#[cfg(any(not(feature = "http"), not(any(unix, windows))))]
pub(super) use unavailable::create_transport;
#[cfg(all(feature = "http", windows))]
pub(super) use windows::create_transport;
