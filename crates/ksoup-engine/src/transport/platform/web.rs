//! wasm and other targets without a blocking socket stack

pub const PLATFORM: &str = "wasm";
