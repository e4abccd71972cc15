//! Edge case tests for ksoup-engine
//!
//! The lite variant, engines behind trait objects, transport selection and
//! configuration through the public API. File-source behavior shared by the
//! file-backed variants lives in `variant_contract.rs`.

use std::sync::Arc;
use std::time::Duration;

use ksoup_engine::*;

// ============================================================================
// VARIANT TESTS
// ============================================================================

#[test]
fn test_lite_engine_core_services() {
    let engine = LiteEngine::default();
    assert_eq!(engine.name(), "lite");
    assert!(matches!(
        engine.resolve_file_source("index.html"),
        Err(EngineError::UnsupportedOperation(_))
    ));
    assert!(!engine.resolve_file_source("index.html").unwrap_err().is_recoverable());

    let latin = engine.charset_by_name("ISO-8859-1").unwrap();
    let mut reader = engine.open_reader_bytes(vec![0x63, 0x61, 0x66, 0xE9]);
    assert_eq!(reader.read_text(&latin).unwrap(), "café");
}

#[test]
fn test_engines_as_trait_objects() {
    let engines: Vec<Box<dyn KsoupEngine>> = vec![
        Box::new(LiteEngine::default()),
        Box::new(DefaultEngine::default()),
    ];
    for engine in &engines {
        assert_eq!(engine.default_charset(), Charset::utf8());
        assert_eq!(
            engine.resolve_url("http://example.com/dir/", "page.html").as_deref(),
            Some("http://example.com/dir/page.html")
        );
        assert_eq!(engine.config().buffer_capacity, io::DEFAULT_BUFFER_CAPACITY);
    }
}

#[test]
fn test_buffer_capacity_from_config() {
    let engine = DefaultEngine::new(Config::default().with_buffer_capacity(32 * 1024));
    let mut buffer = engine.new_buffer();
    assert!(buffer.capacity() >= 32 * 1024);
    buffer.write_str("naïve", &Charset::utf8());
    assert_eq!(buffer.read_text(&Charset::utf8()), "naïve");
}

// ============================================================================
// TRANSPORT TESTS
// ============================================================================

#[test]
fn test_platform_name_matches_target() {
    let name = transport::platform_name();
    if cfg!(windows) {
        assert_eq!(name, "windows");
    } else if cfg!(target_os = "macos") {
        assert_eq!(name, "macos");
    } else if cfg!(target_os = "android") {
        assert_eq!(name, "android");
    } else if cfg!(unix) {
        assert_eq!(name, "unix");
    }
}

#[test]
fn test_shared_transport_is_created_once() {
    let config = TransportConfig::default();
    let first = transport::shared_transport(&config).unwrap();
    let second = transport::shared_transport(&config).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let expected = if !cfg!(feature = "http") {
        "unavailable"
    } else if cfg!(any(windows, target_vendor = "apple")) {
        "reqwest"
    } else {
        "ureq"
    };
    assert_eq!(first.name(), expected);
}

#[test]
fn test_invalid_request_url_is_validation_error() {
    let transport = transport::platform_transport(&TransportConfig::default()).unwrap();
    assert!(matches!(
        transport.execute(&HttpRequest::get("not a url")),
        Err(EngineError::Validation(_))
    ));
    assert!(matches!(
        transport.execute(&HttpRequest::get("mailto:someone@example.com")),
        Err(EngineError::Validation(_))
    ));
}

// ============================================================================
// CONFIG TESTS
// ============================================================================

#[test]
fn test_platform_transport_takes_config() {
    let config = TransportConfig::builder()
        .user_agent("EdgeCase/1.0")
        .connect_timeout(Duration::from_millis(250))
        .max_redirects(0)
        .build();
    let transport = transport::platform_transport(&config).unwrap();
    assert_eq!(transport.config().user_agent, "EdgeCase/1.0");
    assert_eq!(transport.config().max_redirects, 0);
}
