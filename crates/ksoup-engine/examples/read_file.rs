//! Read a file through the default engine and print it.
//!
//! ```text
//! RUST_LOG=debug cargo run -p ksoup-engine --example read_file -- page.html [charset]
//! ```

use std::env;
use std::process::ExitCode;

use ksoup_engine::{IoEngine, KsoupEngine};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: read_file <path> [charset]");
        return ExitCode::FAILURE;
    };
    let charset = args.next();

    match run(&path, charset.as_deref()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("failed to read {path}: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, charset: Option<&str>) -> ksoup_engine::Result<String> {
    ksoup_engine::init()?;
    let engine = ksoup_engine::registry::current()?;

    let charset = match charset {
        Some(name) => engine.charset_by_name(name)?,
        None => engine.default_charset(),
    };
    let source = engine.resolve_file_source(path)?;
    tracing::info!(engine = engine.name(), charset = %charset, "reading {path}");

    let mut reader = if path.ends_with(".gz") {
        source.open_gzip()?
    } else {
        source.open()?
    };
    reader.read_text(&charset)
}
