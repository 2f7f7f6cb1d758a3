#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! CLI entrypoint for the Folio asset sync tool.
//!
//! # Design
//! Installs a `tracing` subscriber, delegates to the library, and surfaces errors via `anyhow`.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: &str = "info";

fn main() -> Result<()> {
    init_logging()?;
    let report = asset_sync::run()?;
    tracing::info!(
        css_sha256 = %report.css_sha256,
        files = report.stats.files,
        bytes = report.stats.bytes,
        "static assets synced"
    );
    Ok(())
}

fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
