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
//! CLI entrypoint for the Studydeck token export tool.
//!
//! # Design
//! Installs logging, then delegates to the library and surfaces errors via `anyhow`.

use anyhow::{Context, Result};
use studydeck_telemetry::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    let config = token_export::ExportConfig::from_env()?;
    init_logging(&LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        build_sha: option_env!("STUDYDECK_BUILD_SHA").unwrap_or("dev"),
    })
    .context("failed to install logging")?;
    let summary = token_export::run(&config)?;
    tracing::debug!(
        css_bytes = summary.css_bytes,
        json_bytes = summary.json_bytes,
        "token export finished"
    );
    Ok(())
}
