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
//! Export the Studydeck design tokens into the UI static directory.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd;
//!   `STUDYDECK_TOKENS_OUT` overrides the output directory.
//! - Writes `tokens.css` (custom properties per theme) and `tokens.json`.
//! - Validates the stylesheet carries a block for every theme before writing the lock file.
//! - Emits a deterministic `TOKENS_LOCK.txt` containing both hashes and sizes.
//!
//! Failure modes include an unresolvable UI root, write errors, JSON
//! serialisation errors, or a stylesheet missing a theme block.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use studydeck_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};
use studydeck_tokens::Theme;
use studydeck_tokens::export::{stylesheet, theme_selector, tokens_json};
use thiserror::Error;
use tracing::{debug, info};

const OUTPUT_ROOT: &str = "static/tokens";
const CSS_FILE: &str = "tokens.css";
const JSON_FILE: &str = "tokens.json";
const LOCK_FILE: &str = "TOKENS_LOCK.txt";

/// Environment variable overriding the output directory.
pub const OUTPUT_ENV: &str = "STUDYDECK_TOKENS_OUT";
/// Environment variable selecting `json` or `pretty` logs.
pub const LOG_FORMAT_ENV: &str = "STUDYDECK_LOG_FORMAT";
/// Environment variable carrying the log level.
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Errors returned by the token export tool.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required path could not be resolved.
    #[error("required path is missing: {}", path.display())]
    MissingPath {
        /// Path that could not be resolved.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the JSON document failed.
    #[error("failed to serialise tokens: {source}")]
    Serialize {
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The generated stylesheet failed the sanity check.
    #[error("generated CSS failed validation at {}: {reason}", path.display())]
    Validation {
        /// Stylesheet path that failed validation.
        path: PathBuf,
        /// Reason the stylesheet was rejected.
        reason: String,
    },
}

/// Runtime configuration for the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory receiving the generated files.
    pub output_dir: PathBuf,
    /// Log level passed to the subscriber.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl ExportConfig {
    /// Build the configuration from the process environment.
    ///
    /// # Errors
    /// Returns an error if the UI root cannot be derived from the manifest directory.
    pub fn from_env() -> Result<Self, ExportError> {
        Ok(Self::from_lookup(
            |key| std::env::var(key).ok(),
            &ui_root_dir()?,
        ))
    }

    /// Build the configuration from `lookup`, defaulting the output under `ui_root`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, ui_root: &Path) -> Self {
        let output_dir = lookup(OUTPUT_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| ui_root.join(OUTPUT_ROOT), PathBuf::from);
        let log_level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_format = lookup(LOG_FORMAT_ENV)
            .map_or_else(LogFormat::infer, |value| LogFormat::from_str_lossy(&value));
        Self {
            output_dir,
            log_level,
            log_format,
        }
    }
}

/// Hashes and sizes of the generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Directory the files were written to.
    pub output_dir: PathBuf,
    /// SHA-256 of `tokens.css`.
    pub css_sha256: String,
    /// Size of `tokens.css` in bytes.
    pub css_bytes: usize,
    /// SHA-256 of `tokens.json`.
    pub json_sha256: String,
    /// Size of `tokens.json` in bytes.
    pub json_bytes: usize,
}

/// Run the export using `config`.
///
/// # Errors
/// Returns an error if outputs cannot be written or the stylesheet fails validation.
pub fn run(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    export_tokens(&config.output_dir)
}

fn ui_root_dir() -> Result<PathBuf, ExportError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| ExportError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

/// Write the stylesheet, JSON document and lock file into `output_dir`.
///
/// # Errors
/// Returns an error if outputs cannot be written or the stylesheet fails validation.
pub fn export_tokens(output_dir: &Path) -> Result<ExportSummary, ExportError> {
    ensure_dir_exists(output_dir)?;

    let css = stylesheet();
    let css_path = output_dir.join(CSS_FILE);
    validate_css(&css_path, &css)?;
    write_file(&css_path, &css)?;
    debug!(path = %css_path.display(), bytes = css.len(), "wrote stylesheet");

    let json = tokens_json().map_err(|source| ExportError::Serialize { source })?;
    let json_path = output_dir.join(JSON_FILE);
    write_file(&json_path, &json)?;
    debug!(path = %json_path.display(), bytes = json.len(), "wrote token document");

    let summary = ExportSummary {
        output_dir: output_dir.to_path_buf(),
        css_sha256: sha256_hex(css.as_bytes()),
        css_bytes: css.len(),
        json_sha256: sha256_hex(json.as_bytes()),
        json_bytes: json.len(),
    };
    write_lock(output_dir, &summary)?;
    info!(
        output = %output_dir.display(),
        css_sha256 = %summary.css_sha256,
        json_sha256 = %summary.json_sha256,
        "design tokens exported"
    );
    Ok(summary)
}

fn ensure_dir_exists(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_css(path: &Path, contents: &str) -> Result<(), ExportError> {
    if !contents.starts_with(":root {") {
        return Err(ExportError::Validation {
            path: path.to_path_buf(),
            reason: "missing :root block".to_string(),
        });
    }
    for theme in Theme::ALL {
        let selector = theme_selector(theme);
        if !contents.contains(&selector) {
            return Err(ExportError::Validation {
                path: path.to_path_buf(),
                reason: format!("missing block {selector}"),
            });
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn write_lock(output_dir: &Path, summary: &ExportSummary) -> Result<(), ExportError> {
    let lock_path = output_dir.join(LOCK_FILE);
    let contents = format!(
        "{CSS_FILE} sha256 {} bytes {}\n{JSON_FILE} sha256 {} bytes {}\n",
        summary.css_sha256, summary.css_bytes, summary.json_sha256, summary.json_bytes
    );
    write_file(&lock_path, &contents)
}
