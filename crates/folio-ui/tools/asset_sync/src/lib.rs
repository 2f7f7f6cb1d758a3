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
//! Sync the Folio stylesheet into the Trunk static directory.
//!
//! # Design
//! - Resolves the UI root relative to `CARGO_MANIFEST_DIR` so it can be run from any cwd.
//! - Replaces `static/` with the contents of `styles/`.
//! - Validates the copied stylesheet for size and for the selectors the views emit, including
//!   the splash bar animation bound to the `--splash-duration` custom property.
//! - Emits a deterministic `ASSET_LOCK.txt` containing the stylesheet hash and directory stats.
//!
//! Failure modes include missing inputs, copy errors, an invalid stylesheet, or inability to
//! write outputs and the lock file.

use std::fs;
use std::path::{Path, PathBuf};

use fs_extra::dir::CopyOptions;
use sha2::{Digest, Sha256};
use thiserror::Error;
use walkdir::WalkDir;

const STYLES_ROOT: &str = "styles";
const OUTPUT_ROOT: &str = "static";
const STYLESHEET: &str = "folio.css";
const LOCK_FILE: &str = "ASSET_LOCK.txt";
const MIN_CSS_BYTES: usize = 512;
const REQUIRED_SELECTORS: [&str; 6] = [
    ".app.light",
    ".app.dark",
    ".splash-bar-fill",
    ".theme-switch",
    ".switch-thumb.light",
    ".switch-thumb.dark",
];
const SPLASH_DURATION_REF: &str = "var(--splash-duration)";

/// Errors returned by the asset sync tool.
#[derive(Debug, Error)]
pub enum AssetSyncError {
    /// A required path is missing on disk.
    #[error("required path is missing: {}", .path.display())]
    MissingPath {
        /// Path that could not be found.
        path: PathBuf,
    },
    /// A required file path is not a file.
    #[error("expected file but found non-file: {}", .path.display())]
    ExpectedFile {
        /// Path that was expected to be a file.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("io error at {}", .path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A directory copy failed.
    #[error("copy failed from {} to {}: {message}", .from.display(), .to.display())]
    CopyFailed {
        /// Copy source path.
        from: PathBuf,
        /// Copy destination path.
        to: PathBuf,
        /// Error message from the copy implementation.
        message: String,
    },
    /// The copied stylesheet failed the sanity check.
    #[error("copied CSS failed validation at {}: {reason}", .path.display())]
    CssInvalid {
        /// Stylesheet path that failed validation.
        path: PathBuf,
        /// Reason the stylesheet was rejected.
        reason: String,
    },
    /// Traversal of a directory failed.
    #[error("directory walk failed at {}: {message}", .path.display())]
    WalkFailed {
        /// Directory path that could not be traversed.
        path: PathBuf,
        /// Error message from directory traversal.
        message: String,
    },
}

/// File count and total size of a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirStats {
    /// Number of regular files.
    pub files: u64,
    /// Total bytes across those files.
    pub bytes: u64,
}

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Hex SHA-256 of the synced stylesheet.
    pub css_sha256: String,
    /// Stats of the output directory, excluding the lock file.
    pub stats: DirStats,
}

/// Run the asset synchronization using the crate-relative paths.
///
/// # Errors
/// Returns an error if inputs are missing, outputs cannot be written, or the copied
/// stylesheet fails the sanity check.
pub fn run() -> Result<SyncReport, AssetSyncError> {
    let ui_root = ui_root_dir()?;
    sync_assets(&ui_root)
}

fn ui_root_dir() -> Result<PathBuf, AssetSyncError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| AssetSyncError::MissingPath {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

/// Replace `<ui_root>/static` with `<ui_root>/styles`, validate, and write the lock file.
///
/// # Errors
/// See [`run`].
pub fn sync_assets(ui_root: &Path) -> Result<SyncReport, AssetSyncError> {
    let styles = ui_root.join(STYLES_ROOT);
    ensure_file(&styles.join(STYLESHEET))?;

    let output_root = ui_root.join(OUTPUT_ROOT);
    replace_dir(&styles, &output_root)?;
    tracing::debug!(from = %styles.display(), to = %output_root.display(), "copied styles");

    let output_css = output_root.join(STYLESHEET);
    validate_css(&output_css)?;

    let css_sha256 = sha256_hex(&output_css)?;
    let stats = dir_stats(&output_root)?;
    write_lock(&output_root, &css_sha256, stats)?;

    Ok(SyncReport { css_sha256, stats })
}

fn ensure_file(path: &Path) -> Result<(), AssetSyncError> {
    if !path.exists() {
        return Err(AssetSyncError::MissingPath {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(AssetSyncError::ExpectedFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn ensure_dir_exists(path: &Path) -> Result<(), AssetSyncError> {
    fs::create_dir_all(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn replace_dir(from: &Path, to: &Path) -> Result<(), AssetSyncError> {
    if to.exists() {
        let removed = if to.is_dir() {
            fs::remove_dir_all(to)
        } else {
            fs::remove_file(to)
        };
        removed.map_err(|source| AssetSyncError::Io {
            path: to.to_path_buf(),
            source,
        })?;
    }
    ensure_dir_exists(to)?;
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    fs_extra::dir::copy(from, to, &options).map_err(|err| AssetSyncError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(())
}

fn validate_css(path: &Path) -> Result<(), AssetSyncError> {
    let contents = fs::read_to_string(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(reason) = css_problem(&contents) {
        return Err(AssetSyncError::CssInvalid {
            path: path.to_path_buf(),
            reason,
        });
    }
    Ok(())
}

fn css_problem(contents: &str) -> Option<String> {
    if contents.len() < MIN_CSS_BYTES {
        return Some(format!("expected at least {MIN_CSS_BYTES} bytes"));
    }
    if let Some(selector) = REQUIRED_SELECTORS
        .iter()
        .find(|selector| !contents.contains(**selector))
    {
        return Some(format!("missing selector {selector}"));
    }
    if !contents.contains(SPLASH_DURATION_REF) {
        return Some(format!("splash animation must use {SPLASH_DURATION_REF}"));
    }
    None
}

fn sha256_hex(path: &Path) -> Result<String, AssetSyncError> {
    let bytes = fs::read(path).map_err(|source| AssetSyncError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

fn dir_stats(path: &Path) -> Result<DirStats, AssetSyncError> {
    let mut files = 0_u64;
    let mut bytes = 0_u64;
    for entry in WalkDir::new(path).min_depth(1) {
        let entry = entry.map_err(|err| AssetSyncError::WalkFailed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        if entry.file_type().is_file() && entry.file_name() != LOCK_FILE {
            let metadata = entry.metadata().map_err(|err| AssetSyncError::WalkFailed {
                path: entry.path().to_path_buf(),
                message: err.to_string(),
            })?;
            files += 1;
            bytes += metadata.len();
        }
    }
    Ok(DirStats { files, bytes })
}

fn write_lock(output_root: &Path, css_sha256: &str, stats: DirStats) -> Result<(), AssetSyncError> {
    let lock_path = output_root.join(LOCK_FILE);
    let contents = format!(
        "{STYLESHEET} sha256 {css_sha256}\nstatic files {} bytes {}\n",
        stats.files, stats.bytes
    );
    fs::write(&lock_path, contents).map_err(|source| AssetSyncError::Io {
        path: lock_path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    type TestResult = Result<(), Box<dyn Error>>;

    const SHIPPED_CSS: &str = include_str!("../../../styles/folio.css");

    fn write_styles(root: &Path, css: &str) -> std::io::Result<()> {
        let styles = root.join(STYLES_ROOT);
        fs::create_dir_all(styles.join("fonts"))?;
        fs::write(styles.join(STYLESHEET), css)?;
        fs::write(styles.join("fonts/inter.txt"), "font placeholder")?;
        Ok(())
    }

    #[test]
    fn shipped_stylesheet_passes_validation() {
        assert_eq!(css_problem(SHIPPED_CSS), None);
    }

    #[test]
    fn sync_assets_writes_outputs_and_lock() -> TestResult {
        let temp = tempfile::tempdir()?;
        write_styles(temp.path(), SHIPPED_CSS)?;

        let report = sync_assets(temp.path())?;

        let output_css = temp.path().join(OUTPUT_ROOT).join(STYLESHEET);
        assert_eq!(fs::read_to_string(&output_css)?, SHIPPED_CSS);
        assert!(temp.path().join(OUTPUT_ROOT).join("fonts/inter.txt").is_file());
        assert_eq!(report.stats.files, 2);

        let lock = fs::read_to_string(temp.path().join(OUTPUT_ROOT).join(LOCK_FILE))?;
        assert!(lock.contains(&format!("folio.css sha256 {}", report.css_sha256)));
        assert_eq!(report.css_sha256, sha256_hex(&output_css)?);
        Ok(())
    }

    #[test]
    fn resync_replaces_stale_outputs() -> TestResult {
        let temp = tempfile::tempdir()?;
        write_styles(temp.path(), SHIPPED_CSS)?;
        let stale = temp.path().join(OUTPUT_ROOT).join("old.css");
        fs::create_dir_all(temp.path().join(OUTPUT_ROOT))?;
        fs::write(&stale, "stale")?;

        let first = sync_assets(temp.path())?;
        let second = sync_assets(temp.path())?;

        assert!(!stale.exists());
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn stylesheet_without_splash_variable_is_rejected() -> TestResult {
        let temp = tempfile::tempdir()?;
        let css = SHIPPED_CSS.replace(SPLASH_DURATION_REF, "2.6s");
        write_styles(temp.path(), &css)?;

        let result = sync_assets(temp.path());
        assert!(
            matches!(result, Err(AssetSyncError::CssInvalid { ref reason, .. }) if reason.contains("--splash-duration")),
            "expected CssInvalid error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn tiny_stylesheet_is_rejected() -> TestResult {
        let temp = tempfile::tempdir()?;
        write_styles(temp.path(), "body { color: black; }")?;

        let result = sync_assets(temp.path());
        assert!(
            matches!(result, Err(AssetSyncError::CssInvalid { .. })),
            "expected CssInvalid error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn missing_stylesheet_is_reported() -> TestResult {
        let temp = tempfile::tempdir()?;
        let result = sync_assets(temp.path());
        assert!(
            matches!(result, Err(AssetSyncError::MissingPath { .. })),
            "expected MissingPath error, got {result:?}"
        );
        Ok(())
    }
}
