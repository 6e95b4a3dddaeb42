//! Source file discovery and loading.
//!
//! Walks the source tree with `walkdir`, keeps regular files whose name ends
//! with the configured extension and reads each one fully into memory.

use std::path::{Path, PathBuf};

use bundler_core::error::{BundleError, Result};
use bundler_core::language::LanguageProfile;
use tracing::{debug, warn};

// ── WalkOptions ───────────────────────────────────────────────────────────────

/// How the source tree is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    pub follow_links: bool,
    /// Sort paths so repeated runs produce identical output.
    pub sorted: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            sorted: true,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all files matching `profile` recursively under `source_dir`.
///
/// Entries that cannot be read during the walk are logged and skipped. A
/// `source_dir` that is missing or not a directory yields an empty list.
///
/// Symlinks to files are always collected; `follow_links` only decides
/// whether symlinked directories are descended into.
pub fn find_source_files(
    source_dir: &Path,
    profile: &LanguageProfile,
    options: WalkOptions,
) -> Vec<PathBuf> {
    if !source_dir.is_dir() {
        warn!("Source directory not found: {}", source_dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(source_dir)
        .follow_links(options.follow_links)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| is_regular_file(entry) && profile.matches_path(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    if options.sorted {
        files.sort();
    }

    debug!(
        "Found {} .{} files under {}",
        files.len(),
        profile.extension,
        source_dir.display()
    );
    files
}

/// Regular file, or an unfollowed symlink whose target is one.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink()
        && std::fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false)
}

/// Read a whole source file as UTF-8 text.
///
/// Invalid UTF-8 surfaces as a [`BundleError::FileRead`] like any other I/O
/// failure.
pub fn read_source_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| BundleError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Path of `file` relative to `source_dir`, for use in output headers.
pub fn relative_display(file: &Path, source_dir: &Path) -> String {
    file.strip_prefix(source_dir)
        .unwrap_or(file)
        .display()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
