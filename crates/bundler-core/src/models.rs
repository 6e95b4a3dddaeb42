//! Data models shared across the bundler crates.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ── RunState ──────────────────────────────────────────────────────────────────

/// Deduplication state that lives for exactly one aggregation run.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Set once the first package declaration has been kept.
    pub package_declared: bool,
    /// Trimmed import lines already emitted in this run.
    pub seen_imports: HashSet<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single package slot. Returns `true` only on the first call.
    pub fn claim_package(&mut self) -> bool {
        if self.package_declared {
            return false;
        }
        self.package_declared = true;
        true
    }

    /// Record an import; returns `true` when it had not been seen before.
    pub fn record_import(&mut self, trimmed: &str) -> bool {
        if self.seen_imports.contains(trimmed) {
            return false;
        }
        self.seen_imports.insert(trimmed.to_string());
        true
    }
}

// ── OutputBuffer ──────────────────────────────────────────────────────────────

/// Ordered, append-only collection of output chunks.
///
/// Chunks are stored verbatim, including their line terminators, so the
/// rendered output is their plain concatenation.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    lines: Vec<String>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append the header announcing a file's relative path.
    pub fn push_header(&mut self, relative_path: &str) {
        self.lines.push(format!("\n# {relative_path}\n"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenate all chunks in insertion order.
    pub fn render(&self) -> String {
        self.lines.concat()
    }
}

// ── FileOutcome ───────────────────────────────────────────────────────────────

/// Line counts produced by filtering a single source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOutcome {
    pub lines_retained: usize,
    pub duplicate_imports: usize,
    pub package_lines_dropped: usize,
}

// ── AggregationReport ─────────────────────────────────────────────────────────

/// Summary of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationReport {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    pub extension: String,
    pub files_processed: usize,
    pub lines_retained: usize,
    pub duplicate_imports: usize,
    pub package_lines_dropped: usize,
    pub bytes_written: usize,
    pub generated_at: DateTime<Utc>,
}

impl AggregationReport {
    /// Empty report for a run that has not processed anything yet.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_file: output_file.into(),
            extension: extension.into(),
            files_processed: 0,
            lines_retained: 0,
            duplicate_imports: 0,
            package_lines_dropped: 0,
            bytes_written: 0,
            generated_at: Utc::now(),
        }
    }

    /// Fold one file's counts into the totals.
    pub fn add_file(&mut self, outcome: &FileOutcome) {
        self.files_processed += 1;
        self.lines_retained += outcome.lines_retained;
        self.duplicate_imports += outcome.duplicate_imports;
        self.package_lines_dropped += outcome.package_lines_dropped;
    }

    /// Pretty-printed JSON form used by `--json`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
