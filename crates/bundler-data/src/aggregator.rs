//! Aggregation of a source tree into a single snapshot file.

use std::path::{Path, PathBuf};

use bundler_core::error::{BundleError, Result};
use bundler_core::language::LanguageProfile;
use bundler_core::models::{AggregationReport, OutputBuffer, RunState};
use bundler_core::settings::Settings;
use tracing::{debug, info};

use crate::filter::filter_file;
use crate::reader::{find_source_files, read_source_file, relative_display, WalkOptions};

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Walks a source tree and concatenates the filtered content of every
/// matching file.
///
/// All deduplication state is created inside each call, so one `Aggregator`
/// can be reused for several independent runs.
#[derive(Debug, Clone)]
pub struct Aggregator {
    profile: LanguageProfile,
    options: WalkOptions,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(LanguageProfile::default(), WalkOptions::default())
    }
}

impl Aggregator {
    pub fn new(profile: LanguageProfile, options: WalkOptions) -> Self {
        Self { profile, options }
    }

    /// Build an aggregator from parsed CLI settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let options = WalkOptions {
            follow_links: settings.follow_links,
            sorted: !settings.unsorted,
        };
        Ok(Self::new(settings.language_profile()?, options))
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Aggregate `source_dir` into `output_file`, overwriting it.
    ///
    /// The output is written only after every source file was read, so a read
    /// failure leaves any existing output untouched.
    pub fn aggregate(&self, source_dir: &Path, output_file: &Path) -> Result<AggregationReport> {
        let (buffer, mut report) = self.collect(source_dir, Some(output_file))?;

        let content = buffer.render();
        write_output(output_file, &content)?;
        report.bytes_written = content.len();

        info!(
            "Aggregated {} files ({} lines) into {}",
            report.files_processed,
            report.lines_retained,
            output_file.display()
        );
        Ok(report)
    }

    /// Build the output buffer for `source_dir` without writing anything.
    ///
    /// `exclude` names a file that must never be read as input, typically the
    /// output file when it lives inside the source tree.
    pub fn collect(
        &self,
        source_dir: &Path,
        exclude: Option<&Path>,
    ) -> Result<(OutputBuffer, AggregationReport)> {
        let mut report = AggregationReport::new(
            source_dir,
            exclude.map(Path::to_path_buf).unwrap_or_default(),
            self.profile.extension.clone(),
        );
        let mut state = RunState::new();
        let mut buffer = OutputBuffer::new();

        let excluded = exclude.and_then(|p| p.canonicalize().ok());

        for file_path in find_source_files(source_dir, &self.profile, self.options) {
            if is_excluded(&file_path, excluded.as_deref()) {
                debug!("Skipping output file {}", file_path.display());
                continue;
            }

            let content = read_source_file(&file_path)?;
            buffer.push_header(&relative_display(&file_path, source_dir));
            let outcome = filter_file(&content, &self.profile, &mut state, &mut buffer);

            debug!(
                "File {}: {} retained, {} duplicate imports, {} package lines dropped",
                file_path.display(),
                outcome.lines_retained,
                outcome.duplicate_imports,
                outcome.package_lines_dropped,
            );
            report.add_file(&outcome);
        }

        Ok((buffer, report))
    }
}

/// Convenience wrapper running the default Go aggregation.
pub fn aggregate(source_dir: &Path, output_file: &Path) -> Result<AggregationReport> {
    Aggregator::default().aggregate(source_dir, output_file)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn is_excluded(file_path: &Path, excluded: Option<&Path>) -> bool {
    let Some(excluded) = excluded else {
        return false;
    };
    file_path
        .canonicalize()
        .map(|c| c == excluded)
        .unwrap_or(false)
}

/// Write `content` to `path`, creating missing parent directories.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let to_write_error = |source| BundleError::FileWrite {
        path: PathBuf::from(path),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(path, content).map_err(to_write_error)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
