//! Line classification for a single source file.
//!
//! Package declarations are kept once per run, import declarations once per
//! distinct trimmed text. Everything else passes through untouched.

use bundler_core::language::LanguageProfile;
use bundler_core::models::{FileOutcome, OutputBuffer, RunState};

/// What happened to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// Appended to the output verbatim.
    Keep,
    /// A package declaration after the first one.
    DropPackage,
    /// An import already emitted earlier in the run.
    DropDuplicateImport,
    /// Opener or closer of an import block.
    DropDelimiter,
}

/// Per-file state machine: either in normal mode or inside an import block.
///
/// A fresh filter is created for every file, so an unterminated block never
/// leaks into the next one.
#[derive(Debug)]
pub struct LineFilter<'a> {
    profile: &'a LanguageProfile,
    in_import_block: bool,
}

impl<'a> LineFilter<'a> {
    pub fn new(profile: &'a LanguageProfile) -> Self {
        Self {
            profile,
            in_import_block: false,
        }
    }

    pub fn in_import_block(&self) -> bool {
        self.in_import_block
    }

    /// Classify `line` against the run-wide `state`, updating both.
    pub fn classify(&mut self, line: &str, state: &mut RunState) -> LineAction {
        let trimmed = line.trim();

        if self.profile.is_package_line(trimmed) {
            return if state.claim_package() {
                LineAction::Keep
            } else {
                LineAction::DropPackage
            };
        }

        if self.profile.is_block_opener(trimmed) {
            self.in_import_block = true;
            return LineAction::DropDelimiter;
        }

        if self.profile.is_import_line(trimmed) {
            return dedupe_import(trimmed, state);
        }

        if self.in_import_block {
            if self.profile.is_block_closer(trimmed) {
                self.in_import_block = false;
                return LineAction::DropDelimiter;
            }
            return dedupe_import(trimmed, state);
        }

        LineAction::Keep
    }
}

fn dedupe_import(trimmed: &str, state: &mut RunState) -> LineAction {
    if state.record_import(trimmed) {
        LineAction::Keep
    } else {
        LineAction::DropDuplicateImport
    }
}

/// Filter the full text of one file into `buffer`.
///
/// Retained lines keep their original indentation and line terminator.
pub fn filter_file(
    content: &str,
    profile: &LanguageProfile,
    state: &mut RunState,
    buffer: &mut OutputBuffer,
) -> FileOutcome {
    let mut filter = LineFilter::new(profile);
    let mut outcome = FileOutcome::default();

    for line in content.split_inclusive('\n') {
        match filter.classify(line, state) {
            LineAction::Keep => {
                buffer.push(line);
                outcome.lines_retained += 1;
            }
            LineAction::DropPackage => outcome.package_lines_dropped += 1,
            LineAction::DropDuplicateImport => outcome.duplicate_imports += 1,
            LineAction::DropDelimiter => {}
        }
    }

    outcome
}
