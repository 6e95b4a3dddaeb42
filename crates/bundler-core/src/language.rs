//! Per-language keywords used to recognise package and import declarations.

use std::path::Path;

use crate::error::{BundleError, Result};

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = "go";

/// Keywords and delimiters driving line classification for one language.
///
/// Matching is purely textual on trimmed lines; nothing here parses source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// File extension without the leading dot, e.g. `"go"`.
    pub extension: String,
    /// Keyword opening a package declaration.
    pub package_keyword: String,
    /// Keyword opening an import declaration.
    pub import_keyword: String,
    /// Token that, following the import keyword, opens a multi-line block.
    pub block_open: String,
    /// Line that closes a multi-line import block.
    pub block_close: String,
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::go()
    }
}

impl LanguageProfile {
    /// Go declarations: `package x`, `import "x"` and `import ( ... )`.
    pub fn go() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            package_keyword: "package".to_string(),
            import_keyword: "import".to_string(),
            block_open: "(".to_string(),
            block_close: ")".to_string(),
        }
    }

    /// Go keywords with a different file extension.
    ///
    /// A single leading dot is stripped, so `".go"` and `"go"` are equivalent.
    pub fn with_extension(mut self, extension: &str) -> Result<Self> {
        self.extension = normalize_extension(extension)?;
        Ok(self)
    }

    /// Returns `true` when the file name of `path` ends with `.<extension>`.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| {
                name.strip_suffix(self.extension.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
    }

    /// `package foo` style line.
    pub fn is_package_line(&self, trimmed: &str) -> bool {
        starts_with_keyword(trimmed, &self.package_keyword)
    }

    /// `import "foo"` style line. Also true for the block opener, so callers
    /// check [`Self::is_block_opener`] first.
    pub fn is_import_line(&self, trimmed: &str) -> bool {
        starts_with_keyword(trimmed, &self.import_keyword)
    }

    /// `import (` with or without the space.
    pub fn is_block_opener(&self, trimmed: &str) -> bool {
        trimmed
            .strip_prefix(self.import_keyword.as_str())
            .is_some_and(|rest| rest.trim_start() == self.block_open)
    }

    pub fn is_block_closer(&self, trimmed: &str) -> bool {
        trimmed == self.block_close
    }
}

fn starts_with_keyword(trimmed: &str, keyword: &str) -> bool {
    trimmed
        .strip_prefix(keyword)
        .is_some_and(|rest| rest.starts_with(' '))
}

fn normalize_extension(raw: &str) -> Result<String> {
    let ext = raw.trim();
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() || ext.contains(['/', '\\']) || ext.chars().any(char::is_whitespace) {
        return Err(BundleError::InvalidExtension(raw.to_string()));
    }
    Ok(ext.to_string())
}
