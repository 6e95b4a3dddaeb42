use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::Result;
use crate::language::{LanguageProfile, DEFAULT_EXTENSION};

/// Output file name used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "full-project.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Concatenate source files into a single snapshot, deduplicating package and import lines
#[derive(Parser, Debug, Clone)]
#[command(
    name = "source-bundler",
    about = "Concatenate source files into a single snapshot, deduplicating package and import lines",
    version
)]
pub struct Settings {
    /// Directory to scan recursively
    #[arg(default_value = ".")]
    pub source_dir: PathBuf,

    /// File the aggregated content is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// File extension to collect (with or without the leading dot)
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Keep raw directory-walk order instead of sorting paths
    #[arg(long)]
    pub unsorted: bool,

    /// Print the run report as JSON after completion
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply overrides.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os().collect())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_from_args(args: Vec<OsString>) -> Self {
        Self::resolve_overrides(Settings::parse_from(args))
    }

    /// Build the language profile selected by `--ext`.
    pub fn language_profile(&self) -> Result<LanguageProfile> {
        LanguageProfile::go().with_extension(&self.ext)
    }

    fn resolve_overrides(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BundleError;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["source-bundler"]);

        assert_eq!(settings.source_dir, PathBuf::from("."));
        assert_eq!(settings.output, PathBuf::from("full-project.txt"));
        assert_eq!(settings.ext, "go");
        assert!(!settings.follow_links);
        assert!(!settings.unsorted);
        assert!(!settings.json);
        assert_eq!(settings.log_level, "WARNING");
        assert!(!settings.debug);
    }

    #[test]
    fn test_settings_cli_source_and_output() {
        let settings = Settings::parse_from(["source-bundler", "src", "-o", "bundle.txt"]);
        assert_eq!(settings.source_dir, PathBuf::from("src"));
        assert_eq!(settings.output, PathBuf::from("bundle.txt"));
    }

    #[test]
    fn test_settings_cli_flags() {
        let settings = Settings::parse_from([
            "source-bundler",
            "--ext",
            ".rs",
            "--follow-links",
            "--unsorted",
            "--json",
        ]);
        assert_eq!(settings.ext, ".rs");
        assert!(settings.follow_links);
        assert!(settings.unsorted);
        assert!(settings.json);
    }

    #[test]
    fn test_settings_rejects_unknown_log_level() {
        let result = Settings::try_parse_from(["source-bundler", "--log-level", "TRACE"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_debug_overrides_log_level() {
        let settings =
            Settings::load_from_args(args(&["source-bundler", "--log-level", "ERROR", "--debug"]));
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_language_profile_from_ext() {
        let settings = Settings::parse_from(["source-bundler", "--ext", ".py"]);
        let profile = settings.language_profile().unwrap();
        assert_eq!(profile.extension, "py");
    }

    #[test]
    fn test_language_profile_invalid_ext() {
        let settings = Settings::parse_from(["source-bundler", "--ext", ""]);
        assert!(matches!(
            settings.language_profile(),
            Err(BundleError::InvalidExtension(_))
        ));
    }
}
