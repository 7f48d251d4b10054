//! Generator configuration.
//!
//! Two wire-compatibility switches control how the generator behaves where
//! the legacy generator and the framing rules disagree:
//!
//! ```toml
//! # "computed" (default): every length field is the true body size.
//! # "legacy": DATA records and data-only RPCs always declare 11 bytes.
//! length_policy = "computed"
//!
//! # "reject" (default): strings over 255 bytes fail the whole batch.
//! # "truncate": such strings are cut to 255 bytes on a UTF-8 boundary.
//! string_overflow = "reject"
//! ```
//!
//! Absent keys fall back to their defaults, so an empty file is a valid
//! configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How record length fields are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Declare the exact number of bytes that follow the tag.
    #[default]
    Computed,
    /// Declare [`crate::protocol::messages::LEGACY_FIXED_LEN`] for DATA records
    /// and data-only RPCs, as older receivers expect.
    Legacy,
}

/// What to do with a string longer than its 1-byte length prefix allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringOverflow {
    /// Fail generation with [`crate::GenerateError::StringTooLong`].
    #[default]
    Reject,
    /// Keep the longest UTF-8 prefix of at most 255 bytes and report a
    /// diagnostic.
    Truncate,
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub length_policy: LengthPolicy,
    #[serde(default)]
    pub string_overflow: StringOverflow,
}

impl GeneratorConfig {
    /// Configuration reproducing the legacy generator byte for byte.
    pub fn legacy() -> Self {
        Self {
            length_policy: LengthPolicy::Legacy,
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML is malformed or names an
    /// unknown policy.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Loads a [`GeneratorConfig`] from `path`, returning the default
/// configuration if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => GeneratorConfig::from_toml_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GeneratorConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_computes_lengths_and_rejects_long_strings() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.length_policy, LengthPolicy::Computed);
        assert_eq!(cfg.string_overflow, StringOverflow::Reject);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg = GeneratorConfig::from_toml_str("").expect("empty config is valid");
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn test_toml_selects_legacy_and_truncate() {
        let cfg = GeneratorConfig::from_toml_str(
            "length_policy = \"legacy\"\nstring_overflow = \"truncate\"\n",
        )
        .expect("valid config");
        assert_eq!(cfg.length_policy, LengthPolicy::Legacy);
        assert_eq!(cfg.string_overflow, StringOverflow::Truncate);
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let result = GeneratorConfig::from_toml_str("length_policy = \"guess\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_legacy_constructor_only_changes_length_policy() {
        let cfg = GeneratorConfig::legacy();
        assert_eq!(cfg.length_policy, LengthPolicy::Legacy);
        assert_eq!(cfg.string_overflow, StringOverflow::Reject);
    }

    #[test]
    fn test_load_config_missing_file_returns_default() {
        let path = std::env::temp_dir().join("among-core-config-that-does-not-exist.toml");
        let cfg = load_config(&path).expect("missing file falls back to defaults");
        assert_eq!(cfg, GeneratorConfig::default());
    }

    #[test]
    fn test_load_config_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "among-core-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "length_policy = \"legacy\"\n").expect("write temp config");

        let cfg = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(cfg.expect("valid file").length_policy, LengthPolicy::Legacy);
    }
}
