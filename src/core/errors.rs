//! GOVDIR-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, GovDirError>;

/// Top-level error type for the government directory toolkit.
///
/// There is deliberately no retry taxonomy here: every operation is
/// synchronous, deterministic, and local.
#[derive(Debug, Error)]
pub enum GovDirError {
    #[error("[GOVDIR-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[GOVDIR-1002] missing configuration file: {}", path.display())]
    MissingConfig { path: PathBuf },

    #[error("[GOVDIR-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[GOVDIR-2001] fixture parse failure for {source_name}: {details}")]
    FixtureParse {
        source_name: String,
        details: String,
    },

    #[error("[GOVDIR-2002] fixture shape error: {details}")]
    FixtureShape { details: String },

    #[error("[GOVDIR-2003] fixture validation failed: {error_count} error(s), first: {first}")]
    FixtureInvalid { error_count: usize, first: String },

    #[error("[GOVDIR-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[GOVDIR-3002] IO failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GovDirError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "GOVDIR-1001",
            Self::MissingConfig { .. } => "GOVDIR-1002",
            Self::ConfigParse { .. } => "GOVDIR-1003",
            Self::FixtureParse { .. } => "GOVDIR-2001",
            Self::FixtureShape { .. } => "GOVDIR-2002",
            Self::FixtureInvalid { .. } => "GOVDIR-2003",
            Self::Serialization { .. } => "GOVDIR-2101",
            Self::Io { .. } => "GOVDIR-3002",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for GovDirError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for GovDirError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<GovDirError> {
        vec![
            GovDirError::InvalidConfig {
                details: String::new(),
            },
            GovDirError::MissingConfig {
                path: PathBuf::new(),
            },
            GovDirError::ConfigParse {
                context: "",
                details: String::new(),
            },
            GovDirError::FixtureParse {
                source_name: String::new(),
                details: String::new(),
            },
            GovDirError::FixtureShape {
                details: String::new(),
            },
            GovDirError::FixtureInvalid {
                error_count: 0,
                first: String::new(),
            },
            GovDirError::Serialization {
                context: "",
                details: String::new(),
            },
            GovDirError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other("test"),
            },
        ]
    }

    #[test]
    fn error_codes_are_unique() {
        let codes: Vec<&str> = all_variants().iter().map(GovDirError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
    }

    #[test]
    fn error_codes_have_govdir_prefix() {
        for err in &all_variants() {
            assert!(
                err.code().starts_with("GOVDIR-"),
                "code {} must start with GOVDIR-",
                err.code()
            );
        }
    }

    #[test]
    fn error_display_includes_code() {
        let err = GovDirError::FixtureShape {
            details: "expected an array of regions".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("GOVDIR-2002"),
            "display should contain error code: {msg}"
        );
        assert!(
            msg.contains("expected an array of regions"),
            "display should contain details: {msg}"
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = GovDirError::io(
            "/tmp/legislative.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "GOVDIR-3002");
        assert!(err.to_string().contains("/tmp/legislative.json"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: GovDirError = json_err.into();
        assert_eq!(err.code(), "GOVDIR-2101");
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= invalid").unwrap_err();
        let err: GovDirError = toml_err.into();
        assert_eq!(err.code(), "GOVDIR-1003");
    }
}
