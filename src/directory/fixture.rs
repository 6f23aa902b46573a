//! Fixture loading and validation for the legislative directory.
//!
//! Validation policy: structural errors (non-array top level, entries without
//! a usable slug, duplicate slugs) are caught at load time; shape drift inside
//! grid arrays (an official without a name, a committee without a chairperson)
//! is reported as a warning and degrades gracefully at render time.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::core::errors::{GovDirError, Result};
use crate::directory::model::ChamberRecord;

/// Compiled-in default fixture.
const BUNDLED_LEGISLATIVE: &str = include_str!("../../data/legislative.json");

/// Severity of a fixture finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Fixture is unusable as authored; load fails when validation is on.
    Error,
    /// Renderable, but a grid entry will be skipped or rendered with gaps.
    Warning,
}

/// One finding from fixture validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureIssue {
    /// Finding severity.
    pub severity: IssueSeverity,
    /// JSON-pointer-style location of the finding.
    pub location: String,
    /// Human-readable description.
    pub message: String,
}

impl FixtureIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
        };
        write!(f, "{tag}: {}: {}", self.location, self.message)
    }
}

/// The loaded chamber collection, in fixture order.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    chambers: Vec<ChamberRecord>,
}

impl Directory {
    /// Load the compiled-in legislative fixture.
    pub fn load_bundled(validate: bool) -> Result<Self> {
        let (directory, issues) = Self::parse_with_report(BUNDLED_LEGISLATIVE, "bundled")?;
        enforce(validate, &issues)?;
        Ok(directory)
    }

    /// Parse the compiled-in fixture and return the full validation report.
    pub fn bundled_with_report() -> Result<(Self, Vec<FixtureIssue>)> {
        Self::parse_with_report(BUNDLED_LEGISLATIVE, "bundled")
    }

    /// Load a fixture from disk.
    pub fn load_from_path(path: &Path, validate: bool) -> Result<Self> {
        let (directory, issues) = Self::load_path_with_report(path)?;
        enforce(validate, &issues)?;
        Ok(directory)
    }

    /// Load from disk and return the full validation report alongside.
    pub fn load_path_with_report(path: &Path) -> Result<(Self, Vec<FixtureIssue>)> {
        let raw = fs::read_to_string(path).map_err(|source| GovDirError::io(path, source))?;
        Self::parse_with_report(&raw, &path.display().to_string())
    }

    /// Parse a fixture string and report every finding.
    ///
    /// Only catastrophic problems (invalid JSON, non-array top level) return
    /// `Err`; authoring problems are reported as issues so callers can decide.
    pub fn parse_with_report(raw: &str, source_name: &str) -> Result<(Self, Vec<FixtureIssue>)> {
        let parsed: Value =
            serde_json::from_str(raw).map_err(|error| GovDirError::FixtureParse {
                source_name: source_name.to_string(),
                details: error.to_string(),
            })?;

        let Value::Array(entries) = parsed else {
            return Err(GovDirError::FixtureShape {
                details: format!("{source_name}: expected a top-level array of chamber records"),
            });
        };

        let mut issues = Vec::new();
        let mut chambers: Vec<ChamberRecord> = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let location = format!("/{index}");

            if !entry.is_object() {
                issues.push(FixtureIssue::error(&location, "entry is not an object"));
                continue;
            }

            match serde_json::from_value::<ChamberRecord>(entry) {
                Ok(record) => {
                    if record.slug.trim().is_empty() {
                        issues.push(FixtureIssue::error(&location, "slug is empty"));
                        continue;
                    }
                    if chambers.iter().any(|c| c.slug == record.slug) {
                        issues.push(FixtureIssue::error(
                            format!("{location}/slug"),
                            format!("duplicate slug {:?}", record.slug),
                        ));
                        continue;
                    }
                    lint_record(&record, &mut issues);
                    chambers.push(record);
                }
                Err(error) => {
                    issues.push(FixtureIssue::error(&location, error.to_string()));
                }
            }
        }

        Ok((Self { chambers }, issues))
    }

    /// All chambers in fixture order.
    #[must_use]
    pub fn chambers(&self) -> &[ChamberRecord] {
        &self.chambers
    }

    /// Exact-match slug lookup. Absence is a normal result, not an error.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&ChamberRecord> {
        self.chambers.iter().find(|c| c.slug == slug)
    }

    /// First chamber whose display name contains `needle` (the original
    /// committees page selects the Senate this way).
    #[must_use]
    pub fn find_chamber_containing(&self, needle: &str) -> Option<&ChamberRecord> {
        self.chambers.iter().find(|c| c.chamber.contains(needle))
    }
}

fn enforce(validate: bool, issues: &[FixtureIssue]) -> Result<()> {
    if !validate {
        return Ok(());
    }
    let errors: Vec<&FixtureIssue> = issues
        .iter()
        .filter(|i| i.severity == IssueSeverity::Error)
        .collect();
    if let Some(first) = errors.first() {
        return Err(GovDirError::FixtureInvalid {
            error_count: errors.len(),
            first: first.to_string(),
        });
    }
    Ok(())
}

/// Walk a record's body and flag grid entries the specialized renderers would
/// have to skip. Section keys propagate through plain nested arrays the same
/// way the renderer propagates them.
fn lint_record(record: &ChamberRecord, issues: &mut Vec<FixtureIssue>) {
    for (key, value) in &record.body {
        lint_value(&format!("/{}/{key}", record.slug), key, value, issues);
    }
}

fn lint_value(location: &str, section_key: &str, value: &Value, issues: &mut Vec<FixtureIssue>) {
    match value {
        Value::Array(items) => match section_key {
            "officials" | "secretariat_officials" => {
                for (index, item) in items.iter().enumerate() {
                    lint_grid_entry(
                        &format!("{location}/{index}"),
                        item,
                        &["role", "name"],
                        "official",
                        issues,
                    );
                }
            }
            "permanent_committees" => {
                for (index, item) in items.iter().enumerate() {
                    lint_grid_entry(
                        &format!("{location}/{index}"),
                        item,
                        &["committee", "chairperson"],
                        "committee",
                        issues,
                    );
                }
            }
            _ => {
                for (index, item) in items.iter().enumerate() {
                    lint_value(&format!("{location}/{index}"), section_key, item, issues);
                }
            }
        },
        Value::Object(map) => {
            for (key, nested) in map {
                lint_value(&format!("{location}/{key}"), key, nested, issues);
            }
        }
        _ => {}
    }
}

fn lint_grid_entry(
    location: &str,
    item: &Value,
    required: &[&str],
    kind: &str,
    issues: &mut Vec<FixtureIssue>,
) {
    let Value::Object(map) = item else {
        issues.push(FixtureIssue::warning(
            location,
            format!("{kind} entry is not an object and will be skipped"),
        ));
        return;
    };
    for field in required {
        if !map.get(*field).is_some_and(|v| v.is_string()) {
            issues.push(FixtureIssue::warning(
                location,
                format!("{kind} entry is missing string field {field:?}"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_fixture_loads_clean() {
        let directory = Directory::load_bundled(true).expect("bundled fixture must validate");
        assert!(directory.find("senate").is_some());
        assert!(directory.find("house-of-representatives").is_some());
    }

    #[test]
    fn lookup_miss_is_none_not_error() {
        let directory = Directory::load_bundled(true).expect("load");
        assert!(directory.find("nonexistent-chamber").is_none());
    }

    #[test]
    fn chamber_containing_selects_senate() {
        let directory = Directory::load_bundled(true).expect("load");
        let senate = directory.find_chamber_containing("Senate").expect("senate");
        assert_eq!(senate.slug, "senate");
    }

    #[test]
    fn duplicate_slug_is_a_load_error() {
        let raw = r#"[
            {"slug": "senate", "chamber": "Senate"},
            {"slug": "senate", "chamber": "Senate Again"}
        ]"#;
        let (directory, issues) = Directory::parse_with_report(raw, "test").expect("parse");
        assert_eq!(directory.chambers().len(), 1);
        assert!(
            issues
                .iter()
                .any(|i| i.severity == IssueSeverity::Error && i.message.contains("duplicate"))
        );
        assert!(enforce(true, &issues).is_err());
        assert!(enforce(false, &issues).is_ok());
    }

    #[test]
    fn non_array_top_level_is_catastrophic() {
        let err = Directory::parse_with_report("{}", "test").unwrap_err();
        assert_eq!(err.code(), "GOVDIR-2002");
    }

    #[test]
    fn invalid_json_is_catastrophic() {
        let err = Directory::parse_with_report("not json", "test").unwrap_err();
        assert_eq!(err.code(), "GOVDIR-2001");
    }

    #[test]
    fn malformed_official_is_a_warning() {
        let raw = r#"[{
            "slug": "senate",
            "chamber": "Senate",
            "officials": [{"role": "President"}, "not an object"]
        }]"#;
        let (_, issues) = Directory::parse_with_report(raw, "test").expect("parse");
        let warnings: Vec<&FixtureIssue> = issues
            .iter()
            .filter(|i| i.severity == IssueSeverity::Warning)
            .collect();
        assert_eq!(warnings.len(), 2, "one missing name, one non-object");
        assert!(enforce(true, &issues).is_ok(), "warnings never block load");
    }

    #[test]
    fn committee_lint_reaches_nested_arrays() {
        let raw = r#"[{
            "slug": "senate",
            "chamber": "Senate",
            "groups": {
                "permanent_committees": [{"committee": "Finance"}]
            }
        }]"#;
        let (_, issues) = Directory::parse_with_report(raw, "test").expect("parse");
        assert!(
            issues
                .iter()
                .any(|i| i.message.contains("chairperson") && i.location.contains("/groups/")),
            "nested committee lint missing: {issues:?}"
        );
    }

    #[test]
    fn entry_without_slug_is_an_error() {
        let raw = r#"[{"chamber": "Senate"}]"#;
        let (directory, issues) = Directory::parse_with_report(raw, "test").expect("parse");
        assert!(directory.chambers().is_empty());
        assert!(issues.iter().any(|i| i.severity == IssueSeverity::Error));
    }
}
