//! Directory data model: chamber records, officials, committees.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contact value meaning "no contact on record" in upstream fixtures.
pub const NO_CONTACT_SENTINEL: &str = "__";

/// Fixed header fields displayed by the page header template, never by the
/// recursive body renderer.
pub const HEADER_KEYS: [&str; 6] = [
    "slug",
    "branch",
    "chamber",
    "address",
    "trunkline",
    "website",
];

/// One legislative chamber entry.
///
/// Beyond the fixed header fields there is no schema: every remaining field
/// is captured in `body` in fixture order and rendered generically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChamberRecord {
    /// Unique lookup key; excluded from all rendered output.
    pub slug: String,
    /// Display name of the chamber.
    pub chamber: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunkline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Everything else: arbitrary-depth scalars, objects, and sequences.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl ChamberRecord {
    /// Website URL with a scheme, for link rendering. Fixtures often carry
    /// bare hosts like `senate.gov.ph`.
    #[must_use]
    pub fn website_url(&self) -> Option<String> {
        self.website.as_deref().map(|site| {
            if site.starts_with("http") {
                site.to_string()
            } else {
                format!("https://{site}")
            }
        })
    }
}

/// An official as found under `officials` / `secretariat_officials` arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Official {
    pub role: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
}

impl Official {
    /// Contact value with the `"__"` sentinel mapped to absent.
    #[must_use]
    pub fn contact_display(&self) -> Option<&str> {
        self.contact
            .as_deref()
            .filter(|c| *c != NO_CONTACT_SENTINEL && !c.is_empty())
    }
}

/// A permanent committee with its chairperson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Committee {
    pub committee: String,
    pub chairperson: String,
}

/// Exact-match header-key test, shared by renderer and validator.
#[must_use]
pub fn is_header_key(key: &str) -> bool {
    HEADER_KEYS.contains(&key)
}
