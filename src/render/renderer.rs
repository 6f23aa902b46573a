//! Recursive directory renderer: schema-agnostic JSON → display tree.
//!
//! `render_value` is a pure function of `(data, level, section_key)`. A
//! bound section key dispatches at the first array encountered beneath it;
//! generic arrays pass the key down unchanged.

use serde_json::{Map, Value};

use serde::Serialize;

use crate::directory::fixture::Directory;
use crate::directory::model::{ChamberRecord, Committee, Official, is_header_key};
use crate::render::classify::{JsonClass, classify};
use crate::render::label::humanize_key;
use crate::render::node::{
    CommitteeCard, KeyValueEntry, OfficialCard, RenderNode, Section,
};
use crate::render::registry::{SectionRegistry, SectionRenderer};

/// Fixed header block rendered above the recursive body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChamberHeader {
    /// Chamber display name.
    pub chamber: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trunkline: Option<String>,
    /// Website link, normalized to carry a scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteLink>,
}

/// Displayed website text plus the normalized href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteLink {
    pub label: String,
    pub url: String,
}

/// A fully rendered chamber page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChamberView {
    /// Header template fields.
    pub header: ChamberHeader,
    /// Recursive body at level 0.
    pub body: RenderNode,
}

/// Result of a slug lookup + render. Not-found is a render state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    /// A chamber matched the slug.
    Chamber(ChamberView),
    /// No chamber carries this slug.
    NotFound {
        /// The slug that missed.
        slug: String,
    },
}

/// The renderer; holds only the section-renderer registry.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRenderer {
    registry: SectionRegistry,
}

impl DirectoryRenderer {
    /// Renderer with a custom registry (extra grid bindings).
    #[must_use]
    pub fn with_registry(registry: SectionRegistry) -> Self {
        Self { registry }
    }

    /// Look up `slug` and render the page, or the not-found state.
    #[must_use]
    pub fn render_page(&self, directory: &Directory, slug: &str) -> PageView {
        directory.find(slug).map_or_else(
            || PageView::NotFound {
                slug: slug.to_string(),
            },
            |record| PageView::Chamber(self.render_chamber(record)),
        )
    }

    /// Render one chamber: fixed header plus recursive body.
    #[must_use]
    pub fn render_chamber(&self, record: &ChamberRecord) -> ChamberView {
        let header = ChamberHeader {
            chamber: record.chamber.clone(),
            branch: record.branch.clone(),
            address: record.address.clone(),
            trunkline: record.trunkline.clone(),
            website: record.website_url().map(|url| WebsiteLink {
                label: record.website.clone().unwrap_or_default(),
                url,
            }),
        };
        let body = self.render_value(&Value::Object(record.body.clone()), 0, "");
        ChamberView { header, body }
    }

    /// Recursive dispatch over one JSON value.
    #[must_use]
    pub fn render_value(&self, data: &Value, level: usize, section_key: &str) -> RenderNode {
        match classify(data) {
            JsonClass::Scalar(value) => RenderNode::Text {
                text: scalar_text(value),
            },
            JsonClass::Array(items) => match self.registry.lookup(section_key) {
                SectionRenderer::Officials => officials_grid(items),
                SectionRenderer::Committees => committees_grid(items),
                SectionRenderer::Generic => RenderNode::List {
                    items: items
                        .iter()
                        .map(|item| self.render_value(item, level + 1, section_key))
                        .collect(),
                    indented: level > 0,
                },
            },
            JsonClass::SimpleObject(map) => key_value_block(map, level),
            JsonClass::SectionGroup(map) => self.section_group(map, level),
        }
    }

    fn section_group(&self, map: &Map<String, Value>, level: usize) -> RenderNode {
        let entries: Vec<(&String, &Value)> =
            map.iter().filter(|(key, _)| !is_header_key(key)).collect();

        if entries.is_empty() {
            return RenderNode::Empty;
        }

        let sections = entries
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| Section {
                key: key.clone(),
                label: humanize_key(key),
                count: value.as_array().map(Vec::len),
                body: self.render_value(value, level + 1, key),
            })
            .collect();

        RenderNode::SectionGroup { sections }
    }
}

/// Stringify a scalar the way the original page does (`String(data)`).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JS-truthiness for the email special case.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn key_value_block(map: &Map<String, Value>, level: usize) -> RenderNode {
    let entries = map
        .iter()
        .filter(|(key, _)| !is_header_key(key))
        .map(|(key, value)| {
            let rendered = if key == "email" && is_truthy(value) {
                RenderNode::Email {
                    address: scalar_text(value),
                }
            } else {
                RenderNode::Text {
                    text: scalar_text(value),
                }
            };
            KeyValueEntry {
                key: key.clone(),
                value: rendered,
            }
        })
        .collect();

    RenderNode::KeyValueBlock {
        entries,
        emphasized: level == 1,
    }
}

/// Officials leaf renderer. Non-conforming entries are skipped (fixture lint
/// reports them as warnings at load time).
fn officials_grid(items: &[Value]) -> RenderNode {
    let cards = items
        .iter()
        .filter_map(|item| serde_json::from_value::<Official>(item.clone()).ok())
        .map(|official| OfficialCard {
            contact: official.contact_display().map(str::to_string),
            name: official.name,
            role: official.role,
            office: official.office,
        })
        .collect();
    RenderNode::OfficialsGrid { cards }
}

/// Committees leaf renderer, same skip policy as officials.
fn committees_grid(items: &[Value]) -> RenderNode {
    let cards = items
        .iter()
        .filter_map(|item| serde_json::from_value::<Committee>(item.clone()).ok())
        .map(|committee| CommitteeCard {
            title: committee.committee,
            chairperson: committee.chairperson,
        })
        .collect();
    RenderNode::CommitteesGrid { cards }
}
