//! Display tree produced by the directory renderer.
//!
//! Nodes are plain owned data: serializable for the CLI's JSON mode and
//! structurally comparable for idempotence tests. Presentation (terminal
//! styling, truncation) lives in [`crate::render::text`].

#![allow(missing_docs)]

use serde::Serialize;

/// One rendered display node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// Stringified scalar.
    Text { text: String },
    /// A `mailto:` link with an accessible "Email" label.
    Email { address: String },
    /// Card grid of officials.
    OfficialsGrid { cards: Vec<OfficialCard> },
    /// Card grid of committees.
    CommitteesGrid { cards: Vec<CommitteeCard> },
    /// Leaf key-value form from a simple object.
    KeyValueBlock {
        entries: Vec<KeyValueEntry>,
        /// Heavier layout emphasis, applied exactly at nesting level 1.
        emphasized: bool,
    },
    /// Generic array: elements in input order.
    List {
        items: Vec<RenderNode>,
        /// Indented/bordered container, applied below the top level.
        indented: bool,
    },
    /// Labeled sections of an object with nested values.
    SectionGroup { sections: Vec<Section> },
    /// Suppressed output (everything was filtered away).
    Empty,
}

/// A labeled section inside a [`RenderNode::SectionGroup`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Original fixture key (drives specialized dispatch for the body).
    pub key: String,
    /// Derived human-readable heading.
    pub label: String,
    /// Element count badge; present iff the value is an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Rendered section body.
    pub body: RenderNode,
}

/// One card in an officials grid. `contact` is already sentinel-filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficialCard {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// One card in a committees grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitteeCard {
    pub title: String,
    pub chairperson: String,
}

/// One entry of a key-value block: the value is either text or an email link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: RenderNode,
}

impl RenderNode {
    /// True for nodes that produce no visible output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Shorthand for a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}
