//! Terminal presentation of the display tree.
//!
//! Styling only — section structure, filtering, and counts are all decided by
//! the renderer. Output is plain `String` so it can be snapshot-tested with
//! color disabled.

use std::fmt::Write as _;

use colored::Colorize;

use crate::core::config::RenderConfig;
use crate::render::node::{KeyValueEntry, RenderNode};
use crate::render::renderer::{ChamberView, PageView};

/// Render a page result for the terminal.
#[must_use]
pub fn format_page(page: &PageView, cfg: &RenderConfig) -> String {
    match page {
        PageView::Chamber(view) => format_chamber(view, cfg),
        PageView::NotFound { slug } => {
            let mut out = String::new();
            let _ = writeln!(out, "{}", "Chamber Not Found".bold());
            let _ = writeln!(
                out,
                "The requested legislative chamber could not be found: {slug}"
            );
            out
        }
    }
}

/// Render a chamber view: header template, then the body tree.
#[must_use]
pub fn format_chamber(view: &ChamberView, cfg: &RenderConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.header.chamber.bold());
    if let Some(branch) = &view.header.branch {
        let _ = writeln!(out, "{}", format!("{branch} Branch").dimmed());
    }
    if let Some(address) = &view.header.address {
        let _ = writeln!(out, "  {address}");
    }
    if let Some(trunkline) = &view.header.trunkline {
        let _ = writeln!(out, "  {trunkline}");
    }
    if let Some(website) = &view.header.website {
        let _ = writeln!(out, "  {} <{}>", website.label, website.url.underline());
    }

    format_node(&mut out, &view.body, 0, cfg);
    out
}

fn indent(cfg: &RenderConfig, depth: usize) -> String {
    " ".repeat(cfg.indent * depth)
}

fn format_node(out: &mut String, node: &RenderNode, depth: usize, cfg: &RenderConfig) {
    match node {
        RenderNode::Empty => {}
        RenderNode::Text { text } => {
            let _ = writeln!(out, "{}{text}", indent(cfg, depth));
        }
        RenderNode::Email { address } => {
            let _ = writeln!(out, "{}Email: {address}", indent(cfg, depth));
        }
        RenderNode::KeyValueBlock { entries, emphasized } => {
            for entry in entries {
                format_key_value(out, entry, depth, *emphasized, cfg);
            }
        }
        RenderNode::List { items, indented } => {
            let child_depth = depth + usize::from(*indented);
            for item in items {
                format_node(out, item, child_depth, cfg);
            }
        }
        RenderNode::SectionGroup { sections } => {
            for section in sections {
                let _ = writeln!(out);
                let heading = section.label.bold();
                match section.count {
                    Some(count) => {
                        let badge = format!("[{count}]").dimmed();
                        let _ = writeln!(out, "{}{heading} {badge}", indent(cfg, depth));
                    }
                    None => {
                        let _ = writeln!(out, "{}{heading}", indent(cfg, depth));
                    }
                }
                format_node(out, &section.body, depth + 1, cfg);
            }
        }
        RenderNode::OfficialsGrid { cards } => {
            for card in cards {
                let pad = indent(cfg, depth);
                let _ = writeln!(out, "{pad}* {}  {}", card.name.bold(), card.role);
                if let Some(office) = &card.office {
                    for line in clamp_two_lines(office, cfg.clamp_width) {
                        let _ = writeln!(out, "{pad}  {}", line.dimmed());
                    }
                }
                if let Some(contact) = &card.contact {
                    let _ = writeln!(out, "{pad}  tel: {contact}");
                }
            }
        }
        RenderNode::CommitteesGrid { cards } => {
            for card in cards {
                let pad = indent(cfg, depth);
                let title_lines = clamp_two_lines(&card.title, cfg.clamp_width);
                let mut lines = title_lines.iter();
                if let Some(first) = lines.next() {
                    let _ = writeln!(out, "{pad}* {}", first.bold());
                }
                for rest in lines {
                    let _ = writeln!(out, "{pad}  {}", rest.bold());
                }
                let _ = writeln!(out, "{pad}  Chairperson: {}", card.chairperson);
            }
        }
    }
}

fn format_key_value(
    out: &mut String,
    entry: &KeyValueEntry,
    depth: usize,
    emphasized: bool,
    cfg: &RenderConfig,
) {
    let pad = indent(cfg, depth);
    match &entry.value {
        RenderNode::Email { address } => {
            let _ = writeln!(out, "{pad}Email: {address}");
        }
        RenderNode::Text { text } => {
            if emphasized {
                let _ = writeln!(out, "{pad}{}", text.bold());
            } else {
                let _ = writeln!(out, "{pad}{text}");
            }
        }
        other => format_node(out, other, depth, cfg),
    }
}

/// Greedy word-wrap clamped to two lines, ellipsizing overflow — the
/// terminal analogue of the original's `line-clamp-2`.
#[must_use]
pub fn clamp_two_lines(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::with_capacity(2);
    let mut current = String::new();

    for word in text.split_whitespace() {
        let fits = current.is_empty() || current.chars().count() + 1 + word.chars().count() <= width;
        if fits {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if lines.is_empty() {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            // Third line would start here: trim the second into budget,
            // ellipsize, and stop.
            while current.chars().count() + 1 > width {
                current.pop();
            }
            while current.ends_with(' ') {
                current.pop();
            }
            current.push('\u{2026}');
            break;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
