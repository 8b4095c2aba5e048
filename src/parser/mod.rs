//! # ADR Parser
//!
//! Turns one markdown file into a [`ParsedAdr`].
//!
//! ## Document Shape
//!
//! ```text
//! # 2. Use PostgreSQL            <- title (first level-1 heading)
//!
//! ## Status                      <- status heading
//!
//! Accepted                       <- status lines: paragraphs up to the
//!                                   next level-2 heading
//! Amended by [3](0003-x.md)
//!
//! ## Context
//! ...
//! ```
//!
//! A file without a level-1 heading is not an ADR and yields `None`.
//! Every hyperlink in the document goes through [`rewrite_link_target`]
//! before the tree is serialized to HTML.

mod links;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, parse_document, Arena, Options};

use crate::domain::{normalize_ref, AdrStatus, ParsedAdr};

pub use links::rewrite_link_target;

/// Heading text that opens the status section
const STATUS_HEADING: &str = "Status";

/// Heading level of the status section
const STATUS_LEVEL: u8 = 2;

/// Reads and parses an ADR file
pub fn parse_adr_file(path: &Path) -> Result<Option<ParsedAdr>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ADR file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_adr(&file_name, &content)
        .with_context(|| format!("Failed to parse ADR file: {}", path.display()))
}

/// Parses ADR markdown; `file_name` supplies the record ref
pub fn parse_adr(file_name: &str, markdown: &str) -> Result<Option<ParsedAdr>> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.escape = true;

    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &options);

    let Some(title) = root
        .descendants()
        .find(|node| heading_level(node) == Some(1))
        .map(node_text)
    else {
        return Ok(None);
    };

    let status = AdrStatus::classify(&status_lines(root));

    for node in root.descendants() {
        let mut ast = node.data.borrow_mut();
        if let NodeValue::Link(ref mut link) = ast.value {
            rewrite_link_target(&mut link.url);
        }
    }

    let mut html = Vec::new();
    format_html(root, &options, &mut html).context("Failed to render ADR as HTML")?;
    let body = String::from_utf8(html).context("Rendered ADR is not valid UTF-8")?;

    Ok(Some(ParsedAdr {
        adr_ref: normalize_ref(file_name),
        title,
        status,
        body,
    }))
}

/// Collects the paragraphs under the status heading.
///
/// The walk starts at the sibling after the heading and stops at the next
/// heading of the same level. Non-paragraph siblings are skipped.
fn status_lines<'a>(root: &'a AstNode<'a>) -> Vec<String> {
    let Some(heading) = root.descendants().find(|node| is_status_heading(node)) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut current = heading.next_sibling();

    while let Some(node) = current {
        match heading_level(node) {
            Some(STATUS_LEVEL) => break,
            Some(_) => {}
            None => {
                if matches!(node.data.borrow().value, NodeValue::Paragraph) {
                    lines.push(node_text(node));
                }
            }
        }
        current = node.next_sibling();
    }

    lines
}

fn is_status_heading<'a>(node: &'a AstNode<'a>) -> bool {
    heading_level(node) == Some(STATUS_LEVEL) && node_text(node) == STATUS_HEADING
}

fn heading_level<'a>(node: &'a AstNode<'a>) -> Option<u8> {
    match node.data.borrow().value {
        NodeValue::Heading(ref heading) => Some(heading.level),
        _ => None,
    }
}

/// Visible text of a node and everything under it
fn node_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();

    for child in node.descendants() {
        match child.data.borrow().value {
            NodeValue::Text(ref t) => text.push_str(t),
            NodeValue::Code(ref code) => text.push_str(&code.literal),
            NodeValue::HtmlInline(ref html) => text.push_str(html),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push('\n'),
            _ => {}
        }
    }

    text
}
