//! Markdown text to [`Node`] tree.
//!
//! Folds pulldown-cmark's offset event stream into a tree with a stack of open
//! containers: `Start` pushes, `End` pops and attaches the finished node to
//! its parent, every other event becomes a leaf of the innermost open node.

use pulldown_cmark::{Event, Options, Parser, TextMergeWithOffset};

use crate::node::{Node, NodeKind};

/// Parser options used by default (GitHub Flavored Markdown).
#[must_use]
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Parse markdown text into a document tree.
///
/// Every node keeps the byte range of its source in `position`; the root spans
/// the whole input. Adjacent text (split by the parser at entities, escapes
/// and stray brackets) becomes a single `Text` node.
#[must_use]
pub fn parse(markdown: &str, options: Options) -> Node<'_> {
    let mut root = Node::new(NodeKind::Root, Some(0..markdown.len()));
    let mut open: Vec<Node<'_>> = Vec::new();

    let events = TextMergeWithOffset::new(Parser::new_ext(markdown, options).into_offset_iter());

    for (event, range) in events {
        match event {
            Event::Start(tag) => open.push(Node::new(NodeKind::from_tag(tag), Some(range))),
            Event::End(_) => {
                if let Some(node) = open.pop() {
                    attach(&mut root, &mut open, node);
                }
            }
            Event::Text(text) => {
                attach(&mut root, &mut open, Node::new(NodeKind::Text(text), Some(range)));
            }
            Event::InlineHtml(html) => {
                attach(&mut root, &mut open, Node::new(NodeKind::RawHtml(html), Some(range)));
            }
            other => attach(&mut root, &mut open, Node::new(NodeKind::Event(other), Some(range))),
        }
    }

    // pulldown-cmark always balances Start/End; close anything left open anyway
    while let Some(node) = open.pop() {
        attach(&mut root, &mut open, node);
    }

    root
}

/// Append a finished node to the innermost open container (or the root).
fn attach<'a>(root: &mut Node<'a>, open: &mut [Node<'a>], node: Node<'a>) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.children.push(node),
    }
}
