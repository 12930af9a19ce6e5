//! Owned markdown document tree built on pulldown-cmark.
//!
//! pulldown-cmark produces a flat event stream. This crate folds that stream
//! into a [`Node`] tree so transforms can work on whole nodes (a link together
//! with its children) instead of matching `Start`/`End` pairs by hand.
//!
//! # Architecture
//!
//! - [`parse`]: markdown text to a [`Node`] tree (with source byte positions)
//! - [`map`]: pre-order tree walker producing a new tree
//! - [`render_html`]: flattens the tree back to events and renders HTML
//!
//! # Example
//!
//! ```
//! use replink_tree::{NodeKind, map, parse, parser_options, render_html};
//!
//! let tree = parse("[docs](https://example.com)", parser_options());
//! let tree = map(tree, |mut node, _index, _parent| {
//!     if let NodeKind::Link { url, .. } = &mut node.kind {
//!         *url = "https://example.org".into();
//!     }
//!     Ok::<_, std::convert::Infallible>(node)
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     render_html(tree),
//!     "<p><a href=\"https://example.org\">docs</a></p>\n"
//! );
//! ```

mod node;
mod parse;
mod render;
mod util;
mod walk;

pub use node::{Node, NodeKind};
pub use parse::{parse, parser_options};
pub use pulldown_cmark::{CowStr, LinkType};
pub use render::{into_events, render_html};
pub use util::escape_html;
pub use walk::map;
