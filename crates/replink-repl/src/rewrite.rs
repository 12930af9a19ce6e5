//! Link node rewriting.

use std::fmt::Write;

use replink_tree::{Node, escape_html};

/// Build the anchor markup for a playground link.
///
/// With a `target`, the anchor also gets `rel="noreferrer"`; without one
/// neither attribute is present.
///
/// # Examples
///
/// ```
/// use replink_repl::anchor;
///
/// assert_eq!(anchor("/x", "Try", None), r#"<a href="/x">Try</a>"#);
/// assert_eq!(
///     anchor("/x", "Try", Some("_blank")),
///     r#"<a href="/x" target="_blank" rel="noreferrer">Try</a>"#
/// );
/// ```
#[must_use]
pub fn anchor(href: &str, text: &str, target: Option<&str>) -> String {
    let mut html = String::with_capacity(href.len() + text.len() + 48);
    let _ = write!(html, r#"<a href="{}""#, escape_html(href));
    if let Some(target) = target {
        let _ = write!(html, r#" target="{}" rel="noreferrer""#, escape_html(target));
    }
    let _ = write!(html, ">{}</a>", escape_html(text));
    html
}

/// Link text: the text of the link's first child, or `default_text` when the
/// link has no children or that text is empty.
#[must_use]
pub fn display_text(link: &Node<'_>, default_text: &str) -> String {
    link.children
        .first()
        .map(Node::text_content)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| default_text.to_owned())
}

/// Replace a link node with a raw HTML anchor.
///
/// The returned node carries only the anchor markup: the link's URL, title,
/// children and source position are all dropped.
#[must_use]
pub fn rewrite_link<'a>(link: Node<'a>, href: &str, text: &str, target: Option<&str>) -> Node<'a> {
    drop(link);
    Node::raw_html(anchor(href, text, target))
}
