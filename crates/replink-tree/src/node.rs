//! Document tree node types.

use std::ops::Range;

use pulldown_cmark::{CowStr, Event, LinkType, Tag};

/// Kind of a document tree node.
///
/// Links get their own variant since they are what transforms look for; every
/// other container keeps its pulldown-cmark [`Tag`].
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind<'a> {
    /// Document root. Only appears at the top of a tree.
    Root,
    /// Inline link.
    Link {
        link_type: LinkType,
        url: CowStr<'a>,
        title: CowStr<'a>,
        id: CowStr<'a>,
    },
    /// Any other container (paragraph, heading, emphasis, list, ...).
    Element(Tag<'a>),
    /// Plain text.
    Text(CowStr<'a>),
    /// Inline raw HTML, emitted verbatim by the renderer.
    RawHtml(CowStr<'a>),
    /// Any other leaf event (inline code, breaks, rules, block HTML, ...).
    Event(Event<'a>),
}

impl<'a> NodeKind<'a> {
    pub(crate) fn from_tag(tag: Tag<'a>) -> Self {
        match tag {
            Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            } => Self::Link {
                link_type,
                url: dest_url,
                title,
                id,
            },
            other => Self::Element(other),
        }
    }

    /// Whether this is a link node.
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}

/// A node in the document tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<'a> {
    pub kind: NodeKind<'a>,
    pub children: Vec<Node<'a>>,
    /// Byte range in the source markdown. `None` for synthesized nodes.
    pub position: Option<Range<usize>>,
}

impl<'a> Node<'a> {
    /// Create a node without children.
    #[must_use]
    pub fn new(kind: NodeKind<'a>, position: Option<Range<usize>>) -> Self {
        Self {
            kind,
            children: Vec::new(),
            position,
        }
    }

    /// Create an empty document root.
    #[cfg(test)]
    pub(crate) fn root() -> Self {
        Self::new(NodeKind::Root, None)
    }

    /// Create a raw HTML node with no children and no position.
    #[must_use]
    pub fn raw_html(value: impl Into<CowStr<'a>>) -> Self {
        Self::new(NodeKind::RawHtml(value.into()), None)
    }

    /// Add a child node.
    #[cfg(test)]
    pub(crate) fn with_child(mut self, child: Node<'a>) -> Self {
        self.children.push(child);
        self
    }

    /// Concatenated text of this node and all its descendants.
    ///
    /// Inline code contributes its literal content; raw HTML contributes nothing.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) | NodeKind::Event(Event::Code(text)) => out.push_str(text),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Total number of nodes in this subtree, including this one.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_nested() {
        let node = Node::new(NodeKind::Element(Tag::Emphasis), None)
            .with_child(Node::new(NodeKind::Text("Hello ".into()), None))
            .with_child(Node::new(NodeKind::Event(Event::Code("world".into())), None));

        assert_eq!(node.text_content(), "Hello world");
    }

    #[test]
    fn test_text_content_ignores_raw_html() {
        let node = Node::root()
            .with_child(Node::raw_html("<b>"))
            .with_child(Node::new(NodeKind::Text("bold".into()), None));

        assert_eq!(node.text_content(), "bold");
    }

    #[test]
    fn test_raw_html_has_no_position() {
        let node = Node::raw_html("<br>");

        assert!(node.position.is_none());
        assert!(node.children.is_empty());
        assert_eq!(node.kind, NodeKind::RawHtml("<br>".into()));
    }

    #[test]
    fn test_node_count_includes_self() {
        let node = Node::root().with_child(
            Node::new(NodeKind::Element(Tag::Paragraph), None)
                .with_child(Node::new(NodeKind::Text("a".into()), None)),
        );

        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn test_from_tag_link() {
        let kind = NodeKind::from_tag(Tag::Link {
            link_type: LinkType::Inline,
            dest_url: "babel://hello".into(),
            title: "".into(),
            id: "".into(),
        });

        assert!(kind.is_link());
        assert!(!NodeKind::from_tag(Tag::Paragraph).is_link());
    }
}
