//! Pre-order tree walker.

use crate::node::{Node, NodeKind};

/// Produce a new tree by passing every node through `visit`.
///
/// Nodes are visited in pre-order: a node before its children, siblings in
/// document order. The visitor receives the node (by value), its index among
/// its siblings and the kind of its parent (`None` for the root). Whatever it
/// returns takes the node's place, and the walk continues into the children
/// of the returned node. Every node is visited exactly once.
///
/// The first error returned by `visit` stops the walk and is returned as-is.
pub fn map<'a, E, F>(root: Node<'a>, mut visit: F) -> Result<Node<'a>, E>
where
    F: FnMut(Node<'a>, usize, Option<&NodeKind<'a>>) -> Result<Node<'a>, E>,
{
    map_node(root, 0, None, &mut visit)
}

fn map_node<'a, E, F>(
    node: Node<'a>,
    index: usize,
    parent: Option<&NodeKind<'a>>,
    visit: &mut F,
) -> Result<Node<'a>, E>
where
    F: FnMut(Node<'a>, usize, Option<&NodeKind<'a>>) -> Result<Node<'a>, E>,
{
    let mut node = visit(node, index, parent)?;

    let children = std::mem::take(&mut node.children);
    let mut mapped = Vec::with_capacity(children.len());
    for (child_index, child) in children.into_iter().enumerate() {
        mapped.push(map_node(child, child_index, Some(&node.kind), visit)?);
    }
    node.children = mapped;

    Ok(node)
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use pretty_assertions::assert_eq;
    use pulldown_cmark::Tag;

    use super::*;
    use crate::parse::{parse, parser_options};

    fn label(kind: &NodeKind<'_>) -> String {
        match kind {
            NodeKind::Root => "root".to_owned(),
            NodeKind::Link { url, .. } => format!("link({url})"),
            NodeKind::Element(tag) => format!("{tag:?}"),
            NodeKind::Text(text) => format!("text({text})"),
            NodeKind::RawHtml(html) => format!("html({html})"),
            NodeKind::Event(event) => format!("{event:?}"),
        }
    }

    #[test]
    fn test_map_identity_preserves_tree() {
        let markdown = "# Title\n\nSome *text* and a [link](https://example.com).\n\n- one\n- two\n";
        let tree = parse(markdown, parser_options());

        let mapped = map(tree.clone(), |node, _, _| Ok::<_, Infallible>(node)).unwrap();

        assert_eq!(mapped, tree);
    }

    #[test]
    fn test_map_visits_in_pre_order() {
        let tree = parse("a *b* [c](u)", parser_options());
        let mut visited = Vec::new();

        map(tree, |node, index, parent| {
            visited.push((label(&node.kind), index, parent.map(label)));
            Ok::<_, Infallible>(node)
        })
        .unwrap();

        assert_eq!(
            visited,
            vec![
                ("root".to_owned(), 0, None),
                ("Paragraph".to_owned(), 0, Some("root".to_owned())),
                ("text(a )".to_owned(), 0, Some("Paragraph".to_owned())),
                ("Emphasis".to_owned(), 1, Some("Paragraph".to_owned())),
                ("text(b)".to_owned(), 0, Some("Emphasis".to_owned())),
                ("text( )".to_owned(), 2, Some("Paragraph".to_owned())),
                ("link(u)".to_owned(), 3, Some("Paragraph".to_owned())),
                ("text(c)".to_owned(), 0, Some("link(u)".to_owned())),
            ]
        );
    }

    #[test]
    fn test_map_visits_every_node_once() {
        let tree = parse("1. a\n2. b *c* `d`\n\n> e\n", parser_options());
        let expected = tree.node_count();
        let mut count = 0;

        map(tree, |node, _, _| {
            count += 1;
            Ok::<_, Infallible>(node)
        })
        .unwrap();

        assert_eq!(count, expected);
    }

    #[test]
    fn test_map_replacement_children_are_walked() {
        let tree = parse("*x*", parser_options());
        let mut texts = Vec::new();

        let mapped = map(tree, |node, _, _| {
            if let NodeKind::Text(text) = &node.kind {
                texts.push(text.to_string());
            }
            if node.kind == NodeKind::Element(Tag::Emphasis) {
                let replaced = Node::new(NodeKind::Element(Tag::Strong), None)
                    .with_child(Node::new(NodeKind::Text("y".into()), None));
                return Ok::<_, Infallible>(replaced);
            }
            Ok(node)
        })
        .unwrap();

        assert_eq!(texts, vec!["y".to_owned()]);
        assert_eq!(mapped.children[0].children[0].kind, NodeKind::Element(Tag::Strong));
    }

    #[test]
    fn test_map_stops_on_first_error() {
        let tree = parse("[a](one) [b](two)", parser_options());
        let mut seen = Vec::new();

        let result = map(tree, |node, _, _| {
            if let NodeKind::Link { url, .. } = &node.kind {
                seen.push(url.to_string());
                return Err(format!("bad link {url}"));
            }
            Ok(node)
        });

        assert_eq!(result.unwrap_err(), "bad link one");
        assert_eq!(seen, vec!["one".to_owned()]);
    }
}
