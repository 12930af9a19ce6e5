//! Flatten a [`Node`] tree back to pulldown-cmark events and render HTML.

use pulldown_cmark::{Event, Tag, TagEnd, html};

use crate::node::{Node, NodeKind};

/// Flatten a tree into the event stream it was parsed from.
///
/// Containers become balanced `Start`/`End` pairs; the root itself emits
/// nothing but its children.
#[must_use]
pub fn into_events(node: Node<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    push_events(node, &mut events);
    events
}

fn push_events<'a>(node: Node<'a>, out: &mut Vec<Event<'a>>) {
    let Node { kind, children, .. } = node;

    match kind {
        NodeKind::Root => push_children(children, out),
        NodeKind::Link {
            link_type,
            url,
            title,
            id,
        } => {
            out.push(Event::Start(Tag::Link {
                link_type,
                dest_url: url,
                title,
                id,
            }));
            push_children(children, out);
            out.push(Event::End(TagEnd::Link));
        }
        NodeKind::Element(tag) => {
            let end = tag.to_end();
            out.push(Event::Start(tag));
            push_children(children, out);
            out.push(Event::End(end));
        }
        NodeKind::Text(text) => out.push(Event::Text(text)),
        NodeKind::RawHtml(value) => out.push(Event::InlineHtml(value)),
        NodeKind::Event(event) => out.push(event),
    }
}

fn push_children<'a>(children: Vec<Node<'a>>, out: &mut Vec<Event<'a>>) {
    for child in children {
        push_events(child, out);
    }
}

/// Render a tree to HTML.
#[must_use]
pub fn render_html(node: Node<'_>) -> String {
    let events = into_events(node);
    let mut output = String::with_capacity(events.len() * 16);
    html::push_html(&mut output, events.into_iter());
    output
}
