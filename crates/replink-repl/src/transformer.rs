//! Document transformer for playground links.

use std::io;
use std::path::Path;

use replink_tree::{Node, NodeKind, map, parse, parser_options, render_html};
use tracing::{debug, info};

use crate::encode::{EncodeContext, encode};
use crate::error::ReplError;
use crate::kind::ReplKind;
use crate::options::{Options, ReplOptions};
use crate::rewrite::{display_text, rewrite_link};

/// Type alias for the file reading callback function.
pub type ReadFileFn = dyn Fn(&Path) -> io::Result<String> + Send + Sync;

/// Default file reading function.
fn default_read_file(path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Rewrites playground links in a document tree.
///
/// Options are validated once, when the transformer is created; a transformer
/// that exists always has a usable directory. Each call to
/// [`transform`](Self::transform) is independent of the others.
///
/// # Example
///
/// ```no_run
/// use replink_repl::{ReplOptions, ReplTransformer};
/// use replink_tree::{parse, parser_options, render_html};
///
/// let transformer = ReplTransformer::new(ReplOptions::new("examples"))?;
///
/// let tree = parse("[Try it](ramda://sum)", parser_options());
/// let html = render_html(transformer.transform(tree)?);
/// assert!(html.contains("https://ramdajs.com/repl/#?"));
/// # Ok::<(), replink_repl::ReplError>(())
/// ```
pub struct ReplTransformer {
    options: Options,
    read_file: Box<ReadFileFn>,
}

impl ReplTransformer {
    /// Create a transformer, validating the options.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Config`] if the directory is missing or invalid.
    pub fn new(options: ReplOptions) -> Result<Self, ReplError> {
        Ok(Self {
            options: options.validate()?,
            read_file: Box::new(default_read_file),
        })
    }

    /// Set the file reading callback.
    ///
    /// Default: `std::fs::read_to_string`. Existence checks always use the
    /// real filesystem.
    #[must_use]
    pub fn with_read_file<F>(mut self, read_file: F) -> Self
    where
        F: Fn(&Path) -> io::Result<String> + Send + Sync + 'static,
    {
        self.read_file = Box::new(read_file);
        self
    }

    /// Rewrite every playground link in the tree.
    ///
    /// Nodes that are not playground links come back unchanged.
    ///
    /// # Errors
    ///
    /// The first missing file, invalid reference or read failure aborts the
    /// whole pass; no partially transformed tree is returned.
    pub fn transform<'a>(&self, tree: Node<'a>) -> Result<Node<'a>, ReplError> {
        let mut rewritten = 0usize;

        let tree = map(tree, |node, _index, _parent| {
            let was_link = node.kind.is_link();
            let node = self.visit(node)?;
            if was_link && matches!(node.kind, NodeKind::RawHtml(_)) {
                rewritten += 1;
            }
            Ok::<_, ReplError>(node)
        })?;

        info!(rewritten, "Rewrote playground links");
        Ok(tree)
    }

    /// Parse markdown, rewrite playground links and render HTML.
    ///
    /// # Errors
    ///
    /// See [`transform`](Self::transform).
    pub fn render_markdown(&self, markdown: &str) -> Result<String, ReplError> {
        let tree = parse(markdown, parser_options());
        let tree = self.transform(tree)?;
        Ok(render_html(tree))
    }

    fn visit<'a>(&self, node: Node<'a>) -> Result<Node<'a>, ReplError> {
        let NodeKind::Link { url, .. } = &node.kind else {
            return Ok(node);
        };
        let Some((kind, reference)) = ReplKind::classify(url) else {
            return Ok(node);
        };

        let ctx = EncodeContext {
            options: &self.options,
            read_file: self.read_file.as_ref(),
        };
        let href = encode(kind, reference, &ctx)?;
        let text = display_text(&node, self.options.default_text());
        debug!(kind = kind.name(), %href, "Rewriting playground link");

        Ok(rewrite_link(node, &href, &text, self.options.target()))
    }
}
