//! Code playground links for markdown documents.
//!
//! Links whose URL starts with one of four pseudo-protocols point at local
//! source files instead of web pages:
//!
//! | protocol         | playground  | URL contents                             |
//! |------------------|-------------|------------------------------------------|
//! | `babel://`       | Babel REPL  | LZ-compressed file                       |
//! | `codepen://`     | `CodePen`   | site-local redirect page                 |
//! | `codesandbox://` | CodeSandbox | LZ-compressed JSON with several files    |
//! | `ramda://`       | Ramda REPL  | percent-encoded file                     |
//!
//! [`ReplTransformer`] walks a [`replink_tree::Node`] tree and replaces each such
//! link with a raw HTML anchor to the generated playground URL. Missing files
//! and invalid configuration abort the whole pass.
//!
//! [`RedirectPageGenerator`] writes the static pages that `codepen://` links
//! point at.
//!
//! # Example
//!
//! ```no_run
//! use replink_repl::{ReplOptions, ReplTransformer};
//!
//! let options = ReplOptions::new("examples")
//!     .with_default_text("Try it")
//!     .with_target("_blank");
//! let transformer = ReplTransformer::new(options)?;
//!
//! let html = transformer.render_markdown("[Hello](babel://hello-world)")?;
//! # Ok::<(), replink_repl::ReplError>(())
//! ```

mod compress;
mod consts;
mod encode;
mod error;
mod kind;
mod options;
mod redirect;
mod resolve;
mod rewrite;
mod sandbox;
mod transformer;

pub use compress::{compress, decompress};
pub use error::ReplError;
pub use kind::ReplKind;
pub use options::{Options, ReplOptions};
pub use redirect::RedirectPageGenerator;
pub use resolve::{ResolvedFile, resolve_file, resolve_files};
pub use rewrite::{anchor, display_text, rewrite_link};
pub use sandbox::SandboxParameters;
pub use transformer::{ReadFileFn, ReplTransformer};
