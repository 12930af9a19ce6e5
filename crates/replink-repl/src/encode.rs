//! Playground URL encoders, one per [`ReplKind`].

use std::path::Path;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::compress::compress;
use crate::consts::{BABEL_URL, CODEPEN_REDIRECT_PREFIX, CODESANDBOX_URL, RAMDA_URL};
use crate::error::ReplError;
use crate::kind::ReplKind;
use crate::options::Options;
use crate::resolve::{ResolvedFile, resolve_file, resolve_files};
use crate::sandbox::SandboxParameters;
use crate::transformer::ReadFileFn;

/// Characters escaped by JavaScript's `encodeURIComponent`.
///
/// Unreserved: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// File name CodeSandbox uses as the entry point.
const SANDBOX_ENTRY: &str = "index.js";

/// What encoders need from the transformer.
pub(crate) struct EncodeContext<'a> {
    pub options: &'a Options,
    pub read_file: &'a ReadFileFn,
}

impl EncodeContext<'_> {
    fn read(&self, file: &ResolvedFile) -> Result<String, ReplError> {
        (self.read_file)(&file.path).map_err(|source| ReplError::Io {
            path: file.path.clone(),
            source,
        })
    }

    fn directory(&self) -> &Path {
        self.options.directory()
    }
}

/// Build the playground URL for a link reference.
pub(crate) fn encode(
    kind: ReplKind,
    reference: &str,
    ctx: &EncodeContext<'_>,
) -> Result<String, ReplError> {
    match kind {
        ReplKind::Babel => babel(reference, ctx),
        ReplKind::CodePen => codepen(reference, ctx),
        ReplKind::CodeSandbox => codesandbox(reference, ctx),
        ReplKind::Ramda => ramda(reference, ctx),
    }
}

fn babel(reference: &str, ctx: &EncodeContext<'_>) -> Result<String, ReplError> {
    let file = resolve_file(ctx.directory(), reference)?;
    let code = ctx.read(&file)?;
    Ok(format!("{BABEL_URL}{}", compress(&code)))
}

/// `CodePen` needs a form POST, so the link goes to a site-local redirect page.
fn codepen(reference: &str, ctx: &EncodeContext<'_>) -> Result<String, ReplError> {
    resolve_file(ctx.directory(), reference)?;
    Ok(format!("{CODEPEN_REDIRECT_PREFIX}{reference}"))
}

fn codesandbox(references: &str, ctx: &EncodeContext<'_>) -> Result<String, ReplError> {
    let files = resolve_files(ctx.directory(), references)?;

    let mut parameters =
        SandboxParameters::new(ctx.options.dependencies(), ctx.options.html());
    for file in &files {
        let content = ctx.read(file)?;
        let name = if file.is_javascript() {
            SANDBOX_ENTRY
        } else {
            file.name.as_str()
        };
        parameters.add_file(name, content);
    }

    let json = parameters.to_json()?;
    Ok(format!("{CODESANDBOX_URL}{}", compress(&json)))
}

fn ramda(reference: &str, ctx: &EncodeContext<'_>) -> Result<String, ReplError> {
    let file = resolve_file(ctx.directory(), reference)?;
    let code = ctx.read(&file)?;
    Ok(format!(
        "{RAMDA_URL}{}",
        utf8_percent_encode(&code, URI_COMPONENT_ENCODE_SET)
    ))
}
