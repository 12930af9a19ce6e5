//! URL-safe LZ-String compression.
//!
//! The Babel REPL and the CodeSandbox define API both accept LZ-String's
//! `compressToBase64` output with the base64 alphabet made URL-safe
//! (`+` → `-`, `/` → `_`) and the `=` padding trimmed.

/// Compress text into a URL-safe string.
///
/// # Examples
///
/// ```
/// use replink_repl::{compress, decompress};
///
/// let encoded = compress("const answer = 42;");
/// assert!(!encoded.contains(['+', '/', '=']));
/// assert_eq!(decompress(&encoded).as_deref(), Some("const answer = 42;"));
/// ```
#[must_use]
pub fn compress(text: &str) -> String {
    let base64 = lz_str::compress_to_base64(text);
    base64
        .trim_end_matches('=')
        .replace('+', "-")
        .replace('/', "_")
}

/// Reverse [`compress`].
///
/// Returns `None` if the input is not valid compressed data.
#[must_use]
pub fn decompress(encoded: &str) -> Option<String> {
    let mut base64 = encoded.replace('-', "+").replace('_', "/");
    while base64.len() % 4 != 0 {
        base64.push('=');
    }
    let wide = lz_str::decompress_from_base64(base64.as_str())?;
    String::from_utf16(&wide).ok()
}
