//! Playground endpoints and defaults.

/// Babel REPL with the React preset; the compressed source is appended.
pub const BABEL_URL: &str = "https://babeljs.io/repl/#?presets=react&code_lz=";

/// Site-local path prefix for `CodePen` redirect pages.
pub const CODEPEN_REDIRECT_PREFIX: &str = "/redirect-to-codepen/";

/// Directory name (under the output dir) holding the `CodePen` redirect pages.
pub const CODEPEN_REDIRECT_DIR: &str = "redirect-to-codepen";

/// `CodePen` prefill endpoint; expects a form POST with a JSON `data` field.
pub const CODEPEN_DEFINE_URL: &str = "https://codepen.io/pen/define";

/// CodeSandbox define API; the compressed parameters JSON is appended.
pub const CODESANDBOX_URL: &str = "https://codesandbox.io/api/v1/sandboxes/define?parameters=";

/// Ramda REPL; the percent-encoded source is appended.
pub const RAMDA_URL: &str = "https://ramdajs.com/repl/#?";

/// Link text used when a link has no text of its own.
pub const DEFAULT_TEXT: &str = "Click here";

/// Version used for dependencies listed without one.
pub const LATEST_VERSION: &str = "latest";
