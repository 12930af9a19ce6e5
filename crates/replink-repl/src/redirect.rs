//! Static redirect pages for `codepen://` links.
//!
//! `CodePen` only accepts prefilled pens through a form POST, so a plain link
//! cannot open one. Each page written here submits such a form as soon as it
//! loads.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use replink_tree::escape_html;
use serde::Serialize;
use tracing::{info, warn};

use crate::consts::{CODEPEN_DEFINE_URL, CODEPEN_REDIRECT_DIR};
use crate::error::ReplError;
use crate::options::{Options, ReplOptions};

/// Body of the `data` field of the `CodePen` define form.
#[derive(Debug, Serialize)]
struct PenPayload<'a> {
    title: &'a str,
    html: &'a str,
    js: &'a str,
    js_external: String,
    js_pre_processor: &'static str,
    editors: &'static str,
}

/// Writes one redirect page per JavaScript file in the source directory.
pub struct RedirectPageGenerator {
    options: Options,
    externals: Vec<String>,
}

impl RedirectPageGenerator {
    /// Create a generator, validating the options.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Config`] if the directory is missing or invalid.
    pub fn new(options: ReplOptions) -> Result<Self, ReplError> {
        Ok(Self {
            options: options.validate()?,
            externals: Vec::new(),
        })
    }

    /// Set the external scripts each pen loads (e.g. React from a CDN).
    #[must_use]
    pub fn with_externals(mut self, externals: Vec<String>) -> Self {
        self.externals = externals;
        self
    }

    /// Write all redirect pages under `output_dir` and return their paths.
    ///
    /// A file `intro/hello.js` becomes
    /// `<output_dir>/redirect-to-codepen/intro/hello/index.html`, with a copy
    /// under `intro/hello.js/index.html` since `codepen://` links keep the
    /// reference as written.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] for the first unreadable source or unwritable
    /// page.
    pub fn generate(&self, output_dir: &Path) -> Result<Vec<PathBuf>, ReplError> {
        let mut sources = Vec::new();
        collect_sources(self.options.directory(), "", &mut sources)?;

        let root = output_dir.join(CODEPEN_REDIRECT_DIR);
        let mut written = Vec::with_capacity(sources.len() * 2);

        for (name, source) in &sources {
            let js = fs::read_to_string(source).map_err(|e| io_error(source, e))?;
            let page = self.render_page(name, &js)?;

            for dir in [root.join(name), root.join(format!("{name}.js"))] {
                fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
                let path = dir.join("index.html");
                fs::write(&path, &page).map_err(|e| io_error(&path, e))?;

                info!(name, path = %path.display(), "Wrote redirect page");
                written.push(path);
            }
        }

        info!(
            count = written.len(),
            output = %root.display(),
            "Generated CodePen redirect pages"
        );
        Ok(written)
    }

    /// Render the self-submitting page for one source file.
    fn render_page(&self, title: &str, js: &str) -> Result<String, ReplError> {
        let payload = PenPayload {
            title,
            html: self.options.html(),
            js,
            js_external: self.externals.join(";"),
            js_pre_processor: "babel",
            editors: "0010",
        };
        let data = serde_json::to_string(&payload)?;

        let mut page = String::with_capacity(data.len() + 512);
        let _ = write!(
            page,
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<form id="codepen" action="{CODEPEN_DEFINE_URL}" method="POST">
<input type="hidden" name="data" value="{data}">
</form>
<script>document.getElementById("codepen").submit();</script>
</body>
</html>
"#,
            title = escape_html(title),
            data = escape_html(&data),
        );
        Ok(page)
    }
}

/// Collect `(name, path)` for every `.js` file below `dir`, sorted by name.
///
/// Names are relative to the source directory, use `/` separators and have
/// the `.js` extension removed. Hidden entries are skipped.
fn collect_sources(
    dir: &Path,
    prefix: &str,
    sources: &mut Vec<(String, PathBuf)>,
) -> Result<(), ReplError> {
    let mut entries = fs::read_dir(dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(|e| io_error(dir, e))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let path = entry.path();
        let Ok(file_name) = entry.file_name().into_string() else {
            warn!(path = %path.display(), "Skipping entry with non-UTF-8 name");
            continue;
        };
        if file_name.starts_with('.') {
            continue;
        }

        let name = if prefix.is_empty() {
            file_name
        } else {
            format!("{prefix}/{file_name}")
        };

        let is_dir = entry
            .file_type()
            .map_err(|e| io_error(&path, e))?
            .is_dir();
        if is_dir {
            collect_sources(&path, &name, sources)?;
        } else if let Some(stem) = name.strip_suffix(".js") {
            sources.push((stem.to_owned(), path));
        }
    }

    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> ReplError {
    ReplError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::transformer::ReplTransformer;

    fn source_dir() -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("intro")).unwrap();
        fs::write(temp.path().join("hello.js"), "console.log(\"hi\");\n").unwrap();
        fs::write(temp.path().join("intro/first.js"), "let a = 1 < 2;\n").unwrap();
        fs::write(temp.path().join("style.css"), "body {}\n").unwrap();
        fs::write(temp.path().join(".hidden.js"), "secret").unwrap();
        temp
    }

    fn data_field(page: &str) -> serde_json::Value {
        let value = page
            .split(r#"name="data" value=""#)
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let json = value
            .replace("&quot;", "\"")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&#39;", "'")
            .replace("&amp;", "&");
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_generate_writes_page_per_js_file() {
        let source = source_dir();
        let output = tempfile::tempdir().unwrap();
        let generator = RedirectPageGenerator::new(ReplOptions::new(source.path())).unwrap();

        let written = generator.generate(output.path()).unwrap();

        let root = output.path().join("redirect-to-codepen");
        assert_eq!(
            written,
            vec![
                root.join("hello").join("index.html"),
                root.join("hello.js").join("index.html"),
                root.join("intro/first").join("index.html"),
                root.join("intro/first.js").join("index.html"),
            ]
        );
        assert!(written.iter().all(|p| p.exists()));
        assert!(!root.join(".hidden").exists());
        assert!(!root.join("style").exists());
    }

    #[test]
    fn test_page_submits_payload() {
        let source = source_dir();
        let output = tempfile::tempdir().unwrap();
        let generator = RedirectPageGenerator::new(
            ReplOptions::new(source.path()).with_html("<div id=\"root\"></div>"),
        )
        .unwrap()
        .with_externals(vec![
            "https://unpkg.com/react/umd/react.development.js".to_owned(),
            "https://unpkg.com/react-dom/umd/react-dom.development.js".to_owned(),
        ]);

        let written = generator.generate(output.path()).unwrap();
        let page = fs::read_to_string(&written[2]).unwrap();

        assert!(page.contains(r#"<form id="codepen" action="https://codepen.io/pen/define" method="POST">"#));
        assert!(page.contains("<title>intro/first</title>"));
        assert!(page.contains(".submit();"));
        assert_eq!(
            data_field(&page),
            serde_json::json!({
                "title": "intro/first",
                "html": "<div id=\"root\"></div>",
                "js": "let a = 1 < 2;\n",
                "js_external": "https://unpkg.com/react/umd/react.development.js;https://unpkg.com/react-dom/umd/react-dom.development.js",
                "js_pre_processor": "babel",
                "editors": "0010",
            })
        );
    }

    #[test]
    fn test_pages_exist_for_both_reference_forms() {
        let source = source_dir();
        let output = tempfile::tempdir().unwrap();
        let generator = RedirectPageGenerator::new(ReplOptions::new(source.path())).unwrap();
        let transformer = ReplTransformer::new(ReplOptions::new(source.path())).unwrap();

        generator.generate(output.path()).unwrap();
        let html = transformer
            .render_markdown("[a](codepen://hello) [b](codepen://hello.js) [c](codepen://intro/first.js)")
            .unwrap();

        let hrefs: Vec<&str> = html
            .split(r#"href=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(
            hrefs,
            vec![
                "/redirect-to-codepen/hello",
                "/redirect-to-codepen/hello.js",
                "/redirect-to-codepen/intro/first.js",
            ]
        );
        for href in hrefs {
            let page = output
                .path()
                .join(href.trim_start_matches('/'))
                .join("index.html");
            assert!(page.exists(), "no redirect page for {href}");
        }
    }

    #[test]
    fn test_same_page_for_both_reference_forms() {
        let source = source_dir();
        let output = tempfile::tempdir().unwrap();
        let generator = RedirectPageGenerator::new(ReplOptions::new(source.path())).unwrap();

        let written = generator.generate(output.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&written[0]).unwrap(),
            fs::read_to_string(&written[1]).unwrap()
        );
    }

    #[test]
    fn test_generate_empty_directory() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let generator = RedirectPageGenerator::new(ReplOptions::new(source.path())).unwrap();

        let written = generator.generate(output.path()).unwrap();

        assert!(written.is_empty());
    }

    #[test]
    fn test_generate_unwritable_output() {
        let source = source_dir();
        let output = tempfile::tempdir().unwrap();
        let blocker = output.path().join("site");
        fs::write(&blocker, "not a directory").unwrap();
        let generator = RedirectPageGenerator::new(ReplOptions::new(source.path())).unwrap();

        let err = generator.generate(&blocker).unwrap_err();

        assert!(matches!(err, ReplError::Io { .. }), "got {err:?}");
        assert!(err.to_string().contains("site"));
    }

    #[test]
    fn test_new_rejects_missing_directory() {
        let temp = tempfile::tempdir().unwrap();

        let result = RedirectPageGenerator::new(ReplOptions::new(temp.path().join("nope")));

        assert!(matches!(result, Err(ReplError::Config(_))));
    }
}
