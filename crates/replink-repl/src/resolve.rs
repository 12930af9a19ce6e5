//! Resolution of link references to source files.
//!
//! A reference is the part of a playground URL after its protocol, relative to
//! the configured directory. References without an extension get `.js`.

use std::path::{Component, Path, PathBuf};

use crate::error::ReplError;

/// A link reference resolved to an existing source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Absolute, normalized path.
    pub path: PathBuf,
    /// File name (after the last path separator of the reference).
    pub name: String,
}

impl ResolvedFile {
    /// Whether this is the JavaScript entry file.
    #[must_use]
    pub fn is_javascript(&self) -> bool {
        self.name.ends_with(".js")
    }
}

/// Resolve a single-file reference.
///
/// Appends `.js` unless the reference already ends with it.
///
/// # Errors
///
/// Returns [`ReplError::FileNotFound`] if the resolved file does not exist.
pub fn resolve_file(directory: &Path, reference: &str) -> Result<ResolvedFile, ReplError> {
    let reference = with_default_extension(reference, &[".js"]);
    resolve(directory, &reference)
}

/// Resolve a comma-separated multi-file reference.
///
/// Each reference ending in neither `.js` nor `.css` gets `.js` appended. At
/// most one reference may end up as a JavaScript file. Files are returned in
/// reference order; duplicates are kept.
///
/// # Errors
///
/// Returns [`ReplError::Validation`] for a second JavaScript file and
/// [`ReplError::FileNotFound`] for a file that does not exist.
pub fn resolve_files(directory: &Path, references: &str) -> Result<Vec<ResolvedFile>, ReplError> {
    let mut files = Vec::new();
    let mut javascript: Option<String> = None;

    for reference in references.split(',') {
        let reference = with_default_extension(reference, &[".js", ".css"]);

        if reference.ends_with(".js") {
            if let Some(first) = &javascript {
                return Err(ReplError::Validation(format!(
                    "multiple JavaScript files not allowed: {first} and {reference}"
                )));
            }
            javascript = Some(reference.clone());
        }

        files.push(resolve(directory, &reference)?);
    }

    Ok(files)
}

fn with_default_extension(reference: &str, extensions: &[&str]) -> String {
    if extensions.iter().any(|ext| reference.ends_with(ext)) {
        reference.to_owned()
    } else {
        format!("{reference}.js")
    }
}

fn resolve(directory: &Path, reference: &str) -> Result<ResolvedFile, ReplError> {
    // References are always relative to the directory, even with a leading slash.
    let relative = reference.trim_start_matches(['/', '\\']);
    let path = normalize(&directory.join(relative));

    if !path.exists() {
        return Err(ReplError::FileNotFound(path));
    }

    let name = reference
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(reference)
        .to_owned();

    Ok(ResolvedFile { path, name })
}

/// Lexically normalize a path: drop `.`, resolve `..`, collapse separators.
///
/// Does not touch the filesystem. `..` never climbs above the root.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture(files: &[&str]) -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("// {file}\n")).unwrap();
        }
        temp
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/a/./b/../c//d.js")),
            PathBuf::from("/a/c/d.js")
        );
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
        assert_eq!(normalize(Path::new("../../b")), PathBuf::from("../../b"));
    }

    #[test]
    fn test_resolve_file_appends_js() {
        let temp = fixture(&["hello.js"]);

        let file = resolve_file(temp.path(), "hello").unwrap();

        assert_eq!(file.path, temp.path().join("hello.js"));
        assert_eq!(file.name, "hello.js");
        assert!(file.is_javascript());
    }

    #[test]
    fn test_resolve_file_keeps_js_extension() {
        let temp = fixture(&["hello.js"]);

        let file = resolve_file(temp.path(), "hello.js").unwrap();

        assert_eq!(file.path, temp.path().join("hello.js"));
    }

    #[test]
    fn test_resolve_file_nested_and_dot_segments() {
        let temp = fixture(&["intro/hello.js"]);

        let file = resolve_file(temp.path(), "./other/../intro/hello").unwrap();

        assert_eq!(file.path, temp.path().join("intro").join("hello.js"));
        assert_eq!(file.name, "hello.js");
    }

    #[test]
    fn test_resolve_file_leading_slash_stays_in_directory() {
        let temp = fixture(&["hello.js"]);

        let file = resolve_file(temp.path(), "/hello").unwrap();

        assert_eq!(file.path, temp.path().join("hello.js"));
    }

    #[test]
    fn test_resolve_file_missing() {
        let temp = fixture(&[]);

        let err = resolve_file(temp.path(), "missing").unwrap_err();

        assert!(matches!(err, ReplError::FileNotFound(_)), "got {err:?}");
        let expected = temp.path().join("missing.js");
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_resolve_file_css_gets_js_appended() {
        let temp = fixture(&["style.css.js"]);

        let file = resolve_file(temp.path(), "style.css").unwrap();

        assert_eq!(file.name, "style.css.js");
    }

    #[test]
    fn test_resolve_files_js_and_css() {
        let temp = fixture(&["app.js", "styles/app.css"]);

        let files = resolve_files(temp.path(), "app,styles/app.css").unwrap();

        assert_eq!(
            files,
            vec![
                ResolvedFile {
                    path: temp.path().join("app.js"),
                    name: "app.js".to_owned(),
                },
                ResolvedFile {
                    path: temp.path().join("styles").join("app.css"),
                    name: "app.css".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_resolve_files_single_reference() {
        let temp = fixture(&["app.js"]);

        let files = resolve_files(temp.path(), "app").unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].is_javascript());
    }

    #[test]
    fn test_resolve_files_rejects_two_explicit_js() {
        let temp = fixture(&["a.js", "b.js"]);

        let err = resolve_files(temp.path(), "a.js,b.js").unwrap_err();

        assert!(matches!(err, ReplError::Validation(_)), "got {err:?}");
        assert!(err.to_string().contains("multiple JavaScript files"));
    }

    #[test]
    fn test_resolve_files_rejects_inferred_js() {
        let temp = fixture(&["a.js", "b.js"]);

        let err = resolve_files(temp.path(), "a,b").unwrap_err();

        assert!(matches!(err, ReplError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_resolve_files_allows_repeated_css() {
        let temp = fixture(&["a.css"]);

        let files = resolve_files(temp.path(), "a.css,a.css").unwrap();

        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_resolve_files_missing_file() {
        let temp = fixture(&["app.js"]);

        let err = resolve_files(temp.path(), "app,missing.css").unwrap_err();

        assert!(matches!(err, ReplError::FileNotFound(_)), "got {err:?}");
        assert!(err.to_string().contains("missing.css"));
    }
}
