//! CodeSandbox define-API parameters.
//!
//! The define API takes a JSON object describing the files of a sandbox:
//!
//! ```json
//! {"files": {
//!   "package.json": {"content": {"dependencies": {"react": "latest"}}},
//!   "index.html": {"content": "<div id=\"root\"></div>"},
//!   "index.js": {"content": "..."}
//! }}
//! ```

use serde::{Serialize, Serializer};

use crate::consts::LATEST_VERSION;

/// Builder for the CodeSandbox `parameters` object.
///
/// Files keep insertion order; adding a file under an existing name replaces
/// its content in place.
#[derive(Debug, Serialize)]
pub struct SandboxParameters {
    files: OrderedMap<SandboxFile>,
}

#[derive(Debug, Serialize)]
struct SandboxFile {
    content: FileContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum FileContent {
    Manifest(PackageManifest),
    Text(String),
}

#[derive(Debug, Serialize)]
struct PackageManifest {
    dependencies: OrderedMap<String>,
}

impl SandboxParameters {
    /// Create parameters with a `package.json` listing `dependencies` and an
    /// `index.html` holding `html`.
    ///
    /// Dependencies are `name` or `name@version`; a missing version means
    /// `latest`.
    #[must_use]
    pub fn new(dependencies: &[String], html: &str) -> Self {
        let mut manifest = PackageManifest {
            dependencies: OrderedMap::default(),
        };
        for dependency in dependencies {
            let (name, version) = parse_dependency(dependency);
            manifest.dependencies.insert(name, version.to_owned());
        }

        let mut files = OrderedMap::default();
        files.insert(
            "package.json",
            SandboxFile {
                content: FileContent::Manifest(manifest),
            },
        );
        files.insert(
            "index.html",
            SandboxFile {
                content: FileContent::Text(html.to_owned()),
            },
        );

        Self { files }
    }

    /// Add (or replace) a text file.
    pub fn add_file(&mut self, name: &str, content: String) {
        self.files.insert(
            name,
            SandboxFile {
                content: FileContent::Text(content),
            },
        );
    }

    /// File names in insertion order.
    #[cfg(test)]
    fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Split `name@version`. Scoped names (`@scope/pkg@1.0`) split on the last `@`.
fn parse_dependency(dependency: &str) -> (&str, &str) {
    match dependency.rsplit_once('@') {
        Some((name, version)) if !name.is_empty() => {
            let version = if version.is_empty() {
                LATEST_VERSION
            } else {
                version
            };
            (name, version)
        }
        _ => (dependency, LATEST_VERSION),
    }
}

/// String-keyed map that serializes in insertion order.
#[derive(Debug)]
struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    fn insert(&mut self, key: &str, value: V) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.0.push((key.to_owned(), value));
        }
    }

    #[cfg(test)]
    fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}
