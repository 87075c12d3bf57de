//! Import bookkeeping and qualifier resolution.

use std::path::Path;

use indexmap::IndexMap;
use listize_extract::{Import, SourceUnit, assumed_package_name};

use crate::builder::{CodeFragment, Renderable};

/// Standard-library packages by the name they are referred to with.
pub const STD_PACKAGES: &[(&str, &str)] = &[
    ("atomic", "sync/atomic"),
    ("big", "math/big"),
    ("bufio", "bufio"),
    ("bytes", "bytes"),
    ("context", "context"),
    ("csv", "encoding/csv"),
    ("driver", "database/sql/driver"),
    ("errors", "errors"),
    ("fmt", "fmt"),
    ("fs", "io/fs"),
    ("hash", "hash"),
    ("http", "net/http"),
    ("io", "io"),
    ("json", "encoding/json"),
    ("log", "log"),
    ("netip", "net/netip"),
    ("net", "net"),
    ("os", "os"),
    ("reflect", "reflect"),
    ("regexp", "regexp"),
    ("slog", "log/slog"),
    ("sql", "database/sql"),
    ("strings", "strings"),
    ("sync", "sync"),
    ("template", "text/template"),
    ("time", "time"),
    ("unsafe", "unsafe"),
    ("url", "net/url"),
    ("utf8", "unicode/utf8"),
    ("xml", "encoding/xml"),
];

/// Deduplicated set of imports, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    /// Import path -> explicit package name.
    imports: IndexMap<String, Option<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. A path that is already present keeps its first alias.
    pub fn insert(&mut self, import: Import) {
        self.imports.entry(import.path).or_insert(import.alias);
    }

    /// Whether some import is referred to by `name` in the file.
    pub fn has_local(&self, name: &str) -> bool {
        self.iter().any(|import| import.local_name() == name)
    }

    /// Imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Import> + '_ {
        self.imports.iter().map(|(path, alias)| Import {
            alias: alias.clone(),
            path: path.clone(),
        })
    }

    /// Imports sorted by path, the order gofmt keeps them in.
    pub fn sorted(&self) -> Vec<Import> {
        let mut imports: Vec<_> = self.iter().collect();
        imports.sort_by(|a, b| a.path.cmp(&b.path));
        imports
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

fn import_spec(import: &Import) -> String {
    match &import.alias {
        Some(alias) if alias != assumed_package_name(&import.path) => {
            format!("{alias} \"{}\"", import.path)
        }
        _ => format!("\"{}\"", import.path),
    }
}

impl Renderable for ImportSet {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let imports = self.sorted();
        match imports.as_slice() {
            [] => Vec::new(),
            [single] => vec![CodeFragment::line(format!("import {}", import_spec(single)))],
            many => vec![CodeFragment::Block {
                header: "import (".to_string(),
                body: many
                    .iter()
                    .map(|i| CodeFragment::line(import_spec(i)))
                    .collect(),
                close: ")".to_string(),
            }],
        }
    }
}

/// Maps package qualifiers to imports.
///
/// Imports of the file the code was generated from take precedence over the
/// [`STD_PACKAGES`] table.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    source_imports: Vec<Import>,
}

impl ImportResolver {
    pub fn with_imports(imports: Vec<Import>) -> Self {
        Self {
            source_imports: imports,
        }
    }

    /// Resolver seeded from the file at `path`.
    ///
    /// A file that can't be read or parsed contributes nothing.
    pub fn for_source(path: Option<&Path>) -> Self {
        let imports = path
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|text| SourceUnit::parse_lenient(text).ok())
            .map(|unit| unit.imports())
            .unwrap_or_default();
        Self::with_imports(imports)
    }

    pub fn resolve(&self, qualifier: &str) -> Option<Import> {
        if let Some(import) = self
            .source_imports
            .iter()
            .find(|i| i.local_name() == qualifier)
        {
            return Some(import.clone());
        }
        STD_PACKAGES
            .iter()
            .find(|(name, _)| *name == qualifier)
            .map(|(_, path)| Import::new(*path))
    }
}
