//! tree-sitter-go wrapper.
//!
//! A [`SourceUnit`] owns one file's text together with its syntax tree, so
//! nodes borrowed from it can always be resolved back to text.

use tree_sitter::{Node, Parser, Tree};

use crate::ParseError;

/// Create a parser configured for Go.
pub fn go_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
    Ok(parser)
}

/// One parsed Go source file.
pub struct SourceUnit {
    text: String,
    tree: Tree,
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("len", &self.text.len())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

impl SourceUnit {
    /// Parse `text`, rejecting anything that is not syntactically valid Go.
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        let unit = Self::parse_lenient(text)?;
        if let Some(err) = unit.first_error() {
            return Err(err);
        }
        Ok(unit)
    }

    /// Parse `text`, keeping whatever tree tree-sitter recovers on syntax errors.
    pub fn parse_lenient(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let mut parser = go_parser()?;
        let tree = parser.parse(&text, None).ok_or(ParseError::NoTree)?;
        Ok(Self { text, tree })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Text covered by `node`.
    pub fn node_text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.bytes()).unwrap_or_default()
    }

    /// Identifier of the `package` clause.
    pub fn package_name(&self) -> Option<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_clause")?;

        let mut cursor = clause.walk();
        let name = clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier")?;
        Some(self.node_text(name))
    }

    /// Import declarations in source order.
    ///
    /// Blank (`_`) and dot imports are left out since they never qualify a type.
    pub fn imports(&self) -> Vec<Import> {
        let mut imports = Vec::new();
        let root = self.root();
        let mut cursor = root.walk();

        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "import_declaration" {
                continue;
            }
            let mut inner = decl.walk();
            for child in decl.named_children(&mut inner) {
                match child.kind() {
                    "import_spec" => imports.extend(self.import_spec(child)),
                    "import_spec_list" => {
                        let mut specs = child.walk();
                        for spec in child.named_children(&mut specs) {
                            if spec.kind() == "import_spec" {
                                imports.extend(self.import_spec(spec));
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        imports
    }

    fn import_spec(&self, spec: Node<'_>) -> Option<Import> {
        let path = spec.child_by_field_name("path")?;
        let path = unquote(self.node_text(path));

        match spec.child_by_field_name("name") {
            Some(name) if name.kind() == "package_identifier" => {
                Some(Import::aliased(self.node_text(name), path))
            }
            // `_` and `.`
            Some(_) => None,
            None => Some(Import::new(path)),
        }
    }

    /// First syntax error in the tree, in source order.
    fn first_error(&self) -> Option<ParseError> {
        let root = self.root();
        if !root.has_error() {
            return None;
        }

        let node = find_error_node(root).unwrap_or(root);
        let pos = node.start_position();
        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            let snippet: String = self.node_text(node).chars().take(20).collect();
            if snippet.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected '{}'", snippet.trim())
            }
        };

        Some(ParseError::Syntax {
            line: pos.row + 1,
            column: pos.column + 1,
            message,
        })
    }
}

fn find_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(find_error_node)
}

fn unquote(s: &str) -> &str {
    s.trim_matches(|c| c == '"' || c == '`')
}

/// A single import spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Explicit package name, e.g. `f` in `import f "fmt"`.
    pub alias: Option<String>,
    /// Import path without quotes.
    pub path: String,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    /// Name the package is referred to by in the importing file.
    ///
    /// Without an alias this is [`assumed_package_name`] of the path.
    pub fn local_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => assumed_package_name(&self.path),
        }
    }
}

/// Package name an unaliased import of `path` is assumed to declare.
///
/// A trailing major-version element (`/v2`) is skipped, then a `go-` prefix
/// is dropped and the name ends at the first character that can't appear in
/// an identifier: `github.com/mattn/go-sqlite3` is `sqlite3`,
/// `gopkg.in/yaml.v3` is `yaml` and `k8s.io/client-go` is `client`.
pub fn assumed_package_name(path: &str) -> &str {
    let mut elems = path.rsplit('/');
    let mut last = elems.next().unwrap_or(path);
    if is_major_version(last) {
        if let Some(prev) = elems.next() {
            last = prev;
        }
    }

    let name = last.strip_prefix("go-").unwrap_or(last);
    let end = name
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(name.len());
    &name[..end]
}

fn is_major_version(elem: &str) -> bool {
    match elem.strip_prefix('v') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
