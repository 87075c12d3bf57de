//! Layout of a whole Go source file.

use super::ImportSet;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Pre-rendered text, one fragment per line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

/// A Go file: header comments, package clause, imports, declarations.
///
/// ```
/// use listize_codegen::go::{GoFile, TypeDecl};
///
/// let text = GoFile::new("model")
///     .add(TypeDecl::pointer_slice("Users", "User"))
///     .render();
///
/// assert_eq!(text, "package model\n\ntype Users []*User\n");
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    header: Vec<CodeFragment>,
    package: String,
    imports: ImportSet,
    body: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            header: Vec::new(),
            package: package.into(),
            imports: ImportSet::new(),
            body: Vec::new(),
        }
    }

    /// `// text` above the package clause.
    pub fn header_comment(mut self, text: impl Into<String>) -> Self {
        self.header.push(CodeFragment::Comment(text.into()));
        self
    }

    /// Lines placed verbatim above the package clause.
    pub fn header_raw(mut self, text: &str) -> Self {
        self.header.extend(RawCode::new(text).to_fragments());
        self
    }

    pub fn imports(mut self, imports: &ImportSet) -> Self {
        for import in imports.iter() {
            self.imports.insert(import);
        }
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body.extend(nodes.into_iter().map(|n| n.to_fragments()));
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new();

        if !self.header.is_empty() {
            builder.emit(&self.header);
            builder.push_blank();
        }

        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            builder.emit(&self.imports);
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
