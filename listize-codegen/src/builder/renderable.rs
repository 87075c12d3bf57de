//! Declarative code fragments.

/// A piece of code, independent of the indentation it ends up at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// Single line at the current indentation.
    Line(String),
    /// Empty line.
    Blank,
    /// `header`, an indented body, then the closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// `// text` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// `header {` ... `}` block, the shape of every Go body.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: format!("{} {{", header.into()),
            body,
            close: "}".to_string(),
        }
    }
}

/// Something that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
