//! Top-level Go declarations.

use crate::builder::{CodeFragment, Renderable};

/// `type Name Underlying`
#[derive(Debug, Clone)]
pub struct TypeDecl {
    name: String,
    underlying: String,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, underlying: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            underlying: underlying.into(),
        }
    }

    /// `type Name []*Element`
    pub fn pointer_slice(name: impl Into<String>, element: &str) -> Self {
        Self::new(name, format!("[]*{element}"))
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "type {} {}",
            self.name, self.underlying
        ))]
    }
}

/// A receiver or parameter, `name Type`.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn format(&self) -> String {
        format!("{} {}", self.name, self.ty)
    }
}

/// A method with a value receiver and no parameters.
#[derive(Debug, Clone)]
pub struct Method {
    receiver: Param,
    name: String,
    returns: Option<String>,
    body: Vec<CodeFragment>,
}

impl Method {
    pub fn new(receiver: Param, name: impl Into<String>) -> Self {
        Self {
            receiver,
            name: name.into(),
            returns: None,
            body: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let head = format!("func ({}) {}()", self.receiver.format(), self.name);
        match &self.returns {
            Some(ret) => format!("{head} {ret}"),
            None => head,
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.signature(), self.body.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::new();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_pointer_slice() {
        let decl = TypeDecl::pointer_slice("Users", "User");
        assert_eq!(render(&decl), "type Users []*User\n");
    }

    #[test]
    fn test_method() {
        let method = Method::new(Param::new("ss", "Users"), "Len")
            .returns("int")
            .statement("return len(ss)");
        assert_eq!(
            render(&method),
            "func (ss Users) Len() int {\n\treturn len(ss)\n}\n"
        );
    }

    #[test]
    fn test_method_without_result() {
        let method = Method::new(Param::new("ss", "Users"), "Reset")
            .statement("clear(ss)");
        assert_eq!(
            render(&method),
            "func (ss Users) Reset() {\n\tclear(ss)\n}\n"
        );
    }
}
