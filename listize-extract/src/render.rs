//! Canonical rendering of Go type expressions.
//!
//! Field types are rendered from the syntax tree rather than copied from the
//! source, so `map[ int ]T` and a multi-line inline struct come out the same
//! way `gofmt` would print them on a single line.

use tree_sitter::Node;

use crate::RenderError;

/// Turns a type expression node back into source text.
///
/// The extractor takes this as a parameter so the rendering step can be
/// swapped, e.g. for a renderer that always fails.
pub trait TypeRenderer {
    fn render(&self, node: Node<'_>, source: &[u8]) -> Result<String, RenderError>;
}

/// Default renderer producing gofmt-style single-line type text.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeRenderer;

impl TypeRenderer for GoTypeRenderer {
    fn render(&self, node: Node<'_>, source: &[u8]) -> Result<String, RenderError> {
        let mut out = String::new();
        write_type(&mut out, node, source)?;
        Ok(out)
    }
}

fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

fn unsupported(node: Node<'_>) -> RenderError {
    RenderError::Unsupported {
        kind: node.kind().to_string(),
        line: line_of(node),
    }
}

fn text<'a>(node: Node<'_>, source: &'a [u8]) -> Result<&'a str, RenderError> {
    node.utf8_text(source).map_err(|_| RenderError::Utf8 {
        line: line_of(node),
    })
}

fn field<'t>(node: Node<'t>, name: &str) -> Result<Node<'t>, RenderError> {
    node.child_by_field_name(name).ok_or_else(|| unsupported(node))
}

/// Named children with comments filtered out.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// The single type operand of wrapper nodes like `*T` or `(T)`.
fn only_child(node: Node<'_>) -> Result<Node<'_>, RenderError> {
    named_children(node)
        .into_iter()
        .next()
        .ok_or_else(|| unsupported(node))
}

fn write_type(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    if node.is_error() || node.is_missing() {
        return Err(unsupported(node));
    }

    match node.kind() {
        "type_identifier" | "package_identifier" | "identifier" | "field_identifier" => {
            out.push_str(text(node, source)?);
        }
        "qualified_type" => {
            out.push_str(text(field(node, "package")?, source)?);
            out.push('.');
            out.push_str(text(field(node, "name")?, source)?);
        }
        "pointer_type" => {
            out.push('*');
            write_type(out, only_child(node)?, source)?;
        }
        "parenthesized_type" => {
            out.push('(');
            write_type(out, only_child(node)?, source)?;
            out.push(')');
        }
        "slice_type" => {
            out.push_str("[]");
            write_type(out, field(node, "element")?, source)?;
        }
        "array_type" => {
            let length = text(field(node, "length")?, source)?;
            out.push('[');
            out.push_str(&collapse_whitespace(length));
            out.push(']');
            write_type(out, field(node, "element")?, source)?;
        }
        "implicit_length_array_type" => {
            out.push_str("[...]");
            write_type(out, field(node, "element")?, source)?;
        }
        "map_type" => {
            out.push_str("map[");
            write_type(out, field(node, "key")?, source)?;
            out.push(']');
            write_type(out, field(node, "value")?, source)?;
        }
        "channel_type" => {
            out.push_str(channel_prefix(node));
            write_type(out, field(node, "value")?, source)?;
        }
        "generic_type" => {
            write_type(out, field(node, "type")?, source)?;
            write_type_arguments(out, field(node, "type_arguments")?, source)?;
        }
        "function_type" => {
            out.push_str("func");
            write_signature(out, node, source)?;
        }
        "struct_type" => write_struct(out, node, source)?,
        "interface_type" => write_interface(out, node, source)?,
        _ => return Err(unsupported(node)),
    }

    Ok(())
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn channel_prefix(node: Node<'_>) -> &'static str {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| c.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", "chan", ..] => "<-chan ",
        ["chan", "<-", ..] => "chan<- ",
        _ => "chan ",
    }
}

fn write_type_arguments(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    out.push('[');
    for (i, arg) in named_children(node).into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_type_elem(out, arg, source)?;
    }
    out.push(']');
    Ok(())
}

/// A `type_elem` is a `|` separated union; anything else is a plain type.
fn write_type_elem(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    if node.kind() != "type_elem" {
        return write_type(out, node, source);
    }
    for (i, term) in named_children(node).into_iter().enumerate() {
        if i > 0 {
            out.push_str(" | ");
        }
        match term.kind() {
            "negated_type" => {
                out.push('~');
                write_type(out, only_child(term)?, source)?;
            }
            _ => write_type(out, term, source)?,
        }
    }
    Ok(())
}

/// `(params) result` of a function type or interface method.
fn write_signature(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    write_parameter_list(out, field(node, "parameters")?, source)?;

    if let Some(result) = node.child_by_field_name("result") {
        out.push(' ');
        if result.kind() == "parameter_list" {
            write_parameter_list(out, result, source)?;
        } else {
            write_type(out, result, source)?;
        }
    }
    Ok(())
}

fn write_parameter_list(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    out.push('(');
    for (i, param) in named_children(node).into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_names(out, param, source)?;
        if param.kind() == "variadic_parameter_declaration" {
            out.push_str("...");
        } else if param.kind() != "parameter_declaration" {
            return Err(unsupported(param));
        }
        write_type(out, field(param, "type")?, source)?;
    }
    out.push(')');
    Ok(())
}

/// Comma separated `name` fields followed by a space, if there are any.
fn write_names(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    let mut cursor = node.walk();
    let names: Vec<Node<'_>> = node.children_by_field_name("name", &mut cursor).collect();
    if names.is_empty() {
        return Ok(());
    }
    for (i, name) in names.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(text(name, source)?);
    }
    out.push(' ');
    Ok(())
}

fn write_struct(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    let list = named_children(node)
        .into_iter()
        .find(|n| n.kind() == "field_declaration_list");
    let fields: Vec<Node<'_>> = list
        .map(|l| {
            named_children(l)
                .into_iter()
                .filter(|n| n.kind() == "field_declaration")
                .collect()
        })
        .unwrap_or_default();

    if fields.is_empty() {
        out.push_str("struct{}");
        return Ok(());
    }

    out.push_str("struct{ ");
    for (i, decl) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        write_names(out, decl, source)?;
        if is_embedded_pointer(decl) {
            out.push('*');
        }
        write_type(out, field(decl, "type")?, source)?;
        if let Some(tag) = decl.child_by_field_name("tag") {
            out.push(' ');
            out.push_str(text(tag, source)?);
        }
    }
    out.push_str(" }");
    Ok(())
}

/// Embedded fields keep their `*` as an anonymous token, not as a pointer_type.
fn is_embedded_pointer(decl: Node<'_>) -> bool {
    let mut cursor = decl.walk();
    let has_names = decl.children_by_field_name("name", &mut cursor).next().is_some();
    let mut cursor = decl.walk();
    let has_star = decl
        .children(&mut cursor)
        .any(|c| !c.is_named() && c.kind() == "*");
    !has_names && has_star
}

fn write_interface(out: &mut String, node: Node<'_>, source: &[u8]) -> Result<(), RenderError> {
    let elems = named_children(node);
    if elems.is_empty() {
        out.push_str("interface{}");
        return Ok(());
    }

    out.push_str("interface{ ");
    for (i, elem) in elems.into_iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        match elem.kind() {
            "method_elem" | "method_spec" => {
                out.push_str(text(field(elem, "name")?, source)?);
                write_signature(out, elem, source)?;
            }
            "type_elem" | "constraint_elem" => write_type_elem(out, elem, source)?,
            _ => write_type(out, elem, source)?,
        }
    }
    out.push_str(" }");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceUnit;

    /// Render the type of the first field of `type T struct { ... }`.
    fn render_field(decl: &str) -> Result<String, RenderError> {
        let src = format!("package p\n\ntype T struct {{\n\t{decl}\n}}\n");
        let unit = SourceUnit::parse(src).unwrap();
        let ty = first_field_type(unit.root()).expect("field type");
        GoTypeRenderer.render(ty, unit.bytes())
    }

    fn first_field_type(node: Node<'_>) -> Option<Node<'_>> {
        if node.kind() == "field_declaration" {
            return node.child_by_field_name("type");
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        children.into_iter().find_map(first_field_type)
    }

    #[test]
    fn test_simple_types() {
        assert_eq!(render_field("A string").unwrap(), "string");
        assert_eq!(render_field("A *string").unwrap(), "*string");
        assert_eq!(render_field("A Field").unwrap(), "Field");
        assert_eq!(render_field("A *Field").unwrap(), "*Field");
    }

    #[test]
    fn test_composite_types() {
        assert_eq!(render_field("A []Field").unwrap(), "[]Field");
        assert_eq!(render_field("A []*Field").unwrap(), "[]*Field");
        assert_eq!(render_field("A map[int]Field").unwrap(), "map[int]Field");
        assert_eq!(render_field("A map[*Field]int").unwrap(), "map[*Field]int");
        assert_eq!(render_field("A [ 4 ]byte").unwrap(), "[4]byte");
        assert_eq!(render_field("A [N * 2]byte").unwrap(), "[N * 2]byte");
        assert_eq!(
            render_field("A map[string][]*other.T").unwrap(),
            "map[string][]*other.T"
        );
    }

    #[test]
    fn test_qualified_types() {
        assert_eq!(render_field("A field.Field").unwrap(), "field.Field");
        assert_eq!(render_field("A *field.Field").unwrap(), "*field.Field");
    }

    #[test]
    fn test_inline_struct_is_single_line() {
        assert_eq!(
            render_field("A struct {\n\t\tfield string\n\t}").unwrap(),
            "struct{ field string }"
        );
        assert_eq!(
            render_field("A *struct {\n\t\tfield string\n\t}").unwrap(),
            "*struct{ field string }"
        );
        assert_eq!(render_field("A struct{}").unwrap(), "struct{}");
        assert_eq!(
            render_field("A struct {\n\t\ta, b int `json:\"a\"`\n\t\t*Embedded\n\t}").unwrap(),
            "struct{ a, b int `json:\"a\"`; *Embedded }"
        );
    }

    #[test]
    fn test_channels() {
        assert_eq!(render_field("A chan int").unwrap(), "chan int");
        assert_eq!(render_field("A chan<- int").unwrap(), "chan<- int");
        assert_eq!(render_field("A <-chan int").unwrap(), "<-chan int");
    }

    #[test]
    fn test_function_types() {
        assert_eq!(render_field("A func()").unwrap(), "func()");
        assert_eq!(
            render_field("A func(a, b int, rest ...string) (int, error)").unwrap(),
            "func(a, b int, rest ...string) (int, error)"
        );
        assert_eq!(render_field("A func(int) error").unwrap(), "func(int) error");
    }

    #[test]
    fn test_interfaces() {
        assert_eq!(render_field("A interface{}").unwrap(), "interface{}");
        assert_eq!(
            render_field("A interface {\n\t\tClose() error\n\t}").unwrap(),
            "interface{ Close() error }"
        );
    }

    #[test]
    fn test_generic_type() {
        assert_eq!(render_field("A List[int]").unwrap(), "List[int]");
        assert_eq!(
            render_field("A pkg.Pair[string, *T]").unwrap(),
            "pkg.Pair[string, *T]"
        );
    }
}
