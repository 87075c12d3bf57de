//! Struct discovery in a single source unit.

use listize_ir::{Field, Scope, Struct};
use tree_sitter::Node;

use crate::{GoTypeRenderer, RenderError, SourceUnit, TypeRenderer};

/// Walks a parsed unit and collects its struct declarations.
///
/// Declarations are found anywhere in the tree, including inside function
/// bodies (marked [`Scope::Function`]), and come out in source order. Non-struct type declarations are
/// skipped without looking inside them, and field types are never searched
/// for further declarations: an inline `struct{...}` field stays opaque text.
#[derive(Debug, Clone, Default)]
pub struct StructExtractor<R = GoTypeRenderer> {
    renderer: R,
}

impl StructExtractor<GoTypeRenderer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: TypeRenderer> StructExtractor<R> {
    /// Use a custom type renderer.
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Extract every named, non-generic struct declaration from `unit`.
    ///
    /// Fails on the first field type the renderer rejects.
    pub fn extract(&self, unit: &SourceUnit) -> Result<Vec<Struct>, RenderError> {
        let mut structs = Vec::new();
        self.visit(unit.root(), unit, Scope::Package, &mut structs)?;
        Ok(structs)
    }

    fn visit(
        &self,
        node: Node<'_>,
        unit: &SourceUnit,
        scope: Scope,
        out: &mut Vec<Struct>,
    ) -> Result<(), RenderError> {
        match node.kind() {
            "type_declaration" => self.visit_type_declaration(node, unit, scope, out),
            "block" => self.visit_children(node, unit, Scope::Function, out),
            _ => self.visit_children(node, unit, scope, out),
        }
    }

    fn visit_children(
        &self,
        node: Node<'_>,
        unit: &SourceUnit,
        scope: Scope,
        out: &mut Vec<Struct>,
    ) -> Result<(), RenderError> {
        let mut cursor = node.walk();
        let children: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        for child in children {
            self.visit(child, unit, scope, out)?;
        }
        Ok(())
    }

    fn visit_type_declaration(
        &self,
        decl: Node<'_>,
        unit: &SourceUnit,
        scope: Scope,
        out: &mut Vec<Struct>,
    ) -> Result<(), RenderError> {
        let mut cursor = decl.walk();
        // `type_alias` specs are never structs of their own.
        let specs: Vec<Node<'_>> = decl
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "type_spec")
            .collect();

        for spec in specs {
            let Some(ty) = spec.child_by_field_name("type") else {
                continue;
            };
            if ty.kind() != "struct_type" {
                continue;
            }
            // `type Pair[K, V any] struct` has no list type expressible as `[]*Pair`.
            if spec.child_by_field_name("type_parameters").is_some() {
                continue;
            }
            let Some(name) = spec.child_by_field_name("name") else {
                continue;
            };

            let mut s = Struct::new(unit.node_text(name)).scope(scope);
            s.fields = self.fields(ty, unit)?;
            out.push(s);
        }
        Ok(())
    }

    fn fields(&self, struct_type: Node<'_>, unit: &SourceUnit) -> Result<Vec<Field>, RenderError> {
        let mut fields = Vec::new();

        let mut cursor = struct_type.walk();
        let Some(list) = struct_type
            .named_children(&mut cursor)
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return Ok(fields);
        };

        let mut cursor = list.walk();
        let decls: Vec<Node<'_>> = list
            .named_children(&mut cursor)
            .filter(|n| n.kind() == "field_declaration")
            .collect();

        for decl in decls {
            let mut cursor = decl.walk();
            let names: Vec<Node<'_>> = decl.children_by_field_name("name", &mut cursor).collect();
            // Embedded fields bind no name.
            if names.is_empty() {
                continue;
            }
            let Some(ty) = decl.child_by_field_name("type") else {
                continue;
            };

            let rendered = self.renderer.render(ty, unit.bytes())?;
            for name in names {
                fields.push(Field::new(unit.node_text(name), rendered.clone()));
            }
        }

        Ok(fields)
    }
}

/// Extract structs with the default renderer.
pub fn extract_structs(unit: &SourceUnit) -> Result<Vec<Struct>, RenderError> {
    StructExtractor::new().extract(unit)
}
