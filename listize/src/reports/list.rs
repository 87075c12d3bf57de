//! List command report data structures.

use listize_ir::{Material, Scope};

use super::output::{Output, Report};

/// Materials found in a package.
#[derive(Debug)]
pub struct ListReport {
    pub materials: Vec<Material>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(first) = self.materials.first() {
            out.key_value("Package", &first.package_name);
        }

        let mut empty = true;
        for material in self.materials.iter().filter(|m| !m.is_empty()) {
            empty = false;
            out.newline();
            out.section(&material.source_path.display().to_string());
            for strukt in &material.structs {
                let fields = strukt
                    .fields
                    .iter()
                    .map(|f| format!("{} {}", f.name, f.ty))
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut item = format!("{} {{ {} }}", strukt.name, fields);
                if strukt.scope == Scope::Function {
                    item.push_str(" (function scope)");
                }
                out.list_item(&item);
            }
        }

        if empty {
            out.preformatted("No structs found");
        }
    }
}

#[cfg(test)]
mod tests {
    use listize_ir::{Field, Struct};

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            materials: vec![
                Material::new("model", "doc.go"),
                Material::new("model", "user.go").with_struct(
                    Struct::new("User")
                        .field(Field::new("Name", "string"))
                        .field(Field::new("Tags", "[]string")),
                ),
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "Package: model\n\nuser.go:\n  - User { Name string, Tags []string }"
        );
    }

    #[test]
    fn test_render_marks_function_scope() {
        let report = ListReport {
            materials: vec![
                Material::new("model", "h.go")
                    .with_struct(Struct::new("Local").scope(Scope::Function)),
            ],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.text(),
            "Package: model\n\nh.go:\n  - Local {  } (function scope)"
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            materials: vec![Material::new("model", "doc.go")],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.text(), "Package: model\nNo structs found");
    }
}
