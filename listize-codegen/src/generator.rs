//! List type and accessor generation.

use listize_ir::{Field, Material, Struct};

use crate::builder::CodeFragment;
use crate::go::{GoFile, Method, Param, TypeDecl, format_source};
use crate::{GenerateError, ListNaming};

/// Marker line that tells Go tooling a file is generated.
pub const GENERATED_HEADER: &str = "Code generated by listize. DO NOT EDIT.";

/// Package clause used while formatting a single struct's output.
const SCRATCH_PACKAGE: &str = "hack";

/// Options for [`generate_for_material_with`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub naming: ListNaming,
    /// Prepend the [`GENERATED_HEADER`] comment.
    pub header: bool,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn naming(mut self, naming: ListNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

/// Generate a complete Go file for every struct of a material.
///
/// See [`generate_for_material_with`].
pub fn generate_for_material(material: &Material) -> Result<String, GenerateError> {
    generate_for_material_with(material, &GenerateOptions::default())
}

/// Generate a complete Go file for every struct of a material.
///
/// The output declares the material's package, imports what the field types
/// need (resolved against the material's source file), and for each struct in
/// order a list type followed by one accessor per field. Structs without
/// fields only get the list type. Structs declared inside function bodies
/// are out of reach of a package-level file and are left out.
pub fn generate_for_material_with(
    material: &Material,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let structs: Vec<&Struct> = material.package_structs().collect();
    if structs.is_empty() {
        return Err(GenerateError::NoStructs);
    }
    for strukt in &structs {
        check_name(strukt)?;
        check_fields(strukt)?;
    }

    let mut file = GoFile::new(&material.package_name);
    if options.header {
        file = file.header_comment(GENERATED_HEADER);
    }
    for strukt in structs {
        file = add_list(file, strukt, &options.naming);
    }

    let text = format_source(&file.render(), Some(material.source_path.as_path()))?;
    Ok(text)
}

/// Generate the list type and accessors for a single struct.
///
/// The result has no package clause and uses [`ListNaming::standalone`].
pub fn generate_for_struct(strukt: &Struct) -> Result<String, GenerateError> {
    generate_for_struct_with(strukt, &ListNaming::standalone())
}

pub fn generate_for_struct_with(
    strukt: &Struct,
    naming: &ListNaming,
) -> Result<String, GenerateError> {
    check_name(strukt)?;
    if strukt.fields.is_empty() {
        return Err(GenerateError::NoStructFields {
            name: strukt.name.clone(),
        });
    }
    check_fields(strukt)?;

    let file = add_list(GoFile::new(SCRATCH_PACKAGE), strukt, naming);
    let text = format_source(&file.render(), None)?;

    Ok(text
        .replacen(&format!("package {SCRATCH_PACKAGE}\n"), "", 1)
        .trim_start_matches([' ', '\n'])
        .to_string())
}

fn check_name(strukt: &Struct) -> Result<(), GenerateError> {
    if strukt.name.is_empty() {
        return Err(GenerateError::NoStructName);
    }
    Ok(())
}

fn check_fields(strukt: &Struct) -> Result<(), GenerateError> {
    for (index, field) in strukt.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(GenerateError::NoFieldName {
                strukt: strukt.name.clone(),
                index,
            });
        }
        if field.ty.is_empty() {
            return Err(GenerateError::NoFieldType {
                strukt: strukt.name.clone(),
                field: field.name.clone(),
            });
        }
    }
    Ok(())
}

fn add_list(file: GoFile, strukt: &Struct, naming: &ListNaming) -> GoFile {
    let list = naming.list_name(&strukt.name);
    let file = file.add(TypeDecl::pointer_slice(&list, &strukt.name));
    file.add_all(strukt.fields.iter().map(|f| accessor(&list, f, naming)))
}

/// `func (ss Users) Names() []string` collecting `Name` of every element.
fn accessor(list: &str, field: &Field, naming: &ListNaming) -> Method {
    let receiver = &naming.receiver;
    let element = &naming.element;

    Method::new(
        Param::new(receiver, list),
        naming.accessor_name(&field.name),
    )
    .returns(format!("[]{}", field.ty))
    .statement(format!("res := make([]{}, len({receiver}))", field.ty))
    .fragment(CodeFragment::braced(
        format!("for i, {element} := range {receiver}"),
        vec![CodeFragment::Line(format!(
            "res[i] = {element}.{}",
            field.name
        ))],
    ))
    .statement("return res")
}

#[cfg(test)]
mod tests {
    use listize_ir::Scope;

    use super::*;

    fn material(structs: Vec<Struct>) -> Material {
        structs
            .into_iter()
            .fold(Material::new("model", "model.go"), Material::with_struct)
    }

    #[test]
    fn test_struct_without_name() {
        let strukt = Struct::new("").field(Field::new("A", "int"));
        let err = generate_for_struct(&strukt).unwrap_err();
        assert!(matches!(err, GenerateError::NoStructName));
    }

    #[test]
    fn test_struct_without_fields() {
        let err = generate_for_struct(&Struct::new("Empty")).unwrap_err();
        assert!(
            matches!(err, GenerateError::NoStructFields { ref name } if name == "Empty"),
            "{err:?}"
        );
    }

    #[test]
    fn test_name_checked_before_fields() {
        let err = generate_for_struct(&Struct::new("")).unwrap_err();
        assert!(matches!(err, GenerateError::NoStructName));
    }

    #[test]
    fn test_field_without_name() {
        let strukt = Struct::new("T")
            .field(Field::new("A", "int"))
            .field(Field::new("", "int"));
        let err = generate_for_struct(&strukt).unwrap_err();
        assert!(
            matches!(err, GenerateError::NoFieldName { index: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn test_field_without_type() {
        let strukt = Struct::new("T").field(Field::new("A", ""));
        let err = generate_for_struct(&strukt).unwrap_err();
        assert!(
            matches!(err, GenerateError::NoFieldType { ref field, .. } if field == "A"),
            "{err:?}"
        );
    }

    #[test]
    fn test_first_bad_field_wins() {
        let strukt = Struct::new("T")
            .field(Field::new("A", ""))
            .field(Field::new("", "int"));
        let err = generate_for_struct(&strukt).unwrap_err();
        assert!(matches!(err, GenerateError::NoFieldType { .. }), "{err:?}");
    }

    #[test]
    fn test_material_without_structs() {
        let err = generate_for_material(&material(vec![])).unwrap_err();
        assert!(matches!(err, GenerateError::NoStructs));
        assert_eq!(err.to_string(), "no structs");
    }

    #[test]
    fn test_function_scoped_structs_left_out() {
        let out = generate_for_material(&material(vec![
            Struct::new("Local")
                .field(Field::new("X", "int"))
                .scope(Scope::Function),
            Struct::new("Empty"),
        ]))
        .unwrap();
        assert_eq!(out, "package model\n\ntype Emptys []*Empty\n");

        let only_local = material(vec![Struct::new("Local").scope(Scope::Function)]);
        let err = generate_for_material(&only_local).unwrap_err();
        assert!(matches!(err, GenerateError::NoStructs));
    }

    #[test]
    fn test_material_checks_each_struct() {
        let err = generate_for_material(&material(vec![
            Struct::new("A").field(Field::new("X", "int")),
            Struct::new(""),
        ]))
        .unwrap_err();
        assert!(matches!(err, GenerateError::NoStructName));

        let strukt = Struct::new("A").field(Field::new("X", ""));
        let err = generate_for_material(&material(vec![strukt])).unwrap_err();
        assert!(matches!(err, GenerateError::NoFieldType { .. }));
    }

    #[test]
    fn test_material_allows_struct_without_fields() {
        let out = generate_for_material(&material(vec![Struct::new("Empty")])).unwrap();
        assert_eq!(out, "package model\n\ntype Emptys []*Empty\n");
    }

    #[test]
    fn test_material_header() {
        let options = GenerateOptions::new().header(true);
        let out =
            generate_for_material_with(&material(vec![Struct::new("Empty")]), &options).unwrap();
        assert_eq!(
            out,
            "// Code generated by listize. DO NOT EDIT.\n\npackage model\n\ntype Emptys []*Empty\n"
        );
    }

    #[test]
    fn test_bad_package_name_is_format_error() {
        let mut m = material(vec![Struct::new("A").field(Field::new("X", "int"))]);
        m.package_name = String::new();
        let err = generate_for_material(&m).unwrap_err();
        assert!(matches!(err, GenerateError::Format(_)), "{err:?}");
    }

    #[test]
    fn test_struct_output_has_no_package_clause() {
        let strukt = Struct::new("T").field(Field::new("A", "int"));
        let out = generate_for_struct(&strukt).unwrap();
        assert!(out.starts_with("type TList []*T\n"), "{out}");
        assert!(!out.contains("package"));
    }
}
