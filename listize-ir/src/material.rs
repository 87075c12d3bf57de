//! Extracted struct metadata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single named field of a struct.
///
/// `ty` is the canonical source rendering of the declared type, e.g.
/// `string`, `*pkg.T`, `[]*pkg.T` or `map[int]T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared.
    pub name: String,
    /// Rendered field type.
    #[serde(rename = "type")]
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Where a struct is declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Top level of the package, visible to generated files.
    #[default]
    Package,
    /// Inside a function or method body.
    Function,
}

/// A struct declaration with its fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    /// Declared type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    #[serde(default)]
    pub scope: Scope,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            scope: Scope::Package,
        }
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// Everything extracted from one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Name of the package the unit belongs to.
    pub package_name: String,
    /// Path of the originating source unit.
    pub source_path: PathBuf,
    /// Structs in declaration order.
    pub structs: Vec<Struct>,
}

impl Material {
    pub fn new(package_name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            package_name: package_name.into(),
            source_path: source_path.into(),
            structs: Vec::new(),
        }
    }

    /// Append a struct.
    pub fn with_struct(mut self, s: Struct) -> Self {
        self.structs.push(s);
        self
    }

    /// Keep only the structs whose names appear in `types`.
    ///
    /// An empty `types` slice keeps everything. Relative order is preserved.
    pub fn retain_types(&mut self, types: &[String]) {
        if types.is_empty() {
            return;
        }
        self.structs.retain(|s| types.iter().any(|t| t == &s.name));
    }

    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }

    /// Structs declared at package scope, in order.
    ///
    /// Only these can be named by code in another file of the package.
    pub fn package_structs(&self) -> impl Iterator<Item = &Struct> {
        self.structs.iter().filter(|s| s.scope == Scope::Package)
    }
}
