//! Names used in generated list types and accessors.

use listize_core::suffixed;

/// Naming scheme for generated code.
///
/// Pluralization is a plain suffix: `Status` becomes `Statuss`. This keeps
/// output predictable and is the knob to turn for other conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNaming {
    /// Appended to the struct name to name the list type.
    pub list_suffix: String,
    /// Appended to the field name to name the accessor.
    pub accessor_suffix: String,
    /// Receiver variable of accessors.
    pub receiver: String,
    /// Loop variable bound to each element.
    pub element: String,
}

impl ListNaming {
    /// `Users` list type, `(ss Users) Names()`, used for whole packages.
    pub fn package() -> Self {
        Self {
            list_suffix: "s".to_string(),
            accessor_suffix: "s".to_string(),
            receiver: "ss".to_string(),
            element: "s".to_string(),
        }
    }

    /// `UserList` list type, `(list UserList) Names()`, used for single structs.
    pub fn standalone() -> Self {
        Self {
            list_suffix: "List".to_string(),
            accessor_suffix: "s".to_string(),
            receiver: "list".to_string(),
            element: "v".to_string(),
        }
    }

    pub fn with_list_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.list_suffix = suffix.into();
        self
    }

    pub fn with_accessor_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.accessor_suffix = suffix.into();
        self
    }

    pub fn list_name(&self, struct_name: &str) -> String {
        suffixed(struct_name, &self.list_suffix)
    }

    pub fn accessor_name(&self, field_name: &str) -> String {
        suffixed(field_name, &self.accessor_suffix)
    }
}

impl Default for ListNaming {
    fn default() -> Self {
        Self::package()
    }
}
