//! Go source generation for the listize generator.
//!
//! For every struct `T` a list type (`type Ts []*T`) is emitted together with
//! one accessor per field returning that field's value for every element.
//!
//! # Module Organization
//!
//! - [`builder`] - Code building blocks (CodeBuilder, CodeFragment, Renderable)
//! - [`go`] - Go declarations, file layout, imports and the formatting pass
//! - [`generator`] - The two entry points, per material and per struct

pub mod builder;
mod error;
pub mod generator;
pub mod go;
mod naming;

pub use error::{FormatError, GenerateError};
pub use generator::{
    GENERATED_HEADER, GenerateOptions, generate_for_material, generate_for_material_with,
    generate_for_struct, generate_for_struct_with,
};
pub use go::format_source;
pub use naming::ListNaming;
