//! Intermediate representation types for the listize generator.
//!
//! These are the records handed from extraction to code generation:
//!
//! ```text
//! *.go (source units) → listize-extract (Material) → listize-codegen (Go source)
//! ```
//!
//! A [`Material`] owns its [`Struct`]s and every [`Struct`] owns its
//! [`Field`]s. Nothing is shared between materials, so they can be produced
//! and consumed independently.

mod material;

pub use material::{Field, Material, Scope, Struct};
