//! Code building blocks.
//!
//! Declarations describe themselves as [`CodeFragment`]s through
//! [`Renderable`], and [`CodeBuilder`] turns fragments into indented text.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::{INDENT, write_indent};
pub use renderable::{CodeFragment, Renderable};
