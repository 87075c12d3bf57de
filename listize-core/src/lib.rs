//! Core utilities for the listize generator.
//!
//! This crate provides the write-back step for generated files and the
//! small naming helpers shared by the extractor, the generator and the CLI.

mod file;
mod naming;

pub use file::{GeneratedFile, Overwrite, WriteResult};
pub use naming::{GO_EXTENSION, is_go_identifier, output_path, suffixed};
