//! Go struct extraction for the listize generator.
//!
//! # Module Organization
//!
//! - [`parser`] - tree-sitter-go wrapper ([`SourceUnit`])
//! - [`render`] - canonical rendering of type expressions ([`TypeRenderer`])
//! - [`extractor`] - struct discovery in a single unit ([`StructExtractor`])
//! - [`constraint`] - GOOS/GOARCH file names and `//go:build` evaluation
//! - [`discovery`] - package directory scan and suffix filtering
//! - [`collector`] - one [`Material`](listize_ir::Material) per source unit

pub mod collector;
pub mod constraint;
pub mod discovery;
mod error;
pub mod extractor;
pub mod parser;
pub mod render;

pub use collector::{CollectOptions, collect_materials, collect_materials_with};
pub use constraint::BuildContext;
pub use discovery::{Package, discover_package, discover_package_for, exclude};
pub use error::{ConstraintError, DiscoveryError, ExtractError, ParseError, RenderError};
pub use extractor::{StructExtractor, extract_structs};
pub use parser::{Import, SourceUnit, assumed_package_name};
pub use render::{GoTypeRenderer, TypeRenderer};
pub use tree_sitter::Node;
