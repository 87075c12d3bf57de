//! Go declarations, file layout and formatting.

mod decls;
mod file;
mod format;
mod imports;

pub use decls::{Method, Param, TypeDecl};
pub use file::{GoFile, RawCode};
pub use format::format_source;
pub use imports::{ImportResolver, ImportSet, STD_PACKAGES};
