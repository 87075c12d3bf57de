//! Configuration for the listize generator.
//!
//! An optional `listize.toml` in the package directory tunes discovery and
//! naming. Every value has a default, so an absent file is the same as an
//! empty one.
//!
//! ```toml
//! [generate]
//! exclude_suffix = "_gen.go"
//! output_suffix = "_gen.go"
//! accessor_suffix = "s"
//! list_suffix = "s"
//! types = ["User"]
//! header = true
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;

pub use config::{Config, DEFAULT_SUFFIX, GenerateConfig};
pub use error::{Error, Result};
pub use file::{CONFIG_FILE_NAME, ListizeToml};
