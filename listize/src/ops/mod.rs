//! Core operations.
//!
//! This module contains the business logic for listize commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod list;

pub use generate::{GenOptions, generate};
pub use list::list;
