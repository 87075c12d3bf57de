//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod list;
mod output;

pub use generate::{GenReport, GenerationResult, PreviewFile, WrittenFile};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
