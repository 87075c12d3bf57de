//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenReport {
    /// Package name, if any source file was collected.
    pub package: Option<String>,
    /// Messages about the type filter.
    pub warnings: Vec<String>,
    /// Source files left without structs.
    pub skipped: Vec<PathBuf>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A generated file on disk.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Number of list types in the file.
    pub structs: usize,
    /// False when an existing file was left alone.
    pub written: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenReport {
    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        if let Some(package) = &self.package {
            out.key_value("Package", package);
        }

        if files.is_empty() {
            out.preformatted("No structs to generate.");
        } else {
            out.section("Generated");
            for file in files {
                let label = format!(
                    "{} ({} {})",
                    file.path.display(),
                    file.structs,
                    if file.structs == 1 { "type" } else { "types" }
                );
                if file.written {
                    out.added_item(&label);
                } else {
                    out.list_item(&format!("{label}, unchanged"));
                }
            }
        }

        self.render_skipped(out);
    }

    fn render_skipped(&self, out: &mut dyn Output) {
        if self.skipped.is_empty() {
            return;
        }
        out.newline();
        out.section("Skipped (no structs)");
        for path in &self.skipped {
            out.list_item(&path.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
