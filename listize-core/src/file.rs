use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A generated source file waiting to be written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl GeneratedFile {
    /// Create a file that always overwrites whatever is on disk.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Change the overwrite policy.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the target path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the target already exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, unless the policy says to keep an existing one.
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// An existing file was kept.
    Skipped,
}

/// Policy for output paths that already exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace the file, the normal case for `_gen.go` output.
    #[default]
    Always,
    /// Keep the existing file.
    IfMissing,
}
