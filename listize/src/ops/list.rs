//! List operation - structs and fields found in a package.

use std::path::Path;

use eyre::{Context, Result};
use listize_extract::{CollectOptions, collect_materials};

use crate::reports::ListReport;

/// Collect the materials of the package in `dir`.
pub fn list(dir: &Path, exclude_suffix: &str) -> Result<ListReport> {
    let options = CollectOptions::default().exclude_suffix(exclude_suffix);
    let materials = collect_materials(dir, &options)
        .wrap_err_with(|| format!("Failed to read Go package in {}", dir.display()))?;

    Ok(ListReport { materials })
}
