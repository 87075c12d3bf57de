//! Material collection over a package directory.

use std::path::Path;

use listize_ir::Material;
use rayon::prelude::*;

use crate::{
    ExtractError, GoTypeRenderer, SourceUnit, StructExtractor, TypeRenderer, discover_package,
    exclude,
};

/// Options for [`collect_materials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// Source units ending with this suffix are skipped (e.g. previous output).
    pub exclude_suffix: String,
    /// Process source units on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            exclude_suffix: "_gen.go".to_string(),
            parallel: false,
        }
    }
}

impl CollectOptions {
    pub fn exclude_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.exclude_suffix = suffix.into();
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Collect one [`Material`] per source unit of the package in `dir`.
pub fn collect_materials(
    dir: impl AsRef<Path>,
    opts: &CollectOptions,
) -> Result<Vec<Material>, ExtractError> {
    collect_materials_with(dir, opts, &StructExtractor::<GoTypeRenderer>::new())
}

/// Like [`collect_materials`] with a caller-provided extractor.
///
/// Materials come back in source unit order. The first failing unit aborts
/// the whole collection; with `parallel` set, "first" still means first in
/// unit order, so the reported error doesn't depend on scheduling.
pub fn collect_materials_with<R>(
    dir: impl AsRef<Path>,
    opts: &CollectOptions,
    extractor: &StructExtractor<R>,
) -> Result<Vec<Material>, ExtractError>
where
    R: TypeRenderer + Sync,
{
    let package = discover_package(dir)?;
    let paths = exclude(package.files, &opts.exclude_suffix);
    let name = package.name.as_str();

    if opts.parallel {
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| collect_unit(name, path, extractor))
            .collect();
        results.into_iter().collect()
    } else {
        paths
            .iter()
            .map(|path| collect_unit(name, path, extractor))
            .collect()
    }
}

fn collect_unit<R: TypeRenderer>(
    package_name: &str,
    path: &Path,
    extractor: &StructExtractor<R>,
) -> Result<Material, ExtractError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let unit = SourceUnit::parse(text).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let structs = extractor
        .extract(&unit)
        .map_err(|source| ExtractError::Render {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Material {
        package_name: package_name.to_string(),
        source_path: path.to_path_buf(),
        structs,
    })
}
