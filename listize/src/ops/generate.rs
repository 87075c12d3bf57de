//! Generate operation - list types and accessors for a package.

use std::path::Path;

use eyre::{Context, Result};
use listize_codegen::{GenerateOptions, ListNaming, generate_for_material_with};
use listize_config::GenerateConfig;
use listize_core::{GeneratedFile, Overwrite, WriteResult, output_path};
use listize_extract::{CollectOptions, collect_materials};
use listize_ir::Material;

use crate::reports::{GenReport, GenerationResult, PreviewFile, WrittenFile};

/// Options for the generate operation.
pub struct GenOptions<'a> {
    /// Package directory.
    pub dir: &'a Path,
    /// Settings after command-line overrides.
    pub config: GenerateConfig,
    /// Whether to parse source files in parallel.
    pub parallel: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// What to do with output files that already exist.
    pub overwrite: Overwrite,
}

/// Execute the generate operation.
///
/// Collects one material per source file, drops structs not selected by the
/// type filter and writes one output file per material that still has
/// package-level structs.
pub fn generate(opts: GenOptions) -> Result<GenReport> {
    let config = &opts.config;
    let collect = CollectOptions::default()
        .exclude_suffix(&config.exclude_suffix)
        .parallel(opts.parallel);
    let materials = collect_materials(opts.dir, &collect)
        .wrap_err_with(|| format!("Failed to read Go package in {}", opts.dir.display()))?;

    let naming = ListNaming::package()
        .with_list_suffix(&config.list_suffix)
        .with_accessor_suffix(&config.accessor_suffix);
    let options = GenerateOptions::new().naming(naming).header(config.header);

    let package = materials.first().map(|m| m.package_name.clone());
    let warnings = unknown_types(&config.types, &materials)
        .into_iter()
        .map(|t| format!("no struct named '{t}' in {}", opts.dir.display()))
        .collect();

    let mut files = Vec::new();
    let mut skipped = Vec::new();
    for mut material in materials {
        material.retain_types(&config.types);
        let structs = material.package_structs().count();
        if structs == 0 {
            skipped.push(material.source_path);
            continue;
        }
        let content = generate_for_material_with(&material, &options).wrap_err_with(|| {
            format!("Failed to generate code for {}", material.source_path.display())
        })?;
        let path = output_path(&material.source_path, &config.output_suffix);
        files.push((
            GeneratedFile::new(path, content).overwrite(opts.overwrite),
            structs,
        ));
    }

    let result = if opts.dry_run {
        GenerationResult::Preview(
            files
                .into_iter()
                .map(|(file, _)| PreviewFile {
                    path: file.path().display().to_string(),
                    content: file.content().to_string(),
                })
                .collect(),
        )
    } else {
        let mut written = Vec::new();
        for (file, structs) in files {
            let result = file.write()?;
            written.push(WrittenFile {
                path: file.path().to_path_buf(),
                structs,
                written: matches!(result, WriteResult::Written),
            });
        }
        GenerationResult::Written(written)
    };

    Ok(GenReport {
        package,
        warnings,
        skipped,
        result,
    })
}

/// Requested type names no material declares at package scope.
fn unknown_types<'a>(types: &'a [String], materials: &[Material]) -> Vec<&'a str> {
    types
        .iter()
        .filter(|t| {
            !materials
                .iter()
                .any(|m| m.package_structs().any(|s| &s.name == *t))
        })
        .map(String::as_str)
        .collect()
}
