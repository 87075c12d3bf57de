//! Configuration types and parsing.

use std::str::FromStr;

use listize_core::{GO_EXTENSION, is_go_identifier};
use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, error::SourceContext};

/// Default suffix for generated files, also the default exclusion suffix.
pub const DEFAULT_SUFFIX: &str = "_gen.go";

const DEFAULT_NAME_SUFFIX: &str = "s";

/// Root of listize.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    generate: RawGenerate,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGenerate {
    exclude_suffix: Option<Spanned<String>>,
    output_suffix: Option<Spanned<String>>,
    accessor_suffix: Option<Spanned<String>>,
    list_suffix: Option<Spanned<String>>,
    #[serde(default)]
    types: Vec<String>,
    header: Option<bool>,
}

/// Resolved `[generate]` settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Source units ending with this suffix are skipped during discovery.
    pub exclude_suffix: String,
    /// Suffix replacing `.go` in generated file names.
    pub output_suffix: String,
    /// Appended to a field name to name its accessor.
    pub accessor_suffix: String,
    /// Appended to a struct name to name its list type.
    pub list_suffix: String,
    /// Only generate for these structs (empty means all).
    pub types: Vec<String>,
    /// Prepend the "Code generated" header.
    pub header: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            exclude_suffix: DEFAULT_SUFFIX.to_string(),
            output_suffix: DEFAULT_SUFFIX.to_string(),
            accessor_suffix: DEFAULT_NAME_SUFFIX.to_string(),
            list_suffix: DEFAULT_NAME_SUFFIX.to_string(),
            types: Vec::new(),
            header: true,
        }
    }
}

impl Config {
    /// The `[generate]` section with defaults filled in.
    pub fn generate(&self) -> GenerateConfig {
        let raw = &self.generate;
        let defaults = GenerateConfig::default();
        let value = |v: &Option<Spanned<String>>, default: String| {
            v.as_ref().map(|s| s.get_ref().clone()).unwrap_or(default)
        };

        GenerateConfig {
            exclude_suffix: value(&raw.exclude_suffix, defaults.exclude_suffix),
            output_suffix: value(&raw.output_suffix, defaults.output_suffix),
            accessor_suffix: value(&raw.accessor_suffix, defaults.accessor_suffix),
            list_suffix: value(&raw.list_suffix, defaults.list_suffix),
            types: raw.types.clone(),
            header: raw.header.unwrap_or(defaults.header),
        }
    }

    /// Parse listize.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, crate::CONFIG_FILE_NAME)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate(&config.generate, &ctx)?;
    Ok(config)
}

fn validate(raw: &RawGenerate, ctx: &SourceContext) -> Result<()> {
    for (key, value) in [
        ("exclude_suffix", &raw.exclude_suffix),
        ("output_suffix", &raw.output_suffix),
    ] {
        let Some(v) = value else { continue };
        if v.get_ref().len() <= GO_EXTENSION.len() || !v.get_ref().ends_with(GO_EXTENSION) {
            return Err(ctx.invalid_value_error(
                key,
                v.get_ref(),
                format!("file suffixes must end with '{GO_EXTENSION}', e.g. '{DEFAULT_SUFFIX}'"),
                Some(v.span()),
            ));
        }
    }

    for (key, value) in [
        ("accessor_suffix", &raw.accessor_suffix),
        ("list_suffix", &raw.list_suffix),
    ] {
        let Some(v) = value else { continue };
        if !is_name_suffix(v.get_ref()) {
            return Err(ctx.invalid_value_error(
                key,
                v.get_ref(),
                "name suffixes must be non-empty and use only letters, digits and underscores",
                Some(v.span()),
            ));
        }
    }

    Ok(())
}

fn is_name_suffix(s: &str) -> bool {
    // Prefixing with a letter lets digits lead, e.g. "2".
    !s.is_empty() && is_go_identifier(&format!("x{s}"))
}
