use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use listize_config::GenerateConfig;
use listize_core::Overwrite;

use super::load_config;
use crate::{
    ops::{self, GenOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenCommand {
    /// Package directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Only generate for this struct (repeatable)
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Parse source files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Leave existing output files untouched
    #[arg(long)]
    pub keep_existing: bool,

    /// Skip source files ending with this suffix (overrides listize.toml)
    #[arg(long, value_name = "SUFFIX")]
    pub exclude: Option<String>,

    /// Path to listize.toml (defaults to <DIR>/listize.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.dir, self.config.as_deref()).generate();

        let report = ops::generate(GenOptions {
            dir: &self.dir,
            config: self.apply_flags(config),
            parallel: self.parallel,
            dry_run: self.dry_run,
            overwrite: if self.keep_existing {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            },
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Flags given on the command line win over the config file.
    fn apply_flags(&self, mut config: GenerateConfig) -> GenerateConfig {
        if !self.types.is_empty() {
            config.types = self.types.clone();
        }
        if let Some(exclude) = &self.exclude {
            config.exclude_suffix = exclude.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(types: &[&str], exclude: Option<&str>) -> GenCommand {
        GenCommand {
            dir: PathBuf::from("."),
            types: types.iter().map(|t| t.to_string()).collect(),
            dry_run: false,
            parallel: false,
            keep_existing: false,
            exclude: exclude.map(String::from),
            config: None,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = GenerateConfig {
            types: vec!["A".to_string()],
            ..GenerateConfig::default()
        };
        let merged = command(&["B"], Some("_x.go")).apply_flags(config);
        assert_eq!(merged.types, vec!["B"]);
        assert_eq!(merged.exclude_suffix, "_x.go");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = GenerateConfig {
            types: vec!["A".to_string()],
            exclude_suffix: "_y.go".to_string(),
            ..GenerateConfig::default()
        };
        let merged = command(&[], None).apply_flags(config.clone());
        assert_eq!(merged, config);
    }
}
