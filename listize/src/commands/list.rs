use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Package directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Print the extracted materials as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to listize.toml (defaults to <DIR>/listize.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.dir, self.config.as_deref()).generate();
        let report = ops::list(&self.dir, &config.exclude_suffix)?;

        if self.json {
            let json = serde_json::to_string_pretty(&report.materials)
                .wrap_err("Failed to serialize materials")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
