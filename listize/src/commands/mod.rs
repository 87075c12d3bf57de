mod completions;
mod generate;
mod list;

use std::path::Path;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenCommand;
use list::ListCommand;
use listize_config::{Config, ListizeToml};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for listize_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load an explicit config file, or `listize.toml` in `dir` when present.
pub(crate) fn load_config(dir: &Path, explicit: Option<&Path>) -> Config {
    let file = match explicit {
        Some(path) => Some(ListizeToml::open(path).unwrap_or_exit()),
        None => ListizeToml::find(dir).unwrap_or_exit(),
    };
    file.map(|f| f.config().clone()).unwrap_or_default()
}

#[derive(Parser)]
#[command(name = "listize")]
#[command(version)]
#[command(about = "Generate list types and field accessors for Go structs")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Gen(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <file>_gen.go next to every Go file declaring structs
    #[command(name = "gen")]
    Gen(GenCommand),

    /// List the structs and fields found in a package
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gen_flags() {
        let cli = Cli::try_parse_from([
            "listize", "gen", "./model", "-t", "User", "--type", "Order", "--dry-run",
            "--exclude", "_x.go",
        ])
        .unwrap();
        let Commands::Gen(cmd) = cli.command else {
            panic!("expected gen");
        };
        assert_eq!(cmd.dir, PathBuf::from("./model"));
        assert_eq!(cmd.types, vec!["User", "Order"]);
        assert!(cmd.dry_run);
        assert!(!cmd.parallel);
        assert_eq!(cmd.exclude.as_deref(), Some("_x.go"));
    }

    #[test]
    fn test_load_config_absent() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None);
        assert_eq!(config.generate(), listize_config::GenerateConfig::default());
    }

    #[test]
    fn test_load_config_found_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("listize.toml"),
            "[generate]\ntypes = [\"User\"]\nheader = false\n",
        )
        .unwrap();
        let generate = load_config(dir.path(), None).generate();
        assert_eq!(generate.types, vec!["User"]);
        assert!(!generate.header);
    }
}
