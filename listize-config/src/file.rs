use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Conventional config file name, looked up in the package directory.
pub const CONFIG_FILE_NAME: &str = "listize.toml";

/// A listize.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct ListizeToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ListizeToml {
    /// Open and parse a listize.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Load `dir/listize.toml` if it exists.
    pub fn find(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
