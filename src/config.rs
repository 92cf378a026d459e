//! Config file listing the documents to flatten.
//!
//! ```toml
//! delimiter = "/"
//!
//! [[files]]
//! path = "locales/en.json"
//!
//! [[files]]
//! path = "locales/overrides.toml"
//! format = "toml"
//! ```
//!
//! Relative paths resolve against the directory of the config file. A file
//! without a `format` is decoded by its extension, falling back to JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::decoder::Format;
use crate::error::{Error, Result};
use crate::flatten::set_delimiter;
use crate::source::{Source, read_file};

/// Config loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Process-wide delimiter to set before loading.
    pub delimiter: Option<String>,
    /// Documents to load, in order.
    #[serde(default)]
    pub files: Vec<FileConfig>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

/// A single document to load.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub path: PathBuf,
    pub format: Option<Format>,
}

impl FileConfig {
    /// Explicit format, else the one implied by the extension, else JSON.
    pub fn format(&self) -> Format {
        self.format
            .or_else(|| Format::from_path(&self.path))
            .unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = read_file(path)?;
        let content = String::from_utf8(data).map_err(|e| {
            Error::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Relative file paths stay relative to the working directory.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolved path and format of every listed file, in order.
    pub fn resolved_files(&self) -> impl Iterator<Item = (PathBuf, Format)> + '_ {
        self.files.iter().map(|file| {
            let path = match &self.base_dir {
                Some(base) if file.path.is_relative() => base.join(&file.path),
                _ => file.path.clone(),
            };
            (path, file.format())
        })
    }

    /// Set the process-wide delimiter if the config names one.
    pub fn apply_delimiter(&self) {
        if let Some(delimiter) = &self.delimiter {
            set_delimiter(delimiter.as_str());
        }
    }

    /// Set the delimiter, then load every listed file into `source`.
    ///
    /// Stops at the first failing file; files loaded before it stay in the
    /// source.
    pub fn apply(&self, source: &mut Source) -> Result<usize> {
        self.apply_delimiter();
        let mut written = 0;
        for (path, format) in self.resolved_files() {
            written += source.load_file_with(&path, &format)?;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
delimiter = "/"

[[files]]
path = "locales/en.json"

[[files]]
path = "/etc/app/overrides.toml"
format = "toml"

[[files]]
path = "locales/extra.txt"
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.delimiter.as_deref(), Some("/"));
        assert_eq!(config.files.len(), 3);

        let files: Vec<_> = config.resolved_files().collect();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("locales/en.json"), Format::Json),
                (PathBuf::from("/etc/app/overrides.toml"), Format::Toml),
                (PathBuf::from("locales/extra.txt"), Format::Json),
            ]
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.delimiter.is_none());
        assert!(config.files.is_empty());

        let mut source = Source::new();
        assert_eq!(config.apply(&mut source).unwrap(), 0);
        assert!(source.is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("[[files]]\nformat = \"json\"\n").unwrap_err();
        assert!(err.is_config());

        let err =
            Config::from_toml_str("[[files]]\npath = \"a\"\nformat = \"ini\"\n").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_file("no/such/flatdict.toml").unwrap_err();
        assert!(err.is_io());
    }
}
