//! Unified error type for the flatdict library.
//!
//! Only loading can fail. Lookups fall back to the requested key and
//! flattening skips values it does not understand, so neither returns an
//! error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a document into a [`Source`](crate::Source).
///
/// # Example
///
/// ```ignore
/// use flatdict::{Result, Source};
///
/// fn load() -> Result<Source> {
///     let mut source = Source::new();
///     source.load_file("locales/en.json")?;
///     Ok(source)
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened or fully read.
    #[error("I/O error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The decoder rejected the input bytes.
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] anyhow::Error),

    /// The config document is not valid TOML or has the wrong shape.
    #[cfg(feature = "config")]
    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a deserialization error.
    pub fn is_deserialize(&self) -> bool {
        matches!(self, Self::Deserialize(_))
    }

    /// Returns `true` if this is a config error.
    #[cfg(feature = "config")]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
