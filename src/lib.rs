//! Flatten nested documents into a dotted-key lookup table.
//!
//! A document such as `{"menu": {"open": "Open", "close": "Close"}}` becomes
//! the flat mapping `menu.open -> Open`, `menu.close -> Close`. Lookups of
//! keys that are not present return the key itself, which makes the table a
//! convenient fallback-safe dictionary for translated strings.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatdict::prelude::*;
//!
//! // An explicit store
//! let mut source = Source::new();
//! source.load_file("locales/en.json")?;
//! let title = source.get("menu.open");
//!
//! // Or the process-wide default store
//! flatdict::load_file("locales/en.json")?;
//! let labels: Vec<String> = flatdict::get_many(["menu.open", "menu.close"]);
//! ```
//!
//! # Modules
//!
//! - [`value`] - Decoded document tree
//! - [`flatten`] - Flattening algorithm and the process-wide delimiter
//! - [`decoder`] - Pluggable decoders and built-in formats
//! - [`source`] - The flat lookup table
//! - [`global`] - Process-wide default table
//! - [`config`] - TOML config listing documents to load (requires `config` feature)
//!
//! # Feature Flags
//!
//! - `toml` - Enable the TOML decoder
//! - `yaml` - Enable the YAML decoder
//! - `config` - Enable config files (implies `toml`)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `full` - Enable all features

#[cfg(feature = "config")]
pub mod config;
pub mod decoder;
pub mod flatten;
pub mod global;
mod logging;
pub mod prelude;
pub mod source;
pub mod value;

mod error;

pub use error::{Error, Result};

pub use decoder::{Decoder, Format};
pub use flatten::{DEFAULT_DELIMITER, delimiter, flatten_into, set_delimiter};
pub use source::Source;
pub use value::Value;

#[cfg(feature = "config")]
pub use config::{Config, FileConfig};

// The default-store API at crate root, mirroring `Source`
#[cfg(feature = "config")]
pub use global::load_config;
pub use global::{
    flatten, get, get_many, len, load_bytes, load_bytes_with, load_file, load_file_with, lookup,
};
