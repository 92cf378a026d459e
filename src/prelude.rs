//! Convenient re-exports for common usage patterns.
//!
//! # Example
//!
//! ```ignore
//! use flatdict::prelude::*;
//!
//! let mut source = Source::new();
//! source.load_bytes_with(data, &Format::Json)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Store and decoded values
pub use crate::decoder::{Decoder, Format};
pub use crate::source::Source;
pub use crate::value::Value;

// Delimiter control
pub use crate::flatten::{DEFAULT_DELIMITER, delimiter, set_delimiter};

// Config files (requires "config" feature)
#[cfg(feature = "config")]
pub use crate::config::{Config, FileConfig};
