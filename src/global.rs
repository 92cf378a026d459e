//! Process-wide default [`Source`].
//!
//! These functions mirror the [`Source`] methods against a single lazily
//! created instance, for callers who want one global dictionary without
//! passing a store around. Lookups return owned strings because the store
//! sits behind a lock.
//!
//! Loads decode outside the lock and only hold it while flattening. There
//! is no ordering between a concurrent [`set_delimiter`](crate::set_delimiter)
//! and a load; callers that need one must serialise those calls themselves.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::decoder::{Decoder, Format};
use crate::error::Result;
use crate::source::{self, Source};
use crate::value::Value;

static DEFAULT: Lazy<Mutex<Source>> = Lazy::new(|| Mutex::new(Source::new()));

fn default_source() -> MutexGuard<'static, Source> {
    DEFAULT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read a JSON file into the default source.
pub fn load_file(path: impl AsRef<Path>) -> Result<usize> {
    load_file_with(path, &Format::Json)
}

/// Read a file with a custom decoder into the default source.
pub fn load_file_with<D>(path: impl AsRef<Path>, decoder: &D) -> Result<usize>
where
    D: Decoder + ?Sized,
{
    let data = source::read_file(path.as_ref())?;
    load_bytes_with(&data, decoder)
}

/// Decode JSON bytes into the default source.
pub fn load_bytes(data: &[u8]) -> Result<usize> {
    load_bytes_with(data, &Format::Json)
}

/// Decode bytes with a custom decoder into the default source.
pub fn load_bytes_with<D>(data: &[u8], decoder: &D) -> Result<usize>
where
    D: Decoder + ?Sized,
{
    let value = source::decode(data, decoder)?;
    Ok(flatten(&value))
}

/// Flatten an already decoded value into the default source.
pub fn flatten(value: &Value) -> usize {
    default_source().flatten(value)
}

/// Value stored under `key` in the default source, or `key` itself.
pub fn get(key: &str) -> String {
    default_source().get(key).to_string()
}

/// [`get`] for each key, in order.
pub fn get_many<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let source = default_source();
    keys.into_iter()
        .map(|key| source.get(key.as_ref()).to_string())
        .collect()
}

/// Value stored under `key` in the default source, or `None`.
pub fn lookup(key: &str) -> Option<String> {
    default_source().lookup(key).map(str::to_string)
}

/// Number of entries in the default source.
pub fn len() -> usize {
    default_source().len()
}

/// Apply a TOML config file to the default source.
#[cfg(feature = "config")]
pub fn load_config(path: impl AsRef<Path>) -> Result<usize> {
    let config = crate::config::Config::from_file(path)?;
    config.apply_delimiter();
    let mut written = 0;
    for (path, format) in config.resolved_files() {
        written += load_file_with(&path, &format)?;
    }
    Ok(written)
}
