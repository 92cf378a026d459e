//! The flat lookup table.

use std::collections::HashMap;
use std::collections::hash_map;
use std::path::Path;

use crate::decoder::{Decoder, Format};
use crate::error::{Error, Result};
use crate::flatten::{delimiter, flatten_into};
use crate::logging::{debug, info};
use crate::value::Value;

/// Flat mapping from composite key to string value.
///
/// Each load adds or overwrites keys; nothing is ever removed. Lookups
/// never fail: a key that is not present comes back unchanged.
///
/// # Example
///
/// ```ignore
/// use flatdict::Source;
///
/// let mut source = Source::new();
/// source.load_bytes(br#"{"a": {"b": "hello"}}"#)?;
/// assert_eq!(source.get("a.b"), "hello");
/// assert_eq!(source.get("missing"), "missing");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    entries: HashMap<String, String>,
}

impl Source {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON file and flatten it into this source.
    ///
    /// Returns the number of string leaves written.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load_file_with(path, &Format::Json)
    }

    /// Read a file, decode it with `decoder` and flatten it into this source.
    pub fn load_file_with<D>(&mut self, path: impl AsRef<Path>, decoder: &D) -> Result<usize>
    where
        D: Decoder + ?Sized,
    {
        let data = read_file(path.as_ref())?;
        self.load_bytes_with(&data, decoder)
    }

    /// Decode JSON bytes and flatten them into this source.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<usize> {
        self.load_bytes_with(data, &Format::Json)
    }

    /// Decode `data` with `decoder` and flatten it into this source.
    ///
    /// The source is left untouched when decoding fails.
    pub fn load_bytes_with<D>(&mut self, data: &[u8], decoder: &D) -> Result<usize>
    where
        D: Decoder + ?Sized,
    {
        let value = decode(data, decoder)?;
        Ok(self.flatten(&value))
    }

    /// Flatten an already decoded value using the process-wide delimiter.
    pub fn flatten(&mut self, value: &Value) -> usize {
        self.flatten_with_delimiter(value, &delimiter())
    }

    /// Flatten an already decoded value using an explicit delimiter.
    pub fn flatten_with_delimiter(&mut self, value: &Value, delimiter: &str) -> usize {
        let written = flatten_into(value, delimiter, &mut self.entries);
        info!(
            entries = written,
            total = self.entries.len(),
            delimiter = %delimiter,
            "flattened document"
        );
        written
    }

    /// Value stored under `key`, or `key` itself when absent.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }

    /// [`get`](Self::get) for each key, in order.
    pub fn get_many<'a, I>(&'a self, keys: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().map(|key| self.get(key)).collect()
    }

    /// Value stored under `key`, or `None` when absent.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Store a single entry, overwriting any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over the entries of a [`Source`].
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Source {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<(String, String)> for Source {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<(String, String)> for Source {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a whole file into memory.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "read source file");
    Ok(data)
}

/// Run a decoder, mapping its failure into [`Error::Deserialize`].
pub(crate) fn decode<D>(data: &[u8], decoder: &D) -> Result<Value>
where
    D: Decoder + ?Sized,
{
    decoder.decode(data).map_err(|e| {
        debug!(error = %e, bytes = data.len(), "decoder rejected input");
        Error::Deserialize(e)
    })
}
