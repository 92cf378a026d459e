//! Pluggable bytes-to-[`Value`] decoding.
//!
//! A [`Decoder`] turns raw document bytes into a [`Value`] tree. Any closure
//! `Fn(&[u8]) -> anyhow::Result<Value>` is a decoder, and [`Format`] covers
//! the built-in serde formats.
//!
//! # Example
//!
//! ```ignore
//! use flatdict::{Source, Value};
//!
//! let mut source = Source::new();
//! let upper = |data: &[u8]| -> anyhow::Result<Value> {
//!     Ok(Value::String(std::str::from_utf8(data)?.to_uppercase()))
//! };
//! source.load_bytes_with(b"shout", &upper)?;
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::value::Value;

/// Strategy that decodes raw bytes into a [`Value`].
pub trait Decoder {
    /// Decode `data`, failing with a format-specific error on malformed input.
    fn decode(&self, data: &[u8]) -> anyhow::Result<Value>;
}

impl<F> Decoder for F
where
    F: Fn(&[u8]) -> anyhow::Result<Value>,
{
    fn decode(&self, data: &[u8]) -> anyhow::Result<Value> {
        self(data)
    }
}

/// Built-in document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// UTF-8 JSON, the default.
    #[default]
    Json,
    #[cfg(feature = "toml")]
    Toml,
    #[cfg(feature = "yaml")]
    #[serde(alias = "yml")]
    Yaml,
}

impl Format {
    /// Map a file extension (without the dot, case-insensitive) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            #[cfg(feature = "toml")]
            "toml" => Some(Format::Toml),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    /// Guess the format of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            #[cfg(feature = "toml")]
            Format::Toml => "toml",
            #[cfg(feature = "yaml")]
            Format::Yaml => "yaml",
        }
    }
}

impl Decoder for Format {
    fn decode(&self, data: &[u8]) -> anyhow::Result<Value> {
        match self {
            Format::Json => Ok(serde_json::from_slice(data)?),
            #[cfg(feature = "toml")]
            Format::Toml => {
                let table: toml::Table = toml::from_str(std::str::from_utf8(data)?)?;
                Ok(Value::from(toml::Value::Table(table)))
            }
            #[cfg(feature = "yaml")]
            Format::Yaml => Ok(serde_yaml::from_slice(data)?),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_is_default() {
        assert_eq!(Format::default(), Format::Json);
        let value = Format::default().decode(br#"{"k": "v"}"#).unwrap();
        assert_eq!(
            value.as_map().and_then(|m| m.get("k")).and_then(Value::as_str),
            Some("v")
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Format::Json.decode(b"{\"k\": ").is_err());
        assert!(Format::Json.decode(b"\xff\xfe").is_err());
    }

    #[test]
    fn test_closure_decoder() {
        let lines = |data: &[u8]| -> anyhow::Result<Value> {
            let text = std::str::from_utf8(data)?;
            Ok(text
                .lines()
                .filter_map(|line| line.split_once('='))
                .map(|(k, v)| (k.trim(), v.trim()))
                .collect())
        };
        let value = lines.decode(b"hello = world\nbye = now\n").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("hello").and_then(Value::as_str), Some("world"));
        assert_eq!(map.get("bye").and_then(Value::as_str), Some("now"));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("json"), Some(Format::Json));
        assert_eq!(Format::from_extension("JSON"), Some(Format::Json));
        assert_eq!(Format::from_extension("ini"), None);
        assert_eq!(
            Format::from_path(Path::new("locales/en.json")),
            Some(Format::Json)
        );
        assert_eq!(Format::from_path(Path::new("locales/en")), None);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_decode() {
        assert_eq!(Format::from_extension("toml"), Some(Format::Toml));
        let value = Format::Toml
            .decode(b"[errors]\nnot_found = \"Not found\"\ncode = 404\n")
            .unwrap();
        let errors = value.as_map().and_then(|m| m.get("errors")).unwrap();
        assert_eq!(
            errors.as_map().and_then(|m| m.get("not_found")).and_then(Value::as_str),
            Some("Not found")
        );
        assert!(Format::Toml.decode(b"= broken").is_err());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_decode() {
        assert_eq!(Format::from_extension("yml"), Some(Format::Yaml));
        let value = Format::Yaml.decode(b"menu:\n  open: Open\n").unwrap();
        let menu = value.as_map().and_then(|m| m.get("menu")).unwrap();
        assert_eq!(
            menu.as_map().and_then(|m| m.get("open")).and_then(Value::as_str),
            Some("Open")
        );
    }
}
