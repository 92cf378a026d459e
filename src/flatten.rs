//! Recursive flattening of a [`Value`] tree into composite keys.
//!
//! Path segments are the map keys met on the way down to a string leaf,
//! joined with a delimiter. The process-wide delimiter starts as `"."` and
//! can be changed at any time with [`set_delimiter`]; the change only
//! affects documents flattened afterwards.

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::logging::{info, trace};
use crate::value::Value;

/// Delimiter used until [`set_delimiter`] is called.
pub const DEFAULT_DELIMITER: &str = ".";

static DELIMITER: Lazy<RwLock<String>> =
    Lazy::new(|| RwLock::new(DEFAULT_DELIMITER.to_string()));

/// Set the process-wide delimiter used to join path segments.
///
/// Keys already stored are not re-keyed.
pub fn set_delimiter(delimiter: impl Into<String>) {
    let delimiter = delimiter.into();
    info!(delimiter = %delimiter, "delimiter changed");
    *DELIMITER.write().unwrap_or_else(PoisonError::into_inner) = delimiter;
}

/// Current process-wide delimiter.
pub fn delimiter() -> String {
    DELIMITER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Flatten `value` into `sink`, joining path segments with `delimiter`.
///
/// Returns the number of string leaves written. Later leaves overwrite
/// earlier ones when the sink is a map and two paths compose to the same key.
pub fn flatten_into<E>(value: &Value, delimiter: &str, sink: &mut E) -> usize
where
    E: Extend<(String, String)>,
{
    let mut path = Vec::new();
    let mut written = 0;
    descend(value, &mut path, delimiter, sink, &mut written);
    written
}

fn descend<'v, E>(
    value: &'v Value,
    path: &mut Vec<&'v str>,
    delimiter: &str,
    sink: &mut E,
    written: &mut usize,
) where
    E: Extend<(String, String)>,
{
    match value {
        Value::String(leaf) => {
            let key = path.join(delimiter);
            trace!(key = %key, "flattened entry");
            sink.extend(std::iter::once((key, leaf.clone())));
            *written += 1;
        }
        Value::Map(map) => {
            for (segment, child) in map {
                // Empty keys add no segment, same as the root.
                let pushed = !segment.is_empty();
                if pushed {
                    path.push(segment);
                }
                descend(child, path, delimiter, sink, written);
                if pushed {
                    path.pop();
                }
            }
        }
        Value::Other => {}
    }
}
