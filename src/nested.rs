//! Key-path lookups into nested JSON objects.
//!
//! [`access_nested_map`] walks a `serde_json::Value` one key at a time. Only
//! JSON objects are traversable: indexing into a string, number, array or
//! `null` fails the same way a missing key does, and the error always names
//! the single key that could not be resolved.
//!
//! # Examples
//!
//! ```rust
//! use github_org_client::nested::{access_nested_map, Error};
//! use serde_json::json;
//!
//! let map = json!({"a": {"b": 2}});
//! assert_eq!(access_nested_map(&map, ["a", "b"]).unwrap(), &json!(2));
//!
//! let err = access_nested_map(&json!({"a": 1}), ["a", "b"]).unwrap_err();
//! assert_eq!(err, Error::KeyNotFound("b".to_string()));
//! ```

use log::trace;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The payload is the offending key only, not the full path.
    #[error("Key not found: {0}")]
    KeyNotFound(String),
}

impl Error {
    /// The key that could not be resolved.
    pub fn key(&self) -> &str {
        match self {
            Error::KeyNotFound(key) => key,
        }
    }
}

/// Resolves `path` against `root`, returning a reference to the final value.
///
/// An empty path returns `root` itself. Resolution stops at the first key
/// that is missing, or that is applied to a value which is not an object.
///
/// # Arguments
///
/// * `root` - The nested map to traverse.
/// * `path` - The keys to follow, left to right.
///
/// # Returns
///
/// The value at the end of the path, or [`Error::KeyNotFound`] carrying the
/// key that failed.
pub fn access_nested_map<'a, I, K>(root: &'a Value, path: I) -> Result<&'a Value, Error>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut current = root;
    for key in path {
        let key = key.as_ref();
        current = match current {
            Value::Object(map) => map.get(key),
            _ => None,
        }
        .ok_or_else(|| {
            trace!("Key {key} not found");
            Error::KeyNotFound(key.to_string())
        })?;
    }
    Ok(current)
}
