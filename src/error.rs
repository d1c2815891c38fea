//! Error types for map accessors and the JSON codec.

use std::fmt;

/// Error type for fallible map operations.
///
/// Mutating operations never fail; only typed accessors and the JSON
/// codec produce errors. Trie invariant violations are programmer errors
/// and panic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Accessor errors
    /// The requested key was not found in the map.
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },
    /// The key exists but the stored value has a different type.
    WrongType {
        /// The type the accessor asked for.
        expected: &'static str,
        /// The type actually stored.
        found: &'static str,
    },

    // JSON errors
    /// The top-level JSON value is not an object.
    ExpectedObject,
    /// The JSON input is malformed (includes number-parse failures).
    JsonParse(String),
    /// The map could not be rendered as JSON.
    JsonSerialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound { key } => write!(f, "key not found: '{key}'"),
            Error::WrongType { expected, found } => {
                write!(f, "wrong type: expected {expected}, got {found}")
            }
            Error::ExpectedObject => write!(f, "invalid JSON: expected object"),
            Error::JsonParse(msg) => write!(f, "invalid JSON: {msg}"),
            Error::JsonSerialize(msg) => write!(f, "JSON serialize error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for map operations.
pub type Result<T> = std::result::Result<T, Error>;
