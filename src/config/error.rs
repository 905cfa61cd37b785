//! Error kinds for building and navigating configuration trees.

use std::num::ParseIntError;

use thiserror::Error;

use crate::config::node::NodeKind;

/// Errors produced by the builder, the path resolver and the store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document shape did not match what the builder expects (e.g. a
    /// non-string map key).
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Document contained a value kind with no node equivalent.
    #[error("illegal type at `{path}`: {kind} has no configuration equivalent")]
    IllegalType { path: String, kind: &'static str },

    /// Map key absent, or slice index out of bounds.
    #[error("key `{key}` not found at `{path}`")]
    KeyNotFound { path: String, key: String },

    /// Attempted to descend into a scalar.
    #[error("cannot index {kind} node at `{path}` with `{segment}`")]
    NotIndexable {
        path: String,
        segment: String,
        kind: NodeKind,
    },

    /// A slice segment that is not a valid index.
    #[error("malformed index `{segment}` at `{path}`: {source}")]
    MalformedIndex {
        path: String,
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// A load was attempted after a successful one.
    #[error("configuration has already been built")]
    AlreadyBuilt,

    /// The root was requested before any successful load.
    #[error("configuration has not been loaded")]
    NotLoaded,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
