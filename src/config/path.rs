//! Dotted-path navigation over a built tree.
//!
//! # Path Syntax
//! ```text
//! "server.port"      map key, then map key
//! "log.0.level"      map key, slice index, map key
//! "", ".", "a...b"   empty segments are dropped before navigation
//! ```
//!
//! # Design Decisions
//! - Resolution borrows from the tree; nothing is cloned or mutated
//! - A map segment is always a key, a slice segment is always an index
//! - Missing keys and out-of-range indices are both `KeyNotFound`

use std::any::Any;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::node::Node;

/// Split a path into its non-empty segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|s| !s.is_empty())
}

impl Node {
    /// Resolve a dotted path starting at this node.
    ///
    /// A path with no segments resolves to `self`.
    pub fn get(&self, path: &str) -> ConfigResult<&Node> {
        let mut current = self;
        let mut consumed: Vec<&str> = Vec::new();

        for segment in segments(path) {
            current = match current {
                Node::Map(entries) => entries.get(segment).ok_or_else(|| ConfigError::KeyNotFound {
                    path: consumed.join("."),
                    key: segment.to_string(),
                })?,
                Node::Slice(items) => {
                    let index: usize = segment.parse().map_err(|source| ConfigError::MalformedIndex {
                        path: consumed.join("."),
                        segment: segment.to_string(),
                        source,
                    })?;
                    items.get(index).ok_or_else(|| ConfigError::KeyNotFound {
                        path: consumed.join("."),
                        key: segment.to_string(),
                    })?
                }
                Node::String(_) | Node::Int(_) | Node::Bool(_) => {
                    return Err(ConfigError::NotIndexable {
                        path: consumed.join("."),
                        segment: segment.to_string(),
                        kind: current.kind(),
                    });
                }
            };
            consumed.push(segment);
        }

        Ok(current)
    }

    /// Resolve `path`, substituting `fallback` on any resolution failure.
    pub fn must_get<'a>(&'a self, path: &str, fallback: &'a Node) -> &'a Node {
        match self.get(path) {
            Ok(node) => node,
            Err(err) => {
                tracing::debug!(path, error = %err, "Using fallback for configuration value");
                fallback
            }
        }
    }

    /// Like [`Node::must_get`] for callers holding a type-erased default.
    ///
    /// # Panics
    /// Panics if the lookup fails and `fallback` is not a [`Node`]. A
    /// mistyped default is a bug in the caller.
    pub fn must_get_dyn<'a>(&'a self, path: &str, fallback: &'a dyn Any) -> &'a Node {
        match self.get(path) {
            Ok(node) => node,
            Err(err) => {
                let Some(fallback) = fallback.downcast_ref::<Node>() else {
                    panic!("fallback for configuration path `{path}` is not a configuration node");
                };
                tracing::debug!(path, error = %err, "Using fallback for configuration value");
                fallback
            }
        }
    }
}
