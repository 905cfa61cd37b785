//! Load-once holder for the process configuration root.
//!
//! # State Transitions
//! ```text
//! Empty → Loaded: first successful build
//! Empty → Empty: failed build (a corrected retry may still succeed)
//! Loaded → Loaded: every further load fails with AlreadyBuilt
//! ```
//!
//! # Design Decisions
//! - The root is published through `ArcSwapOption`, so readers never lock
//! - Check, build and install run under one mutex; concurrent loaders race
//!   safely and exactly one wins
//! - `reset` exists for test teardown only

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use arc_swap::ArcSwapOption;

use crate::config::builder::build;
use crate::config::document::Document;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::node::Node;

/// Holds at most one built configuration root.
#[derive(Debug, Default)]
pub struct ConfigStore {
    root: ArcSwapOption<Node>,
    load_lock: Mutex<()>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store.
    pub fn global() -> &'static ConfigStore {
        static GLOBAL: OnceLock<ConfigStore> = OnceLock::new();
        GLOBAL.get_or_init(ConfigStore::new)
    }

    /// Build `doc` and install it as the root, unless a root is already
    /// installed.
    pub fn load_once<D: Document>(&self, doc: &D) -> ConfigResult<()> {
        self.load_with(|| build(doc))
    }

    /// Run `make_root` and install its result, unless a root is already
    /// installed. `make_root` is not called in that case.
    pub fn load_with<E, F>(&self, make_root: F) -> Result<(), E>
    where
        E: From<ConfigError>,
        F: FnOnce() -> Result<Node, E>,
    {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if self.root.load().is_some() {
            tracing::warn!("Configuration already loaded; ignoring load request");
            return Err(ConfigError::AlreadyBuilt.into());
        }

        let root = make_root()?;
        tracing::info!(kind = %root.kind(), entries = root.len(), "Configuration loaded");
        self.root.store(Some(Arc::new(root)));
        Ok(())
    }

    /// The installed root.
    pub fn root(&self) -> ConfigResult<Arc<Node>> {
        self.root.load_full().ok_or(ConfigError::NotLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.root.load().is_some()
    }

    /// Resolve `path` against the installed root.
    pub fn get(&self, path: &str) -> ConfigResult<Node> {
        self.root()?.get(path).cloned()
    }

    /// Resolve `path` against the installed root, returning `fallback` when
    /// the path does not resolve. Fails with `NotLoaded` before any
    /// successful load; that is an ordering bug, not a missing key.
    pub fn must_get(&self, path: &str, fallback: Node) -> ConfigResult<Node> {
        let root = self.root()?;
        Ok(root.must_get(path, &fallback).clone())
    }

    /// Drop the installed root. Test teardown only.
    pub fn reset(&self) {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.root.store(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_root_before_load() {
        let store = ConfigStore::new();
        assert!(!store.is_loaded());
        assert!(matches!(store.root(), Err(ConfigError::NotLoaded)));
        assert!(matches!(store.get("a"), Err(ConfigError::NotLoaded)));
    }

    #[test]
    fn test_single_load() {
        let store = ConfigStore::new();
        store.load_once(&json!({"name": "first"})).unwrap();

        let err = store.load_once(&json!({"name": "second"})).unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyBuilt));
        assert_eq!(store.get("name").unwrap(), Node::from("first"));
    }

    #[test]
    fn test_failed_load_leaves_store_empty() {
        let store = ConfigStore::new();
        let err = store.load_once(&json!({"ratio": 0.5})).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalType { .. }));
        assert!(!store.is_loaded());

        store.load_once(&json!({"ratio": 1})).unwrap();
        assert_eq!(store.get("ratio").unwrap(), Node::Int(1));
    }

    #[test]
    fn test_load_with_skips_builder_when_loaded() {
        let store = ConfigStore::new();
        store.load_once(&json!(true)).unwrap();

        let result: ConfigResult<()> = store.load_with(|| panic!("builder must not run"));
        assert!(matches!(result, Err(ConfigError::AlreadyBuilt)));
    }

    #[test]
    fn test_must_get() {
        let store = ConfigStore::new();
        store.load_once(&json!({"port": 8080})).unwrap();
        assert_eq!(store.must_get("port", Node::Int(80)).unwrap(), Node::Int(8080));
        assert_eq!(store.must_get("host", Node::from("")).unwrap(), Node::from(""));
    }

    #[test]
    fn test_must_get_before_load_is_not_loaded() {
        let store = ConfigStore::new();
        let err = store.must_get("server.port", Node::Int(80)).unwrap_err();
        assert!(matches!(err, ConfigError::NotLoaded));
    }

    #[test]
    fn test_reset() {
        let store = ConfigStore::new();
        store.load_once(&json!({"a": 1})).unwrap();
        store.reset();
        assert!(!store.is_loaded());
        store.load_once(&json!({"a": 2})).unwrap();
        assert_eq!(store.get("a").unwrap(), Node::Int(2));
    }
}
