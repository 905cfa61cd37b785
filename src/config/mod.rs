//! Configuration tree subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML/JSON)
//!     → loader.rs (read & parse into an untyped document)
//!     → document.rs (shape of each document level)
//!     → builder.rs (Document → Node, type checks)
//!     → store.rs (installed once, shared via Arc)
//!     → path.rs (get / must_get by dotted path)
//!     → serialize.rs (canonical JSON for logs and tests)
//! ```
//!
//! # Design Decisions
//! - The tree is immutable once built; there is no reload path
//! - Only map, slice, string, int and bool exist; anything else is rejected
//!   at build time rather than coerced
//! - Callers branch on `ConfigError` variants, not on messages

pub mod builder;
pub mod document;
pub mod error;
pub mod loader;
pub mod node;
pub mod path;
pub mod serialize;
pub mod store;

pub use builder::build;
pub use document::Document;
pub use error::{ConfigError, ConfigResult};
pub use loader::{Format, LoadError};
pub use node::{Node, NodeKind, Value};
pub use store::ConfigStore;
