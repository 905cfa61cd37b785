//! Typed configuration trees addressed by dotted path.

pub mod config;
pub mod observability;

pub use config::{ConfigError, ConfigStore, Node};
