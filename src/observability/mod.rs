//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config subsystem produces:
//!     → tracing events with structured fields (path, kind, error)
//!
//! Consumers:
//!     → logging.rs (fmt layer on stderr, filtered by RUST_LOG or CLI level)
//! ```

pub mod logging;
