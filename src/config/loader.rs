//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::builder::build;
use crate::config::error::ConfigError;
use crate::config::node::Node;
use crate::config::store::ConfigStore;

/// Structured text formats a configuration file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot determine format of `{0}`")]
    UnknownFormat(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parse `text` as `format` and build the tree.
pub fn parse_document(text: &str, format: Format) -> Result<Node, LoadError> {
    let node = match format {
        Format::Yaml => build(&serde_yaml::from_str::<serde_yaml::Value>(text)?)?,
        Format::Toml => build(&toml::from_str::<toml::Value>(text)?)?,
        Format::Json => build(&serde_json::from_str::<serde_json::Value>(text)?)?,
    };
    Ok(node)
}

/// Read and build a configuration file. Without an explicit `format` the
/// file extension decides.
pub fn load_file(path: &Path, format: Option<Format>) -> Result<Node, LoadError> {
    let format = match format.or_else(|| Format::from_path(path)) {
        Some(format) => format,
        None => return Err(LoadError::UnknownFormat(path.display().to_string())),
    };
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), ?format, bytes = content.len(), "Read configuration file");
    parse_document(&content, format)
}

/// Load a configuration file into `store`. The file is not read when the
/// store already holds a root.
pub fn load_into(store: &ConfigStore, path: &Path, format: Option<Format>) -> Result<(), LoadError> {
    store.load_with(|| load_file(path, format))
}
