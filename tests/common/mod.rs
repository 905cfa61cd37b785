//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// The reference document used across tests, in YAML.
pub const SAMPLE_YAML: &str = "\
intNode: 123
mapNode:
  intNode: 123
sliceNode:
  - 123
  - x
  - intNode: 123
";

/// Write `content` to a temporary file ending in `suffix`.
pub fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
