//! Document → Node conversion.
//!
//! # Responsibilities
//! - Walk an untyped document depth-first
//! - Reject non-string map keys and kinds with no node equivalent
//! - Produce a complete tree or nothing (first error aborts the build)

use std::collections::BTreeMap;

use crate::config::document::{Document, Key, Shape};
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::node::Node;

/// Build a configuration tree from a parsed document.
pub fn build<D: Document>(doc: &D) -> ConfigResult<Node> {
    let mut path = Vec::new();
    let node = build_at(doc, &mut path)?;
    tracing::trace!(kind = %node.kind(), children = node.len(), "Built configuration tree");
    Ok(node)
}

fn build_at<D: Document>(doc: &D, path: &mut Vec<String>) -> ConfigResult<Node> {
    match doc.shape() {
        Shape::Mapping(entries) => {
            let mut map = BTreeMap::new();
            for (key, value) in entries {
                let key = match key {
                    Key::Str(k) => k,
                    Key::Other(found) => {
                        return Err(ConfigError::TypeMismatch {
                            path: path.join("."),
                            expected: "string key",
                            found,
                        });
                    }
                };
                path.push(key.to_string());
                let child = build_at(value, path)?;
                path.pop();
                map.insert(key.to_string(), child);
            }
            Ok(Node::Map(map))
        }
        Shape::List(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                nodes.push(build_at(item, path)?);
                path.pop();
            }
            Ok(Node::Slice(nodes))
        }
        Shape::String(s) => Ok(Node::String(s.to_string())),
        Shape::Int(i) => Ok(Node::Int(i)),
        Shape::Bool(b) => Ok(Node::Bool(b)),
        Shape::Other(kind) => Err(ConfigError::IllegalType {
            path: path.join("."),
            kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::node::Value;

    fn yaml(text: &str) -> serde_yaml::Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_build_nested() {
        let doc = yaml("intNode: 123\nmapNode:\n  intNode: 123\nsliceNode: [123, x, {intNode: 123}]\n");
        let node = build(&doc).unwrap();

        let Value::Map(entries) = node.value() else {
            panic!("expected map");
        };
        assert_eq!(entries["intNode"], Node::Int(123));
        assert_eq!(entries["mapNode"].as_map().unwrap()["intNode"], Node::Int(123));

        let items = entries["sliceNode"].as_slice().unwrap();
        assert_eq!(items[0], Node::Int(123));
        assert_eq!(items[1], Node::from("x"));
        assert_eq!(items[2].as_map().unwrap()["intNode"], Node::Int(123));
    }

    #[test]
    fn test_slice_preserves_order() {
        let node = build(&yaml("[c, a, b]")).unwrap();
        let names: Vec<_> = node
            .as_slice()
            .unwrap()
            .iter()
            .filter_map(Node::as_str)
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_non_string_key_is_type_mismatch() {
        let err = build(&yaml("server:\n  8080: http\n")).unwrap_err();
        match err {
            ConfigError::TypeMismatch { path, found, .. } => {
                assert_eq!(path, "server");
                assert_eq!(found, "number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_float_is_illegal_type() {
        let err = build(&yaml("limits:\n  - 1\n  - 2.5\n")).unwrap_err();
        match err {
            ConfigError::IllegalType { path, kind } => {
                assert_eq!(path, "limits.1");
                assert_eq!(kind, "float");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_null_is_illegal_type() {
        let err = build(&yaml("name: ~")).unwrap_err();
        assert!(matches!(err, ConfigError::IllegalType { kind: "null", .. }));
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(build(&yaml("true")).unwrap(), Node::Bool(true));
        assert_eq!(build(&serde_json::json!("hi")).unwrap(), Node::from("hi"));
    }

    #[test]
    fn test_toml_and_json_agree() {
        let from_toml: toml::Value = toml::from_str("[server]\nport = 8080\nhosts = [\"a\", \"b\"]\n").unwrap();
        let from_json = serde_json::json!({"server": {"port": 8080, "hosts": ["a", "b"]}});
        assert_eq!(build(&from_toml).unwrap(), build(&from_json).unwrap());
    }

    #[test]
    fn test_round_trip_through_value() {
        let doc = serde_json::json!({"a": [1, "two", false], "b": {"c": "d"}});
        let node = build(&doc).unwrap();
        assert_eq!(rebuild(&node), doc);
    }

    fn rebuild(node: &Node) -> serde_json::Value {
        match node.value() {
            Value::Map(entries) => serde_json::Value::Object(
                entries.iter().map(|(k, v)| (k.clone(), rebuild(v))).collect(),
            ),
            Value::Slice(items) => serde_json::Value::Array(items.iter().map(rebuild).collect()),
            Value::String(s) => serde_json::Value::from(s),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Bool(b) => serde_json::Value::from(b),
        }
    }
}
