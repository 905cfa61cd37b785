//! The typed configuration tree.
//!
//! # Design Decisions
//! - Closed enum with five cases; every consumer matches exhaustively
//! - Composite nodes own their children, so trees are acyclic
//! - Map entries live in a `BTreeMap`: source order is not part of a
//!   node's identity and serialization comes out sorted

use std::collections::BTreeMap;
use std::fmt;

/// A node in a configuration tree. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Map(BTreeMap<String, Node>),
    Slice(Vec<Node>),
    String(String),
    Int(i64),
    Bool(bool),
}

/// Discriminant of a [`Node`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Map,
    Slice,
    String,
    Int,
    Bool,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Map => "map",
            NodeKind::Slice => "slice",
            NodeKind::String => "string",
            NodeKind::Int => "int",
            NodeKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// One-level projection of a node onto its native payload.
///
/// Composites expose their children as nodes; scalars expose the bare
/// primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Map(&'a BTreeMap<String, Node>),
    Slice(&'a [Node]),
    String(&'a str),
    Int(i64),
    Bool(bool),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Map(_) => NodeKind::Map,
            Node::Slice(_) => NodeKind::Slice,
            Node::String(_) => NodeKind::String,
            Node::Int(_) => NodeKind::Int,
            Node::Bool(_) => NodeKind::Bool,
        }
    }

    /// Unwrap one level of the node.
    pub fn value(&self) -> Value<'_> {
        match self {
            Node::Map(entries) => Value::Map(entries),
            Node::Slice(items) => Value::Slice(items),
            Node::String(s) => Value::String(s),
            Node::Int(i) => Value::Int(*i),
            Node::Bool(b) => Value::Bool(*b),
        }
    }

    /// Returns true for `Map` and `Slice`.
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Map(_) | Node::Slice(_))
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[Node]> {
        match self {
            Node::Slice(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Number of direct children. Scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Node::Map(entries) => entries.len(),
            Node::Slice(items) => items.len(),
            Node::String(_) | Node::Int(_) | Node::Bool(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Int(i)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Slice(items)
    }
}

impl From<BTreeMap<String, Node>> for Node {
    fn from(entries: BTreeMap<String, Node>) -> Self {
        Node::Map(entries)
    }
}
