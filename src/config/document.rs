//! Adapters over parsed, untyped documents.
//!
//! The builder never sees a concrete parser type. Each supported parser's
//! value type implements [`Document`], which reports the shape of one level
//! at a time.

/// A mapping key as reported by a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Str(&'a str),
    /// Any non-string key, carrying the name of its kind.
    Other(&'static str),
}

/// The shape of one level of a document.
#[derive(Debug)]
pub enum Shape<'a, D> {
    Mapping(Vec<(Key<'a>, &'a D)>),
    List(&'a [D]),
    String(&'a str),
    Int(i64),
    Bool(bool),
    /// A value kind with no node equivalent (floats, nulls, dates...).
    Other(&'static str),
}

/// An untyped document value produced by some parser.
pub trait Document: Sized {
    fn shape(&self) -> Shape<'_, Self>;
}

impl Document for serde_yaml::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_yaml::Value;

        match self {
            Value::Mapping(mapping) => Shape::Mapping(
                mapping
                    .iter()
                    .map(|(k, v)| {
                        let key = match k {
                            Value::String(s) => Key::Str(s),
                            other => Key::Other(yaml_kind(other)),
                        };
                        (key, v)
                    })
                    .collect(),
            ),
            Value::Sequence(items) => Shape::List(items),
            Value::String(s) => Shape::String(s),
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Shape::Int(i),
                None if n.is_f64() => Shape::Other("float"),
                None => Shape::Other("out-of-range integer"),
            },
            other => Shape::Other(yaml_kind(other)),
        }
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

impl Document for toml::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use toml::Value;

        match self {
            Value::Table(table) => Shape::Mapping(
                table.iter().map(|(k, v)| (Key::Str(k.as_str()), v)).collect(),
            ),
            Value::Array(items) => Shape::List(items),
            Value::String(s) => Shape::String(s),
            Value::Integer(i) => Shape::Int(*i),
            Value::Boolean(b) => Shape::Bool(*b),
            Value::Float(_) => Shape::Other("float"),
            Value::Datetime(_) => Shape::Other("datetime"),
        }
    }
}

impl Document for serde_json::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_json::Value;

        match self {
            Value::Object(object) => Shape::Mapping(
                object.iter().map(|(k, v)| (Key::Str(k.as_str()), v)).collect(),
            ),
            Value::Array(items) => Shape::List(items),
            Value::String(s) => Shape::String(s),
            Value::Bool(b) => Shape::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Shape::Int(i),
                None if n.is_f64() => Shape::Other("float"),
                None => Shape::Other("out-of-range integer"),
            },
            Value::Null => Shape::Other("null"),
        }
    }
}
