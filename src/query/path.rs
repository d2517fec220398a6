use tracing::debug;
use crate::core::types::{Mapping, Value};

/// A non-empty string found in a query record, with the field path leading to
/// it from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafPath {
    pub value: String,
    pub fields: Vec<String>,
}

impl LeafPath {
    pub fn new(value: impl Into<String>, fields: Vec<String>) -> Self {
        LeafPath {
            value: value.into(),
            fields,
        }
    }
}

/// Every leaf path reachable from `record`, using the same shape rules as
/// indexing. Empty strings count as unset and produce nothing.
pub fn extract_paths(record: &Mapping) -> Vec<LeafPath> {
    let mut paths = Vec::new();
    let mut prefix = Vec::new();
    collect_mapping(record, &mut prefix, &mut paths);
    paths
}

fn collect_mapping(fields: &Mapping, prefix: &mut Vec<String>, out: &mut Vec<LeafPath>) {
    for (key, value) in fields {
        prefix.push(key.clone());
        collect_value(value, prefix, out);
        prefix.pop();
    }
}

fn collect_value(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<LeafPath>) {
    match value {
        Value::Null => {}
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => out.push(LeafPath::new(s.as_str(), prefix.clone())),
        Value::Mapping(nested) => collect_mapping(nested, prefix, out),
        Value::Sequence(items) => {
            for item in items {
                match item {
                    Value::Mapping(nested) => collect_mapping(nested, prefix, out),
                    Value::Null => {}
                    other => debug!(
                        path = %prefix.join("."),
                        kind = other.kind(),
                        "ignoring unsupported sequence element in query"
                    ),
                }
            }
        }
        Value::Other(kind) => debug!(
            path = %prefix.join("."),
            kind = *kind,
            "ignoring unsupported leaf in query"
        ),
    }
}
