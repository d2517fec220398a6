use std::collections::HashMap;
use tracing::debug;
use crate::core::types::{Mapping, RecordId, Value};
use crate::index::inverted::InvertedIndex;

/// One field of the indexed record shape.
///
/// The root has an empty key. A node's index only holds tokens from string
/// values found at exactly this node's path; nested mappings and sequences
/// descend into `children` instead. Children are created the first time a
/// field name is seen and are never removed.
#[derive(Debug, Clone, Default)]
pub struct FieldNode {
    key: String,
    index: InvertedIndex,
    children: HashMap<String, FieldNode>,
}

impl FieldNode {
    pub fn new(key: impl Into<String>) -> Self {
        FieldNode {
            key: key.into(),
            index: InvertedIndex::new(),
            children: HashMap::new(),
        }
    }

    pub fn root() -> Self {
        FieldNode::new("")
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn child(&self, key: &str) -> Option<&FieldNode> {
        self.children.get(key)
    }

    pub fn children(&self) -> impl Iterator<Item = &FieldNode> {
        self.children.values()
    }

    /// Index every string leaf of `fields` under `id`.
    pub fn add_node(&mut self, id: RecordId, fields: &Mapping) {
        for (key, value) in fields {
            let child = self
                .children
                .entry(key.clone())
                .or_insert_with(|| FieldNode::new(key.as_str()));
            child.add_value(id, value);
        }
    }

    fn add_value(&mut self, id: RecordId, value: &Value) {
        match value {
            Value::Null => {}
            Value::String(s) => self.index.add(id, s),
            Value::Mapping(nested) => self.add_node(id, nested),
            Value::Sequence(items) => {
                for item in items {
                    match item {
                        Value::Mapping(nested) => self.add_node(id, nested),
                        Value::Null => {}
                        other => debug!(
                            record = %id,
                            field = %self.key,
                            kind = other.kind(),
                            "skipping unsupported sequence element"
                        ),
                    }
                }
            }
            Value::Other(kind) => debug!(
                record = %id,
                field = %self.key,
                kind = *kind,
                "skipping unsupported leaf"
            ),
        }
    }

    /// Walk down `path` from this node. `None` if any segment is missing.
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> Option<&FieldNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Distinct tokens summed over this node and all descendants
    pub fn token_count(&self) -> usize {
        self.index.term_count()
            + self
                .children
                .values()
                .map(FieldNode::token_count)
                .sum::<usize>()
    }
}
