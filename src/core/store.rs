use std::collections::HashMap;
use bytes::Bytes;
use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::core::config::{Config, StructQueryIsolation};
use crate::core::error::{Error, Result};
use crate::core::stats::StoreStats;
use crate::core::types::{RecordId, Value};
use crate::index::field_tree::FieldNode;
use crate::query::path::extract_paths;
use crate::query::resolver::resolve_all;

/// In-memory record store with a field-path search index.
///
/// One lock covers the field tree, the raw records and the id counter.
/// `insert` holds it exclusively for its whole duration; `get` and `search`
/// share it.
///
/// With the default [`StructQueryIsolation::PerPath`], `search_struct` runs one
/// independently locked `search` per leaf path of the query. An insert that
/// lands between two of those lookups is seen by some and not others, so a
/// structural query under concurrent writes is not atomic. Set
/// [`StructQueryIsolation::Snapshot`] to hold a single read lock for the whole
/// query instead.
pub struct Store {
    config: Config,
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    root: FieldNode,
    records: HashMap<RecordId, Bytes>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let inner = StoreInner {
            root: FieldNode::root(),
            records: HashMap::new(),
            next_id: config.first_id,
        };
        debug!(
            analyzer = %Analyzer::shared().name(),
            first_id = config.first_id,
            isolation = ?config.struct_query_isolation,
            "store created"
        );
        Store {
            config,
            inner: RwLock::new(inner),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Index `record` and keep `raw` for [`Store::get`].
    ///
    /// Fails when `record` cannot be decoded into a mapping or the id counter
    /// is exhausted; then nothing is stored and no id is consumed. Every
    /// successful call allocates a new id, so retrying creates a second record.
    pub fn insert<R>(&self, record: &R, raw: impl Into<Bytes>) -> Result<RecordId>
    where
        R: Serialize + ?Sized,
    {
        let mut fields = Value::decode_record(record)?;
        let raw = raw.into();
        let raw_len = raw.len();

        let mut inner = self.inner.write();
        let id = RecordId(inner.next_id);
        let next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::id_exhausted(format!("id counter exhausted at {}", id)))?;

        if let Some(field) = &self.config.id_field {
            fields.insert(field.clone(), Value::String(id.to_string()));
        }

        inner.records.insert(id, raw);
        inner.root.add_node(id, &fields);
        inner.next_id = next_id;

        debug!(record = %id, bytes = raw_len, fields = fields.len(), "indexed record");
        Ok(id)
    }

    /// Raw bytes exactly as passed to `insert`
    pub fn get(&self, id: RecordId) -> Result<Bytes> {
        let inner = self.inner.read();
        inner
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("record {} not found", id)))
    }

    /// Ids whose value at `fields` produced the token `query`.
    ///
    /// An unknown field path matches nothing.
    pub fn search<S: AsRef<str>>(&self, query: &str, fields: &[S]) -> Vec<RecordId> {
        let inner = self.inner.read();
        search_tree(&inner.root, query, fields)
    }

    /// Ids matching every non-empty string of `query` at its field path.
    ///
    /// A query with no non-empty strings matches nothing.
    pub fn search_struct<R>(&self, query: &R) -> Result<Vec<RecordId>>
    where
        R: Serialize + ?Sized,
    {
        let fields = Value::decode_record(query)?;
        let paths = extract_paths(&fields);
        if paths.is_empty() {
            debug!("structural query has no leaf values");
            return Ok(Vec::new());
        }

        let result = match self.config.struct_query_isolation {
            StructQueryIsolation::PerPath => {
                resolve_all(&paths, |path| self.search(&path.value, path.fields.as_slice()))
            }
            StructQueryIsolation::Snapshot => {
                let inner = self.inner.read();
                resolve_all(&paths, |path| search_tree(&inner.root, &path.value, path.fields.as_slice()))
            }
        };

        debug!(paths = paths.len(), matched = result.len(), "structural query resolved");
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let inner = self.inner.read();
        StoreStats {
            record_count: inner.records.len(),
            field_count: inner.root.descendant_count(),
            token_count: inner.root.token_count(),
            next_id: RecordId(inner.next_id),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn search_tree<S: AsRef<str>>(root: &FieldNode, query: &str, fields: &[S]) -> Vec<RecordId> {
    match root.resolve(fields) {
        Some(node) => node.index().search(query),
        None => Vec::new(),
    }
}
