pub mod core;
pub mod analysis;
pub mod schema;
pub mod index;
pub mod query;

pub use crate::core::config::{Config, StructQueryIsolation};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::stats::StoreStats;
pub use crate::core::store::Store;
pub use crate::core::types::{Mapping, RecordId, Value};
pub use crate::schema::app::{App, Maintainer, Release};

/*
┌──────────────────────────────────────────────────────────────────────────┐
│                            APPMETA ARCHITECTURE                          │
└──────────────────────────────────────────────────────────────────────────┘

  Store                                   (core/store.rs)
  ┌──────────────────────────────────────────────────────────────────────┐
  │ config: Config                                                       │
  │ inner:  RwLock<StoreInner>                                           │
  │         ├─ root:    FieldNode            field-path tree             │
  │         ├─ records: HashMap<RecordId, Bytes>   raw payloads          │
  │         └─ next_id: u64                  id counter                  │
  └──────────────────────────────────────────────────────────────────────┘

  FieldNode                               (index/field_tree.rs)
  ┌──────────────────────────────────────────────────────────────────────┐
  │ key:      String                                                     │
  │ index:    InvertedIndex  token -> PostingList (ordered, unique ids)  │
  │ children: HashMap<String, FieldNode>                                 │
  └──────────────────────────────────────────────────────────────────────┘

  insert(record, raw)
    Value::decode_record ─► write lock ─► next id ─► records[id] = raw
                                       └─► root.add_node(id, fields)
                                              string   ─► child.index.add
                                              mapping  ─► child.add_node
                                              [mapping]─► child.add_node each
                                              null     ─► child only
                                              other    ─► logged, skipped

  search_struct(query)
    Value::decode_record ─► extract_paths ─► [LeafPath{value, fields}]
                          ─► resolve_all: search(value, fields) per path,
                             intersect left to right, empty if no paths
*/
