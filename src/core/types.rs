use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Identifier assigned to a record by the store.
///
/// Counts up from the configured first id. Callers see it as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        RecordId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(RecordId)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("invalid record id '{}': {}", s, e)))
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RecordId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

pub type Mapping = BTreeMap<String, Value>;

/// Structural form of a record: the only shapes the field tree understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
    /// Anything else (numbers, booleans). Holds the kind name for diagnostics.
    Other(&'static str),
}

impl Value {
    /// Decode any serializable record into its structural form.
    pub fn decode<T: Serialize + ?Sized>(record: &T) -> Result<Value> {
        let json = serde_json::to_value(record)?;
        Ok(Value::from(json))
    }

    /// Decode a record whose root must be a mapping.
    pub fn decode_record<T: Serialize + ?Sized>(record: &T) -> Result<Mapping> {
        match Value::decode(record)? {
            Value::Mapping(map) => Ok(map),
            other => Err(Error::decode(format!(
                "record must decode to a mapping, got {}",
                other.kind()
            ))),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Other(kind) => *kind,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
            serde_json::Value::Number(_) => Value::Other("number"),
            serde_json::Value::Bool(_) => Value::Other("bool"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
