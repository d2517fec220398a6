/// How a structural query reads the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructQueryIsolation {
    /// Each leaf path takes its own read lock. Inserts may land between two
    /// lookups, so one query can see a record under some paths but not others.
    #[default]
    PerPath,
    /// One read lock is held across every lookup of the query.
    Snapshot,
}

pub const DEFAULT_ID_FIELD: &str = "id";

#[derive(Debug, Clone)]
pub struct Config {
    /// Value of the first identifier handed out
    pub first_id: u64,

    /// Top-level field that receives the assigned id (as a string) before the
    /// record is indexed, replacing whatever the caller put there. `None`
    /// indexes the record as given.
    pub id_field: Option<String>,

    pub struct_query_isolation: StructQueryIsolation,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_id: 1,
            id_field: Some(DEFAULT_ID_FIELD.to_string()),
            struct_query_isolation: StructQueryIsolation::PerPath,
        }
    }
}

impl Config {
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = Some(field.into());
        self
    }

    pub fn without_id_field(mut self) -> Self {
        self.id_field = None;
        self
    }

    pub fn with_struct_query_isolation(mut self, isolation: StructQueryIsolation) -> Self {
        self.struct_query_isolation = isolation;
        self
    }
}
