use serde::{Serialize, Deserialize};
use crate::core::types::RecordId;

/// Store statistics for monitoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub record_count: usize,
    /// Field nodes below the root
    pub field_count: usize,
    /// Distinct tokens summed over every field node
    pub token_count: usize,
    pub next_id: RecordId,
}
