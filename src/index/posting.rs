use std::collections::HashSet;
use crate::core::types::RecordId;

/// Record ids for one token, in the order they were first added.
/// An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<RecordId>,
    members: HashSet<RecordId>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            ids: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Append `id` unless it is already present. Returns whether it was added.
    pub fn add(&mut self, id: RecordId) -> bool {
        if !self.members.insert(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Ids present in both inputs, in the order they appear in `right`.
pub fn intersect(left: &[RecordId], right: &[RecordId]) -> Vec<RecordId> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    let members: HashSet<RecordId> = left.iter().copied().collect();
    right
        .iter()
        .copied()
        .filter(|id| members.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<RecordId> {
        raw.iter().copied().map(RecordId).collect()
    }

    #[test]
    fn test_add_ignores_duplicates_and_keeps_order() {
        let mut list = PostingList::new();
        assert!(list.add(RecordId(3)));
        assert!(list.add(RecordId(1)));
        assert!(!list.add(RecordId(3)));
        assert!(!list.add(RecordId(1)));
        assert_eq!(list.ids(), ids(&[3, 1]).as_slice());
        assert!(list.contains(RecordId(1)));
        assert!(!list.contains(RecordId(2)));
    }

    #[test]
    fn test_add_out_of_order_rejects_earlier_ids() {
        let mut list = PostingList::new();
        for raw in [5, 2, 9, 7] {
            assert!(list.add(RecordId(raw)));
        }
        for raw in [2, 5, 7, 9] {
            assert!(!list.add(RecordId(raw)), "id {} added twice", raw);
        }
        assert!(list.add(RecordId(1)));
        assert_eq!(list.ids(), ids(&[5, 2, 9, 7, 1]).as_slice());
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_many_ids_stay_unique() {
        let mut list = PostingList::new();
        for round in 0..2 {
            for raw in 0..10_000 {
                assert_eq!(list.add(RecordId(raw)), round == 0);
            }
        }
        assert_eq!(list.len(), 10_000);
        assert_eq!(list.ids().first(), Some(&RecordId(0)));
        assert_eq!(list.ids().last(), Some(&RecordId(9_999)));
    }

    #[test]
    fn test_intersect_follows_right_order() {
        let result = intersect(&ids(&[1, 2, 3, 4]), &ids(&[4, 9, 2]));
        assert_eq!(result, ids(&[4, 2]));
    }

    #[test]
    fn test_intersect_disjoint_and_empty() {
        assert!(intersect(&ids(&[1, 2]), &ids(&[3])).is_empty());
        assert!(intersect(&[], &ids(&[3])).is_empty());
        assert!(intersect(&ids(&[3]), &[]).is_empty());
    }
}
