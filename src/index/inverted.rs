use std::collections::HashMap;
use crate::analysis::analyzer::Analyzer;
use crate::core::types::RecordId;
use crate::index::posting::PostingList;

/// Lowercased token -> ids of the records whose value produced that token.
///
/// Adding `"this is a Cat"` under id 1 stores `this`, `is`, `a`, `cat` and the
/// whole phrase `this is a cat`. Adding `"this a"` under id 2 afterwards makes
/// `a` map to [1, 2] and adds the phrase `this a` -> [2]. `this is` is never
/// stored, so searching it finds nothing.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingList>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    pub fn add(&mut self, id: RecordId, value: &str) {
        for token in Analyzer::shared().analyze(value) {
            self.postings.entry(token.text).or_default().add(id);
        }
    }

    /// Exact token lookup. The query is lowercased but not split.
    pub fn search(&self, query: &str) -> Vec<RecordId> {
        let term = Analyzer::shared().normalize_query(query);
        self.postings
            .get(&term)
            .map(|list| list.ids().to_vec())
            .unwrap_or_default()
    }

    pub fn posting(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
