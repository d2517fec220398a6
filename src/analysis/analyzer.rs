use std::sync::LazyLock;
use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

static STANDARD: LazyLock<Analyzer> = LazyLock::new(Analyzer::standard);

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let tokens = self.tokenizer.tokenize(text);
        self.apply_filters(tokens)
    }

    /// Normalize a query string without splitting it, so it can only hit a
    /// stored word or a stored whole phrase.
    pub fn normalize_query(&self, query: &str) -> String {
        self.apply_filters(vec![Token::new(query)])
            .into_iter()
            .next()
            .map(|token| token.text)
            .unwrap_or_default()
    }

    /// Pipeline description, e.g. `whitespace+lowercase`
    pub fn name(&self) -> String {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect::<Vec<_>>()
            .join("+")
    }

    fn apply_filters(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    /// Whitespace words plus whole phrase, lowercased
    pub fn standard() -> Self {
        Analyzer::new(Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(LowercaseFilter))
    }

    /// Shared instance of [`Analyzer::standard`]
    pub fn shared() -> &'static Analyzer {
        &STANDARD
    }
}
