use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;
}

/// Splits on Unicode whitespace.
///
/// A value with two or more words also yields itself, untouched, as a single
/// phrase token ahead of the words. No sub-phrases are produced.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut tokens = Vec::with_capacity(words.len() + 1);

        if words.len() > 1 {
            tokens.push(Token::new(text));
        }
        tokens.extend(words.into_iter().map(Token::new));

        tokens
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}
