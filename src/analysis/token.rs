/// A word or, for multi-word values, the whole value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token { text: text.into() }
    }
}
