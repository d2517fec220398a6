use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Record could not be turned into the structural value tree
    Decode,
    NotFound,
    InvalidInput,
    /// The id counter cannot advance past its last value
    IdExhausted,
}

#[derive(Debug, ThisError)]
#[error("{kind:?}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn decode(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::Decode, context.into())
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::NotFound, context.into())
    }

    pub fn id_exhausted(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::IdExhausted, context.into())
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Decode,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
