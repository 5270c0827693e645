use thiserror::Error;

/// Canonical result for every seqquery operator.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{op}: the sequence is empty")]
    EmptySequence { op: &'static str },

    #[error("{op}: expected exactly one element, found {len}")]
    MultipleElements { op: &'static str, len: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid key type: {0}")]
    InvalidKeyType(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for the emptiness failure that `*_or_default` operators swallow.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Error::EmptySequence { .. })
    }
}
